//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.
//! `format_*` functions build strings and are unit tested; `display_*` functions print them.

use crate::boundary::BoundaryWarning;
use crate::bump::BumpResult;
use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Plain-text summary of a version change, e.g. `0.1.1 -> 1.0.0`.
pub fn format_version_change(result: &BumpResult) -> String {
    format!("{} -> {}", result.current, result.next)
}

/// Display the version change computed for a release.
///
/// # Arguments
/// * `result` - Current and next versions
/// * `dry_run` - Whether nothing was written
pub fn display_version_change(result: &BumpResult, dry_run: bool) {
    let heading = if dry_run {
        "Proposed Version Change"
    } else {
        "Version Change"
    };
    println!("\n{}", style(heading).bold());
    println!("  {}", style(format_version_change(result)).cyan());
}

/// Display a changelog listing, one commit per line.
pub fn display_history(subjects: &[String]) {
    if subjects.is_empty() {
        display_status("No commits in range");
        return;
    }

    for subject in subjects {
        println!("  - {}", subject);
    }
}
