//! Terminal interaction for the release workflow.
//!
//! [formatter] renders versions, warnings and commit listings; this module
//! owns the confirmation prompt shown before a release commits and tags.

use std::io::{self, BufRead, Write};

use anyhow::Result;

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, display_history, display_status, display_success,
    display_version_change, format_version_change,
};

/// Ask a yes/no question on stdin, defaulting to no.
///
/// `y` and `yes` (any case) confirm; an empty line or anything else declines.
/// The `(y/N): ` suffix is appended to `prompt`.
pub fn confirm_action(prompt: &str) -> Result<bool> {
    let stdin = io::stdin();
    confirm_from(prompt, &mut stdin.lock(), &mut io::stdout())
}

/// [confirm_action] over arbitrary reader/writer, for tests.
pub fn confirm_from<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> Result<bool> {
    write!(output, "\n{} (y/N): ", prompt)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(is_affirmative(&line))
}

fn is_affirmative(response: &str) -> bool {
    let response = response.trim().to_lowercase();
    response == "y" || response == "yes"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative("YES"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("yep"));
    }

    #[test]
    fn test_confirm_from_reader() {
        let mut input = Cursor::new("yes\n");
        let mut output = Vec::new();
        assert!(confirm_from("Create tag v1.0.0?", &mut input, &mut output).unwrap());
        assert!(String::from_utf8(output).unwrap().contains("Create tag v1.0.0? (y/N): "));
    }

    #[test]
    fn test_confirm_defaults_to_no() {
        let mut input = Cursor::new("\n");
        let mut output = Vec::new();
        assert!(!confirm_from("Continue?", &mut input, &mut output).unwrap());
    }
}
