//! Commit subject listing for changelogs

use crate::error::{GitBumpError, Result};
use crate::git::CommandRunner;
use crate::validators;
use tracing::debug;

/// Abbreviated hash followed by the subject line
pub const DEFAULT_FORMAT: &str = "%h %s";

/// Bounds and format of a history listing
///
/// `from` is exclusive and `to` inclusive, like `git log from..to`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub format: Option<String>,
}

impl LogQuery {
    /// Revision range argument for `git log`, if any
    ///
    /// - from and to: `from..to`
    /// - only from: `from..`
    /// - only to: `to`
    /// - neither: whole history, no argument
    pub fn range(&self) -> Option<String> {
        match (self.from.as_deref(), self.to.as_deref()) {
            (Some(from), Some(to)) => Some(format!("{}..{}", from, to)),
            (Some(from), None) => Some(format!("{}..", from)),
            (None, Some(to)) => Some(to.to_string()),
            (None, None) => None,
        }
    }

    fn validate(&self) -> Result<()> {
        if let Some(from) = self.from.as_deref() {
            if !validators::is_hash_or_tag(from) {
                return Err(GitBumpError::invalid_input_with(
                    "Invalid from range argument",
                    from,
                ));
            }
        }

        if let Some(to) = self.to.as_deref() {
            if !validators::is_hash_or_tag(to) {
                return Err(GitBumpError::invalid_input_with("Invalid to range argument", to));
            }
        }

        if matches!(self.format.as_deref(), Some("")) {
            return Err(GitBumpError::invalid_input("Invalid format argument"));
        }

        Ok(())
    }
}

/// List formatted commit lines, newest first.
///
/// Runs `git log --oneline --format=<format> [range]` once. Inputs are
/// validated before the command runs.
///
/// # Returns
/// * `Ok(Vec<String>)` - One entry per commit, empty lines removed
/// * `Err(InvalidInput)` - Invalid revision bound or empty format
/// * `Err(SubprocessFailure)` - git failed or reported anything on stderr
pub fn list<R: CommandRunner>(runner: &R, query: &LogQuery) -> Result<Vec<String>> {
    query.validate()?;

    let format = format!(
        "--format={}",
        query.format.as_deref().unwrap_or(DEFAULT_FORMAT)
    );
    let range = query.range();

    let mut args = vec!["log", "--oneline", format.as_str()];
    if let Some(range) = range.as_deref() {
        args.push(range);
    }

    let output = runner.run(&args)?;
    if !output.stderr.trim().is_empty() {
        return Err(GitBumpError::subprocess(
            "git",
            &args,
            output.stderr.trim().to_string(),
        ));
    }

    let subjects: Vec<String> = output
        .stdout
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    debug!(count = subjects.len(), range = ?range, "listed commits");
    Ok(subjects)
}
