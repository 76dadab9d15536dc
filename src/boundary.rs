use std::fmt;
use std::path::PathBuf;

/// Non-fatal conditions met while releasing.
/// These never fail the operation but should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// An optional companion manifest does not exist and was not updated
    CompanionMissing { path: PathBuf },
    /// Staging an optional file failed; the release continued without it
    OptionalStageFailed { path: String, reason: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::CompanionMissing { path } => {
                write!(f, "Skipped '{}': file not found", path.display())
            }
            BoundaryWarning::OptionalStageFailed { path, reason } => {
                write!(f, "Could not stage '{}': {}", path, reason)
            }
        }
    }
}
