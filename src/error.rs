use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for git-bump operations
#[derive(Error, Debug)]
pub enum GitBumpError {
    #[error("{}", render_input(.message, .context))]
    InvalidInput {
        message: String,
        context: Option<String>,
    },

    #[error("Unable to read manifest {}: {source}", .path.display())]
    ManifestNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON syntax in {}: {source}", .path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid or malformed JSON file: {}", .path.display())]
    InvalidManifest { path: PathBuf },

    #[error("Invalid or missing semver version in JSON file: {}", .path.display())]
    InvalidVersion { path: PathBuf },

    #[error("Unable to read companion manifest {}: {source}", .path.display())]
    CompanionUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unable to write manifest {}: {source}", .path.display())]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot increment {0}: numeric identifier is already at its maximum")]
    VersionOverflow(String),

    #[error("Command `{command}` failed: {message}")]
    SubprocessFailure { command: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),
}

fn render_input(message: &str, context: &Option<String>) -> String {
    match context {
        Some(context) => format!("{}: {}", message, context),
        None => message.to_string(),
    }
}

/// Convenience type alias for Results in git-bump
pub type Result<T> = std::result::Result<T, GitBumpError>;

impl GitBumpError {
    /// Create an invalid input error without context
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        GitBumpError::InvalidInput {
            message: msg.into(),
            context: None,
        }
    }

    /// Create an invalid input error carrying the offending value
    pub fn invalid_input_with(msg: impl Into<String>, context: impl Into<String>) -> Self {
        GitBumpError::InvalidInput {
            message: msg.into(),
            context: Some(context.into()),
        }
    }

    /// Create a subprocess failure for the given argument vector
    pub fn subprocess(program: &str, args: &[&str], msg: impl Into<String>) -> Self {
        let mut command = program.to_string();
        for arg in args {
            command.push(' ');
            command.push_str(arg);
        }
        GitBumpError::SubprocessFailure {
            command,
            message: msg.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitBumpError::Config(msg.into())
    }

    /// The offending input or path attached to this error, if any.
    pub fn context(&self) -> Option<String> {
        match self {
            GitBumpError::InvalidInput { context, .. } => context.clone(),
            GitBumpError::ManifestNotFound { path, .. }
            | GitBumpError::MalformedJson { path, .. }
            | GitBumpError::InvalidManifest { path }
            | GitBumpError::InvalidVersion { path }
            | GitBumpError::CompanionUnavailable { path, .. }
            | GitBumpError::ManifestWrite { path, .. } => Some(path.display().to_string()),
            GitBumpError::VersionOverflow(version) => Some(version.clone()),
            GitBumpError::SubprocessFailure { command, .. } => Some(command.clone()),
            GitBumpError::Config(_) | GitBumpError::Git(_) => None,
        }
    }

    /// Whether this error was raised by argument validation, before any I/O.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, GitBumpError::InvalidInput { .. })
    }
}
