use crate::error::{GitBumpError, Result};
use crate::validators;

/// Placeholder replaced by the cleaned version in message templates
pub const VERSION_PLACEHOLDER: &str = "%s";

/// Commit and tag message used when none is supplied
pub const DEFAULT_MESSAGE: &str = "Bump to v%s";

/// An annotated release tag derived from a version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Version without the `v` prefix (e.g., "1.2.3")
    pub version: String,
    /// Tag name, always `v` + version (e.g., "v1.2.3")
    pub name: String,
}

impl Tag {
    /// Build a tag from a possibly `v`-prefixed version string
    pub fn for_version(version: &str) -> Result<Self> {
        let version = validators::clean_version(version).ok_or_else(|| {
            GitBumpError::invalid_input_with("Invalid or missing semver version argument", version)
        })?;

        Ok(Tag {
            name: format!("v{}", version),
            version,
        })
    }
}

/// Commit/tag message template (e.g., "Bump to v%s", "Release %s")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    pub template: String,
}

impl MessageTemplate {
    /// Create a new message template
    pub fn new(template: impl Into<String>) -> Self {
        MessageTemplate {
            template: template.into(),
        }
    }

    /// Replace every `%s` with the version.
    /// Example: template="Bump to new v%s", version="1.0.0" -> "Bump to new v1.0.0"
    pub fn render(&self, version: &str) -> String {
        self.template.replace(VERSION_PLACEHOLDER, version)
    }
}

impl Default for MessageTemplate {
    fn default() -> Self {
        MessageTemplate::new(DEFAULT_MESSAGE)
    }
}
