use crate::error::{GitBumpError, Result};
use crate::validators;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Field holding the package version
pub const VERSION_FIELD: &str = "version";

/// A parsed JSON manifest such as `package.json`
///
/// Only the `version` field is interpreted; every other field is carried
/// through untouched and in its original order.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestRecord {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl ManifestRecord {
    /// Parse manifest contents read from `path`.
    ///
    /// # Returns
    /// * `Ok(ManifestRecord)` - The contents are a JSON object
    /// * `Err(MalformedJson)` - The contents are not valid JSON
    /// * `Err(InvalidManifest)` - Valid JSON, but not an object (`null`, arrays, scalars)
    pub fn parse(path: impl Into<PathBuf>, contents: &str) -> Result<Self> {
        let path = path.into();
        let value: Value = serde_json::from_str(contents).map_err(|source| {
            GitBumpError::MalformedJson {
                path: path.clone(),
                source,
            }
        })?;

        match value {
            Value::Object(fields) => Ok(ManifestRecord { path, fields }),
            _ => Err(GitBumpError::InvalidManifest { path }),
        }
    }

    /// Path the manifest was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored version, exactly as written in the file
    pub fn raw_version(&self) -> Option<&str> {
        self.fields.get(VERSION_FIELD).and_then(Value::as_str)
    }

    /// The stored version, validated and cleaned of a leading `v`
    pub fn version(&self) -> Result<semver::Version> {
        self.raw_version()
            .and_then(validators::parse_version)
            .ok_or_else(|| GitBumpError::InvalidVersion {
                path: self.path.clone(),
            })
    }

    /// Replace (or insert) the version field
    pub fn set_version(&mut self, version: &str) {
        self.fields
            .insert(VERSION_FIELD.to_string(), Value::String(version.to_string()));
    }

    /// Serialize with 2-space indentation and a trailing newline
    pub fn to_json_string(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&self.fields).map_err(|source| {
            GitBumpError::MalformedJson {
                path: self.path.clone(),
                source,
            }
        })?;
        out.push('\n');
        Ok(out)
    }
}
