use crate::error::{GitBumpError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project-level configuration file
pub const CONFIG_FILE_NAME: &str = "gitbump.toml";

/// Represents the complete configuration for git-bump.
///
/// Contains the manifest file layout, tag message template, log format and git executable.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub tag: TagConfig,

    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub git: GitConfig,
}

fn default_manifest() -> PathBuf {
    PathBuf::from("package.json")
}

fn default_companions() -> Vec<PathBuf> {
    vec![
        PathBuf::from("package-lock.json"),
        PathBuf::from("npm-shrinkwrap.json"),
    ]
}

fn default_changelog() -> PathBuf {
    PathBuf::from("CHANGELOG.md")
}

fn default_message() -> String {
    crate::domain::tag::DEFAULT_MESSAGE.to_string()
}

fn default_log_format() -> String {
    crate::history::DEFAULT_FORMAT.to_string()
}

fn default_program() -> String {
    crate::git::runner::DEFAULT_PROGRAM.to_string()
}

/// Files read, rewritten and staged during a release.
///
/// Companions are updated and staged in the listed order.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FilesConfig {
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    #[serde(default = "default_companions")]
    pub companions: Vec<PathBuf>,

    #[serde(default = "default_changelog")]
    pub changelog: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            manifest: default_manifest(),
            companions: default_companions(),
            changelog: default_changelog(),
        }
    }
}

/// Commit and tag message settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagConfig {
    /// Template with `%s` standing for the version
    #[serde(default = "default_message")]
    pub message: String,
}

impl Default for TagConfig {
    fn default() -> Self {
        TagConfig {
            message: default_message(),
        }
    }
}

/// Changelog listing settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LogConfig {
    /// `git log --format` placeholder string
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            format: default_log_format(),
        }
    }
}

/// Git executable settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    #[serde(default = "default_program")]
    pub program: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            program: default_program(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitbump.toml` in current directory
/// 3. `~/.config/.gitbump.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        PathBuf::from(CONFIG_FILE_NAME)
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if user_path.exists() {
            user_path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        GitBumpError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;

    toml::from_str(&config_str).map_err(|e| {
        GitBumpError::config(format!("Cannot parse {}: {}", path.display(), e))
    })
}
