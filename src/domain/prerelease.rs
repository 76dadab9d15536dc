//! Pre-release component handling for semantic versioning
//!
//! A pre-release is the dot separated identifier list after the `-` in
//! `1.2.3-alpha.1`. Identifiers are either numeric counters or alphanumeric
//! channel names. See https://semver.org/#spec-item-9

use crate::error::{GitBumpError, Result};
use std::fmt;

/// One dot separated pre-release identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    /// Numeric counter, incremented on every pre-release bump
    Numeric(u64),
    /// Named channel such as `alpha` or `rc`
    Alpha(String),
}

impl Identifier {
    fn parse(raw: &str) -> Self {
        match raw.parse::<u64>() {
            Ok(n) if raw.bytes().all(|b| b.is_ascii_digit()) => Identifier::Numeric(n),
            _ => Identifier::Alpha(raw.to_string()),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::Alpha(s) => f.write_str(s),
        }
    }
}

/// Pre-release component of a version, possibly empty
///
/// # Examples
/// - "" -> no identifiers (stable release)
/// - "0" -> [Numeric(0)]
/// - "alpha.1" -> [Alpha("alpha"), Numeric(1)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreRelease {
    pub identifiers: Vec<Identifier>,
}

impl PreRelease {
    /// Split an already validated semver pre-release into identifiers
    pub fn from_semver(pre: &semver::Prerelease) -> Self {
        if pre.is_empty() {
            return PreRelease::default();
        }

        PreRelease {
            identifiers: pre.as_str().split('.').map(Identifier::parse).collect(),
        }
    }

    /// Whether there are no identifiers, i.e. a stable release
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Compute the next pre-release on the given channel.
    ///
    /// Without identifiers the counter starts at `0`. Otherwise the right-most
    /// numeric identifier is incremented, or a `0` appended when there is
    /// none. A channel that differs from the leading identifier (or one not
    /// followed by a counter) restarts at `<channel>.0`.
    ///
    /// # Examples
    /// ```ignore
    /// let pr = PreRelease::parse("alpha.1")?;
    /// assert_eq!(pr.bump(Some("alpha"))?.to_string(), "alpha.2");
    /// assert_eq!(pr.bump(Some("beta"))?.to_string(), "beta.0");
    /// assert_eq!(PreRelease::default().bump(None)?.to_string(), "0");
    /// ```
    ///
    /// Fails with `VersionOverflow` when the kept counter is already `u64::MAX`.
    pub fn bump(&self, channel: Option<&str>) -> Result<Self> {
        let mut identifiers = self.identifiers.clone();

        let counter = identifiers.iter_mut().rev().find_map(|id| match id {
            Identifier::Numeric(n) => Some(n),
            Identifier::Alpha(_) => None,
        });
        let overflowed = match counter {
            Some(n) => match n.checked_add(1) {
                Some(next) => {
                    *n = next;
                    false
                }
                None => true,
            },
            None => {
                identifiers.push(Identifier::Numeric(0));
                false
            }
        };

        if let Some(channel) = channel {
            let same_channel =
                matches!(identifiers.first(), Some(Identifier::Alpha(first)) if first == channel);
            let counted = matches!(identifiers.get(1), Some(Identifier::Numeric(_)));
            if !(same_channel && counted) {
                return Ok(PreRelease {
                    identifiers: vec![
                        Identifier::Alpha(channel.to_string()),
                        Identifier::Numeric(0),
                    ],
                });
            }
        }

        if overflowed {
            return Err(GitBumpError::VersionOverflow(self.to_string()));
        }
        Ok(PreRelease { identifiers })
    }

    /// Convert back into the `semver` crate representation
    pub fn to_semver(&self) -> Result<semver::Prerelease> {
        semver::Prerelease::new(&self.to_string()).map_err(|e| {
            GitBumpError::invalid_input_with(
                format!("Invalid pre-release component ({})", e),
                self.to_string(),
            )
        })
    }

    /// Parse a pre-release string such as `beta.1`
    pub fn parse(s: &str) -> Result<Self> {
        let pre = semver::Prerelease::new(s).map_err(|e| {
            GitBumpError::invalid_input_with(format!("Invalid pre-release ({})", e), s)
        })?;
        Ok(Self::from_semver(&pre))
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.identifiers.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", id)?;
        }
        Ok(())
    }
}

/// Check a user supplied pre-release channel name.
///
/// The channel must be non-empty and valid as a semver pre-release.
pub fn validate_channel(channel: &str) -> Result<()> {
    match PreRelease::parse(channel) {
        Ok(pre) if !pre.is_empty() => Ok(()),
        _ => Err(GitBumpError::invalid_input_with(
            "Invalid pre-release identifier argument",
            channel,
        )),
    }
}
