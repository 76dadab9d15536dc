//! Input predicates guarding every subprocess and manifest boundary.
//!
//! The `is_*`/`is_not_*` functions over [`Value`] classify arbitrary input
//! (for example a field read out of a manifest), where `None` stands for an
//! undefined value and `Some(Value::Null)` for an explicit null. The
//! string-level helpers below them are what the typed core calls.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::domain::ReleaseType;

/// Symbolic name always accepted as a revision.
pub const HEAD: &str = "HEAD";

fn commit_hash_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9a-f]{5,40}$").expect("commit hash pattern is valid"))
}

/// True for every value except the absent sentinels (undefined and null).
pub fn is_given(value: Option<&Value>) -> bool {
    !matches!(value, None | Some(Value::Null))
}

/// True unless the value is a string of at least one character.
pub fn is_not_string(value: Option<&Value>) -> bool {
    !matches!(value, Some(Value::String(s)) if !s.is_empty())
}

/// True unless the value names a commit hash, a semver tag or `HEAD`.
pub fn is_not_hash_or_tag(value: Option<&Value>) -> bool {
    !matches!(value, Some(Value::String(s)) if is_hash_or_tag(s))
}

/// True unless the value is one of the seven release type keywords.
pub fn is_not_semver_release_type(value: Option<&Value>) -> bool {
    !matches!(value, Some(Value::String(s)) if is_release_type(s))
}

/// True unless the value is a valid semantic version, optionally `v`-prefixed.
pub fn is_not_semver(value: Option<&Value>) -> bool {
    !matches!(value, Some(Value::String(s)) if is_semver(s))
}

/// True unless the value is an array, empty ones included.
pub fn is_not_array(value: Option<&Value>) -> bool {
    !matches!(value, Some(Value::Array(_)))
}

/// Whether `rev` can be handed to `git log` as a range bound.
///
/// Accepts 5 to 40 lowercase hex digits, a semver tag with an optional
/// leading `v`, or `HEAD`. Ancestry (`^`, `~`) and range (`..`, `...`)
/// syntax never matches any of the three grammars.
pub fn is_hash_or_tag(rev: &str) -> bool {
    rev == HEAD || commit_hash_regex().is_match(rev) || is_semver(rev)
}

/// Whether `version` parses as semver once an optional leading `v` is removed.
pub fn is_semver(version: &str) -> bool {
    parse_version(version).is_some()
}

/// Whether `value` is exactly one of the release type keywords.
pub fn is_release_type(value: &str) -> bool {
    value.parse::<ReleaseType>().is_ok()
}

/// Canonical form of a version: `v` and build metadata stripped.
///
/// ```
/// assert_eq!(git_bump::validators::clean_version("v1.2.3").as_deref(), Some("1.2.3"));
/// assert_eq!(git_bump::validators::clean_version("1.2.3+build.5").as_deref(), Some("1.2.3"));
/// assert_eq!(git_bump::validators::clean_version("1.3"), None);
/// ```
pub fn clean_version(version: &str) -> Option<String> {
    parse_version(version).map(|v| without_build(&v).to_string())
}

/// Copy of `version` with build metadata cleared.
pub fn without_build(version: &semver::Version) -> semver::Version {
    semver::Version {
        build: semver::BuildMetadata::EMPTY,
        ..version.clone()
    }
}

/// Parse a version, tolerating one leading `v`.
pub fn parse_version(version: &str) -> Option<semver::Version> {
    let stripped = version.strip_prefix('v').unwrap_or(version);
    semver::Version::parse(stripped).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_given() {
        assert!(is_given(Some(&json!("str"))));
        assert!(is_given(Some(&json!(""))));
        assert!(is_given(Some(&json!(0))));
        assert!(is_given(Some(&json!(false))));
        assert!(is_given(Some(&json!([]))));
        assert!(is_given(Some(&json!({}))));
        assert!(!is_given(Some(&Value::Null)));
        assert!(!is_given(None));
    }

    #[test]
    fn test_hash_lengths() {
        assert!(!is_hash_or_tag("4ec9"));
        assert!(is_hash_or_tag("4ec99"));
        assert!(is_hash_or_tag(&"a".repeat(40)));
        assert!(!is_hash_or_tag(&"a".repeat(41)));
    }

    #[test]
    fn test_uppercase_hex_rejected() {
        assert!(!is_hash_or_tag("4EC99F7"));
    }

    #[test]
    fn test_clean_version_keeps_prerelease_drops_build() {
        assert_eq!(
            clean_version("v1.2.3-next.2.beta.0+build.exp").as_deref(),
            Some("1.2.3-next.2.beta.0")
        );
        assert_eq!(clean_version("v1.0.0+build.5").as_deref(), Some("1.0.0"));
        assert_eq!(clean_version("vv1.2.3"), None);
    }
}
