use crate::error::GitBumpError;
use std::fmt;
use std::str::FromStr;

/// Which component of a version a release increments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseType {
    Major,
    Premajor,
    Minor,
    Preminor,
    Patch,
    Prepatch,
    Prerelease,
}

impl ReleaseType {
    /// Every release type, in keyword order
    pub const ALL: [ReleaseType; 7] = [
        ReleaseType::Major,
        ReleaseType::Premajor,
        ReleaseType::Minor,
        ReleaseType::Preminor,
        ReleaseType::Patch,
        ReleaseType::Prepatch,
        ReleaseType::Prerelease,
    ];

    /// Keyword accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseType::Major => "major",
            ReleaseType::Premajor => "premajor",
            ReleaseType::Minor => "minor",
            ReleaseType::Preminor => "preminor",
            ReleaseType::Patch => "patch",
            ReleaseType::Prepatch => "prepatch",
            ReleaseType::Prerelease => "prerelease",
        }
    }
}

impl FromStr for ReleaseType {
    type Err = GitBumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReleaseType::ALL
            .iter()
            .copied()
            .find(|release| release.as_str() == s)
            .ok_or_else(|| {
                GitBumpError::invalid_input_with("Invalid semver release type", s.to_string())
            })
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_keywords() {
        for release in ReleaseType::ALL {
            assert_eq!(release.as_str().parse::<ReleaseType>().unwrap(), release);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("MAJOR".parse::<ReleaseType>().is_err());
        assert!("Prerelease".parse::<ReleaseType>().is_err());
        assert!("".parse::<ReleaseType>().is_err());
        assert!("majority".parse::<ReleaseType>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ReleaseType::Preminor.to_string(), "preminor");
    }
}
