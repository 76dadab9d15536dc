use crate::domain::prerelease::PreRelease;
use crate::domain::ReleaseType;
use crate::error::{GitBumpError, Result};
use semver::{BuildMetadata, Prerelease, Version};

/// Compute the version following `current` for a release type.
///
/// Pure function of its inputs. Build metadata is always dropped and the
/// rules match npm's `semver.inc`:
/// - **major**: a pre-release of an `X.0.0` version resolves to `X.0.0`,
///   anything else bumps major
/// - **minor**: a pre-release of an `X.Y.0` version resolves to `X.Y.0`,
///   anything else bumps minor
/// - **patch**: a pre-release resolves to its stable triple, a stable
///   version bumps patch
/// - **premajor/preminor/prepatch**: bump the component, then start a
///   pre-release on `channel`
/// - **prerelease**: bump patch when stable, then advance the pre-release
///
/// # Example
/// ```ignore
/// let v = Version::parse("0.1.1-alpha.1")?;
/// assert_eq!(increment(&v, ReleaseType::Prerelease, Some("beta"))?.to_string(), "0.1.1-beta.0");
/// ```
pub fn increment(current: &Version, release: ReleaseType, channel: Option<&str>) -> Result<Version> {
    let stable = current.pre.is_empty();
    let step = |n: u64| {
        n.checked_add(1)
            .ok_or_else(|| GitBumpError::VersionOverflow(current.to_string()))
    };
    let mut next = Version {
        major: current.major,
        minor: current.minor,
        patch: current.patch,
        pre: Prerelease::EMPTY,
        build: BuildMetadata::EMPTY,
    };

    match release {
        ReleaseType::Major => {
            if stable || current.minor != 0 || current.patch != 0 {
                next.major = step(next.major)?;
            }
            next.minor = 0;
            next.patch = 0;
        }
        ReleaseType::Premajor => {
            next.major = step(next.major)?;
            next.minor = 0;
            next.patch = 0;
            next.pre = PreRelease::default().bump(channel)?.to_semver()?;
        }
        ReleaseType::Minor => {
            if stable || current.patch != 0 {
                next.minor = step(next.minor)?;
            }
            next.patch = 0;
        }
        ReleaseType::Preminor => {
            next.minor = step(next.minor)?;
            next.patch = 0;
            next.pre = PreRelease::default().bump(channel)?.to_semver()?;
        }
        ReleaseType::Patch => {
            if stable {
                next.patch = step(next.patch)?;
            }
        }
        ReleaseType::Prepatch => {
            next.patch = step(next.patch)?;
            next.pre = PreRelease::default().bump(channel)?.to_semver()?;
        }
        ReleaseType::Prerelease => {
            if stable {
                next.patch = step(next.patch)?;
            }
            next.pre = PreRelease::from_semver(&current.pre)
                .bump(channel)
                .map_err(|_| GitBumpError::VersionOverflow(current.to_string()))?
                .to_semver()?;
        }
    }

    Ok(next)
}
