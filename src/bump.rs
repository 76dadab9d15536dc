//! Version resolution and manifest rewriting
//!
//! [resolve] computes the next version from the primary manifest without
//! writing anything; [update_manifests] persists it into the primary
//! manifest and any companion lock files; [bump] does both.

use crate::boundary::BoundaryWarning;
use crate::config::FilesConfig;
use crate::domain::{self, prerelease, ManifestRecord, ReleaseType};
use crate::error::{GitBumpError, Result};
use crate::store::ManifestStore;
use crate::validators;
use serde::Serialize;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Outcome of one version resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BumpResult {
    /// Version currently stored in the primary manifest, `v` prefix and build metadata removed
    pub current: String,
    /// Version the release will carry
    pub next: String,
}

/// Result of a full bump: the versions plus anything skipped on the way
#[derive(Debug, Clone, PartialEq)]
pub struct BumpReport {
    pub result: BumpResult,
    pub warnings: Vec<BoundaryWarning>,
}

/// Validate the release arguments without touching any file.
pub fn parse_release_args(
    release_type: Option<&str>,
    preid: Option<&str>,
) -> Result<ReleaseType> {
    let release = release_type
        .and_then(|s| s.parse::<ReleaseType>().ok())
        .ok_or_else(|| {
            GitBumpError::invalid_input("Invalid or missing semver release type argument")
        })?;

    if let Some(channel) = preid {
        prerelease::validate_channel(channel)?;
    }

    Ok(release)
}

/// Resolve the next version for a release type.
///
/// Arguments are validated before the manifest is read, so invalid input
/// performs no I/O at all.
///
/// # Arguments
/// * `store` - Manifest file access
/// * `files` - Location of the primary manifest
/// * `release_type` - One of `major`, `premajor`, `minor`, `preminor`, `patch`, `prepatch`, `prerelease`
/// * `preid` - Optional pre-release channel (e.g., "alpha")
///
/// # Returns
/// * `Ok(BumpResult)` - Current and next versions
/// * `Err(InvalidInput)` - Missing or invalid release type or pre-release id
/// * `Err(ManifestNotFound | MalformedJson | InvalidManifest | InvalidVersion)` - Unusable primary manifest
pub fn resolve<S: ManifestStore>(
    store: &S,
    files: &FilesConfig,
    release_type: Option<&str>,
    preid: Option<&str>,
) -> Result<BumpResult> {
    let release = parse_release_args(release_type, preid)?;

    let manifest = read_manifest(store, &files.manifest)?;
    let current = validators::without_build(&manifest.version()?);
    let next = domain::increment(&current, release, preid)?;

    debug!(%current, %next, %release, "resolved next version");

    Ok(BumpResult {
        current: current.to_string(),
        next: next.to_string(),
    })
}

/// Write `result.next` into the primary manifest and its companions.
///
/// The primary manifest is always written first. A companion that does not
/// exist is skipped and reported as a [BoundaryWarning]; any other failure
/// aborts immediately, leaving already written files in place.
pub fn update_manifests<S: ManifestStore>(
    store: &S,
    files: &FilesConfig,
    result: &BumpResult,
) -> Result<Vec<BoundaryWarning>> {
    let mut primary = read_manifest(store, &files.manifest)?;
    primary.set_version(&result.next);
    write_manifest(store, &primary)?;

    let mut warnings = Vec::new();
    for path in &files.companions {
        let contents = match store.read(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "companion manifest not present, skipping");
                warnings.push(BoundaryWarning::CompanionMissing { path: path.clone() });
                continue;
            }
            Err(source) => {
                return Err(GitBumpError::CompanionUnavailable {
                    path: path.clone(),
                    source,
                })
            }
        };

        let mut companion = ManifestRecord::parse(path, &contents)?;
        companion.set_version(&result.next);
        write_manifest(store, &companion)?;
    }

    Ok(warnings)
}

/// Resolve the next version and persist it into every manifest.
pub fn bump<S: ManifestStore>(
    store: &S,
    files: &FilesConfig,
    release_type: Option<&str>,
    preid: Option<&str>,
) -> Result<BumpReport> {
    let result = resolve(store, files, release_type, preid)?;
    let warnings = update_manifests(store, files, &result)?;
    Ok(BumpReport { result, warnings })
}

fn read_manifest<S: ManifestStore>(store: &S, path: &Path) -> Result<ManifestRecord> {
    let contents = store
        .read(path)
        .map_err(|source| GitBumpError::ManifestNotFound {
            path: path.to_path_buf(),
            source,
        })?;
    ManifestRecord::parse(path, &contents)
}

fn write_manifest<S: ManifestStore>(store: &S, manifest: &ManifestRecord) -> Result<()> {
    let contents = manifest.to_json_string()?;
    store
        .write(manifest.path(), &contents)
        .map_err(|source| GitBumpError::ManifestWrite {
            path: manifest.path().to_path_buf(),
            source,
        })?;
    info!(path = %manifest.path().display(), "updated manifest version");
    Ok(())
}
