//! Release workflow orchestration
//!
//! Chains the three release steps (resolve, update manifests, commit and
//! tag) so the binary and embedding programs share one implementation. The
//! workflow takes its collaborators as arguments and never prompts; any
//! confirmation happens in the caller between [plan_release] and
//! [run_release].

use crate::boundary::BoundaryWarning;
use crate::bump::{self, BumpResult};
use crate::config::Config;
use crate::error::Result;
use crate::git::CommandRunner;
use crate::store::ManifestStore;
use crate::tag;

/// Arguments for the release workflow
///
/// Mirrors the CLI arguments in a form that does not depend on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReleaseArgs {
    /// Release type keyword (e.g., "minor")
    pub release_type: Option<String>,

    /// Pre-release channel (e.g., "beta")
    pub preid: Option<String>,

    /// Commit/tag message template; falls back to the configured one
    pub message: Option<String>,

    /// Only resolve the next version, change nothing
    pub dry_run: bool,
}

/// Result of a release workflow run
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutcome {
    /// Versions before and after the release
    pub versions: BumpResult,

    /// The tag that was created, `None` on a dry run
    pub tag: Option<String>,

    /// Non-fatal issues met along the way
    pub warnings: Vec<BoundaryWarning>,
}

/// Resolve what a release would produce, without side effects.
pub fn plan_release<S: ManifestStore>(
    args: &ReleaseArgs,
    config: &Config,
    store: &S,
) -> Result<BumpResult> {
    bump::resolve(
        store,
        &config.files,
        args.release_type.as_deref(),
        args.preid.as_deref(),
    )
}

/// Run the full release: bump every manifest, then commit and tag.
///
/// # Arguments
///
/// * `args` - Release arguments
/// * `config` - File layout and message defaults
/// * `store` - Manifest file access
/// * `runner` - Git command execution
///
/// # Returns
///
/// The resolved versions, the created tag and any boundary warnings
pub fn run_release<S: ManifestStore, R: CommandRunner>(
    args: &ReleaseArgs,
    config: &Config,
    store: &S,
    runner: &R,
) -> Result<ReleaseOutcome> {
    if args.dry_run {
        let versions = plan_release(args, config, store)?;
        return Ok(ReleaseOutcome {
            versions,
            tag: None,
            warnings: Vec::new(),
        });
    }

    let report = bump::bump(
        store,
        &config.files,
        args.release_type.as_deref(),
        args.preid.as_deref(),
    )?;

    let message = args.message.as_deref().unwrap_or(&config.tag.message);
    tag::compose_with(
        runner,
        &config.files,
        Some(report.result.next.as_str()),
        Some(message),
    )?;

    Ok(ReleaseOutcome {
        tag: Some(format!("v{}", report.result.next)),
        versions: report.result,
        warnings: report.warnings,
    })
}
