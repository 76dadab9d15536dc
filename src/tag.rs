//! Release commit and annotated tag creation

use crate::boundary::BoundaryWarning;
use crate::config::FilesConfig;
use crate::domain::{MessageTemplate, Tag};
use crate::error::{GitBumpError, Result};
use crate::git::CommandRunner;
use std::path::Path;
use tracing::{info, warn};

/// Stage, commit and tag a release using the default file layout.
///
/// See [compose_with].
pub fn compose<R: CommandRunner>(
    runner: &R,
    version: Option<&str>,
    message: Option<&str>,
) -> Result<()> {
    compose_with(runner, &FilesConfig::default(), version, message)
}

/// Stage the release files, commit them and create an annotated tag.
///
/// The version is validated before any command runs. Commands are issued in
/// a fixed order and stop at the first fatal failure:
/// 1. `git add <manifest>` - fatal
/// 2. `git add <changelog>` - tolerated
/// 3. `git add <companion>` for each companion - tolerated
/// 4. `git commit -m <message>` - fatal
/// 5. `git tag -a v<version> -m <message>` - fatal
///
/// # Arguments
/// * `runner` - Executes git commands
/// * `files` - Files to stage
/// * `version` - Release version, with or without a leading `v`
/// * `message` - Template where `%s` is replaced by the version; defaults to "Bump to v%s"
///
/// # Returns
/// * `Ok(())` - The release commit and tag were created
/// * `Err(InvalidInput)` - Missing or invalid version, nothing was run
/// * `Err(SubprocessFailure)` - A fatal step failed
pub fn compose_with<R: CommandRunner>(
    runner: &R,
    files: &FilesConfig,
    version: Option<&str>,
    message: Option<&str>,
) -> Result<()> {
    let tag = version
        .ok_or_else(|| GitBumpError::invalid_input("Invalid or missing semver version argument"))
        .and_then(Tag::for_version)?;

    let template = message.map(MessageTemplate::new).unwrap_or_default();
    let message = template.render(&tag.version);

    stage(runner, &files.manifest)?;

    stage_optional(runner, &files.changelog);
    for companion in &files.companions {
        stage_optional(runner, companion);
    }

    runner.run(&["commit", "-m", &message])?;
    runner.run(&["tag", "-a", &tag.name, "-m", &message])?;

    info!(tag = %tag.name, "created release tag");
    Ok(())
}

fn stage<R: CommandRunner>(runner: &R, path: &Path) -> Result<()> {
    let path = path.to_string_lossy();
    runner.run(&["add", &path])?;
    Ok(())
}

fn stage_optional<R: CommandRunner>(runner: &R, path: &Path) {
    if let Err(e) = stage(runner, path) {
        let warning = BoundaryWarning::OptionalStageFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        };
        warn!("{}", warning);
    }
}
