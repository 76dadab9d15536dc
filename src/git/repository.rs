use crate::error::Result;
use git2::Repository;
use std::path::{Path, PathBuf};

/// Find the work-tree root of the repository containing `start`.
///
/// Manifest paths and git commands are resolved relative to this directory,
/// so the tool behaves the same from any subdirectory of a project.
///
/// # Returns
/// * `Ok(Some(PathBuf))` - Root of the enclosing non-bare repository
/// * `Ok(None)` - `start` is not inside a repository, or the repository is bare
/// * `Err` - Repository discovery failed for another reason
pub fn discover_workdir<P: AsRef<Path>>(start: P) -> Result<Option<PathBuf>> {
    match Repository::discover(start) {
        Ok(repo) => Ok(repo.workdir().map(Path::to_path_buf)),
        Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
