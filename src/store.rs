//! Manifest file access
//!
//! The resolver and updater never touch the filesystem directly; they go
//! through a [ManifestStore] so tests can script missing, unreadable and
//! unwritable files.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Reads and writes manifest files by project-relative path
pub trait ManifestStore: Send + Sync {
    /// Read a whole file as UTF-8.
    ///
    /// A missing file must be reported with [io::ErrorKind::NotFound].
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Replace a file's contents
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

impl<S: ManifestStore + ?Sized> ManifestStore for &S {
    fn read(&self, path: &Path) -> io::Result<String> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        (**self).write(path, contents)
    }
}

/// Store backed by a directory on disk
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Resolve relative paths against `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsStore { root: root.into() }
    }

    /// Directory paths are resolved against
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ManifestStore for FsStore {
    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(self.root.join(path))
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(self.root.join(path), contents)
    }
}

/// In-memory store for tests
///
/// Files can be seeded with contents or with a read/write failure of a given
/// kind. Every read and write is recorded.
#[derive(Default)]
pub struct MockStore {
    files: Mutex<HashMap<PathBuf, String>>,
    read_failures: Mutex<HashMap<PathBuf, io::ErrorKind>>,
    write_failures: Mutex<HashMap<PathBuf, io::ErrorKind>>,
    reads: Mutex<Vec<PathBuf>>,
    writes: Mutex<Vec<(PathBuf, String)>>,
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockStore {
    /// Create an empty store; every read fails with `NotFound`
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        lock(&self.files).insert(path.into(), contents.into());
        self
    }

    /// Make reads of `path` fail with `kind`
    pub fn with_read_error(self, path: impl Into<PathBuf>, kind: io::ErrorKind) -> Self {
        lock(&self.read_failures).insert(path.into(), kind);
        self
    }

    /// Make writes of `path` fail with `kind`
    pub fn with_write_error(self, path: impl Into<PathBuf>, kind: io::ErrorKind) -> Self {
        lock(&self.write_failures).insert(path.into(), kind);
        self
    }

    /// Paths read so far, in order
    pub fn reads(&self) -> Vec<PathBuf> {
        lock(&self.reads).clone()
    }

    /// Successful writes so far, in order
    pub fn writes(&self) -> Vec<(PathBuf, String)> {
        lock(&self.writes).clone()
    }

    /// Current contents of a file
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        lock(&self.files).get(path.as_ref()).cloned()
    }
}

impl ManifestStore for MockStore {
    fn read(&self, path: &Path) -> io::Result<String> {
        lock(&self.reads).push(path.to_path_buf());

        if let Some(kind) = lock(&self.read_failures).get(path) {
            return Err(io::Error::new(
                *kind,
                format!("cannot read {}", path.display()),
            ));
        }

        lock(&self.files).get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("No such file or directory: {}", path.display()),
            )
        })
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        if let Some(kind) = lock(&self.write_failures).get(path) {
            return Err(io::Error::new(
                *kind,
                format!("cannot write {}", path.display()),
            ));
        }

        lock(&self.files).insert(path.to_path_buf(), contents.to_string());
        lock(&self.writes).push((path.to_path_buf(), contents.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fs_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = FsStore::new(dir.path());

        store.write(Path::new("package.json"), "{}\n").unwrap();
        assert_eq!(store.read(Path::new("package.json")).unwrap(), "{}\n");
    }

    #[test]
    fn test_fs_store_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = FsStore::new(dir.path());

        let err = store.read(Path::new("package-lock.json")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_mock_store_records_reads_and_writes() {
        let store = MockStore::new().with_file("package.json", "{}");

        store.read(Path::new("package.json")).unwrap();
        assert!(store.read(Path::new("missing.json")).is_err());
        store.write(Path::new("package.json"), "{}\n").unwrap();

        assert_eq!(
            store.reads(),
            vec![PathBuf::from("package.json"), PathBuf::from("missing.json")]
        );
        assert_eq!(store.writes().len(), 1);
        assert_eq!(store.contents("package.json").as_deref(), Some("{}\n"));
    }

    #[test]
    fn test_mock_store_scripted_failures() {
        let store = MockStore::new()
            .with_file("a.json", "{}")
            .with_read_error("a.json", io::ErrorKind::PermissionDenied)
            .with_write_error("b.json", io::ErrorKind::PermissionDenied);

        assert_eq!(
            store.read(Path::new("a.json")).unwrap_err().kind(),
            io::ErrorKind::PermissionDenied
        );
        assert!(store.write(Path::new("b.json"), "{}").is_err());
        assert!(store.writes().is_empty());
    }
}
