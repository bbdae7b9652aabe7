//! Filesystem access for states that browse directories.

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

/// Operating-system collaborator used by the directory browser.
pub trait Filesystem {
    /// Entry names of a directory, sorted.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>>;

    fn is_dir(&self, path: &Path) -> bool;

    fn current_dir(&self) -> io::Result<PathBuf>;

    fn join(&self, base: &Path, name: &str) -> PathBuf {
        base.join(name)
    }

    fn parent(&self, path: &Path) -> Option<PathBuf> {
        path.parent().map(Path::to_path_buf)
    }
}

impl<F: Filesystem + ?Sized> Filesystem for Box<F> {
    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        (**self).list_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        (**self).current_dir()
    }

    fn join(&self, base: &Path, name: &str) -> PathBuf {
        (**self).join(base, name)
    }

    fn parent(&self, path: &Path) -> Option<PathBuf> {
        (**self).parent(path)
    }
}

/// The real filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = std::fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect::<io::Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// In-memory tree, handy for driving the browser without touching disk.
///
/// # Example
///
/// ```rust
/// use assist::core::{Filesystem, MemoryFilesystem};
/// use std::path::Path;
///
/// let fs = MemoryFilesystem::new("/")
///     .with_dir("/src")
///     .with_file("/src/main.rs");
///
/// assert_eq!(fs.list_dir(Path::new("/src")).unwrap(), vec!["main.rs"]);
/// assert!(fs.is_dir(Path::new("/src")));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryFilesystem {
    cwd: PathBuf,
    dirs: BTreeSet<PathBuf>,
    files: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        let cwd = cwd.into();
        let mut dirs = BTreeSet::new();
        for ancestor in cwd.ancestors() {
            dirs.insert(ancestor.to_path_buf());
        }
        Self {
            cwd,
            dirs,
            files: BTreeSet::new(),
        }
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        for ancestor in path.ancestors() {
            self.dirs.insert(ancestor.to_path_buf());
        }
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self = self.with_dir(parent.to_path_buf());
        }
        self.files.insert(path);
        self
    }
}

impl Filesystem for MemoryFilesystem {
    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        if !self.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", path.display()),
            ));
        }
        let mut names: Vec<String> = self
            .dirs
            .iter()
            .chain(self.files.iter())
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        names.sort();
        Ok(names)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.cwd.clone())
    }
}
