//! Where pattern file text comes from.

use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::domain::{PatternError, presets};

/// Read-only store of pattern files
pub trait PatternSource {
    /// Raw text of the file at `path`
    fn read(&self, path: &Path) -> Result<String, PatternError>;

    /// Identity of `path` used to detect a composite reaching itself
    fn key(&self, path: &Path) -> PathBuf {
        normalize(path)
    }
}

/// Lexically clean a path: drop `.` and fold `..` into its parent
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir if matches!(out.components().next_back(), Some(Component::Normal(_))) => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Pattern files on disk, relative paths resolved against `root`
#[derive(Clone, Debug)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PatternSource for FileSource {
    fn read(&self, path: &Path) -> Result<String, PatternError> {
        let full = self.root.join(path);
        std::fs::read_to_string(&full).map_err(|source| PatternError::Io { path: full, source })
    }
}

/// Named in-memory pattern texts
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    files: HashMap<PathBuf, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source holding every built-in preset under its file name
    pub fn with_presets() -> Self {
        presets::all_patterns()
            .into_iter()
            .fold(Self::new(), |s, p| s.with(p.file_name, p.source))
    }

    /// Add a file (builder pattern)
    pub fn with(mut self, path: impl AsRef<Path>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    pub fn insert(&mut self, path: impl AsRef<Path>, text: impl Into<String>) {
        self.files.insert(normalize(path.as_ref()), text.into());
    }
}

impl PatternSource for MemorySource {
    fn read(&self, path: &Path) -> Result<String, PatternError> {
        self.files.get(&normalize(path)).cloned().ok_or_else(|| PatternError::Io {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such pattern"),
        })
    }
}

/// Files first, then the built-in presets for names not found on disk
#[derive(Clone, Debug)]
pub struct LayeredSource {
    files: FileSource,
    builtin: MemorySource,
}

impl LayeredSource {
    pub fn new(files: FileSource) -> Self {
        Self { files, builtin: MemorySource::with_presets() }
    }
}

impl PatternSource for LayeredSource {
    fn read(&self, path: &Path) -> Result<String, PatternError> {
        match self.files.read(path) {
            Err(PatternError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                self.builtin.read(path).map_err(|_| PatternError::Io {
                    path: self.files.root().join(path),
                    source,
                })
            }
            other => other,
        }
    }
}
