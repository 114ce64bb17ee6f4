//! Path model for dirsync
//!
//! A [`BaseDirectory`] is one of the roots being kept mirrored. Everything
//! found underneath it is recorded as a [`RelativePath`] (always starting
//! with `/`) so the same string can be appended to any other root to find
//! the corresponding entry there.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Separator used inside relative paths, regardless of platform.
pub const SEPARATOR: char = '/';

/// One of the independent roots being kept mirrored.
///
/// Two base directories are the same root exactly when their canonical
/// root strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseDirectory {
    root: String,
}

impl BaseDirectory {
    /// Create a base directory, stripping trailing `/` and `\` separators.
    ///
    /// A root made only of separators keeps its first character so that
    /// `/` still denotes the filesystem root.
    pub fn new(location: impl Into<String>) -> Self {
        let location = location.into();
        let trimmed = location.trim_end_matches(['/', '\\']);
        let root = if trimmed.is_empty() && !location.is_empty() {
            location[..1].to_string()
        } else {
            trimmed.to_string()
        };
        Self { root }
    }

    /// The canonical root string
    pub fn root(&self) -> &str {
        &self.root
    }

    /// The root as a filesystem path
    pub fn root_path(&self) -> &Path {
        Path::new(&self.root)
    }

    /// Compose the path of `relative` underneath this root.
    pub fn join(&self, relative: &RelativePath) -> PathBuf {
        PathBuf::from(format!("{}{}", self.root, relative.as_str()))
    }

    /// Strip this root from `path`, producing the path relative to it.
    pub fn relative_path_of(&self, path: &Path) -> Result<RelativePath> {
        let stripped = path.strip_prefix(self.root_path()).map_err(|_| Error::Path {
            message: format!(
                "'{}' is not inside base directory '{}'",
                path.display(),
                self.root
            ),
        })?;
        RelativePath::from_components(stripped)
    }
}

impl fmt::Display for BaseDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root)
    }
}

/// A path relative to a base directory, e.g. `/docs/readme.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(String);

impl RelativePath {
    /// Build a relative path from the normal components of `path`.
    ///
    /// Fails if `path` is empty, climbs out of its root, or has a component
    /// that is not valid UTF-8.
    pub fn from_components(path: &Path) -> Result<Self> {
        let mut relative = String::new();
        for component in path.components() {
            match component {
                Component::Normal(name) => {
                    let name = name.to_str().ok_or_else(|| Error::Path {
                        message: format!("'{}' is not valid UTF-8", path.display()),
                    })?;
                    relative.push(SEPARATOR);
                    relative.push_str(name);
                }
                Component::CurDir => {}
                _ => {
                    return Err(Error::Path {
                        message: format!("'{}' is not a relative path", path.display()),
                    })
                }
            }
        }
        if relative.is_empty() {
            return Err(Error::Path {
                message: "empty relative path".to_string(),
            });
        }
        Ok(Self(relative))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of separators; `/a` has depth 1, `/a/b` depth 2.
    pub fn depth(&self) -> usize {
        self.0.matches(SEPARATOR).count()
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shared shape of indexed files and directories.
///
/// Entries with the same relative path under different base directories
/// are the same logical entry.
pub trait RelativeEntry {
    /// The base directory the entry was discovered under
    fn base(&self) -> &BaseDirectory;

    /// The entry's path relative to its base directory
    fn relative(&self) -> &RelativePath;

    /// Permission bits captured at discovery
    fn mode(&self) -> u32;

    /// Absolute path of the discovered entry
    fn absolute_path(&self) -> PathBuf {
        self.base().join(self.relative())
    }

    /// Path of the same logical entry under another base directory
    fn path_under(&self, other: &BaseDirectory) -> PathBuf {
        other.join(self.relative())
    }
}

/// A regular file found while indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub base: BaseDirectory,
    pub relative: RelativePath,
    pub mode: u32,
}

/// A directory found while indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub base: BaseDirectory,
    pub relative: RelativePath,
    pub mode: u32,
}

impl RelativeEntry for FileEntry {
    fn base(&self) -> &BaseDirectory {
        &self.base
    }

    fn relative(&self) -> &RelativePath {
        &self.relative
    }

    fn mode(&self) -> u32 {
        self.mode
    }
}

impl RelativeEntry for DirectoryEntry {
    fn base(&self) -> &BaseDirectory {
        &self.base
    }

    fn relative(&self) -> &RelativePath {
        &self.relative
    }

    fn mode(&self) -> u32 {
        self.mode
    }
}

impl DirectoryEntry {
    pub fn depth(&self) -> usize {
        self.relative.depth()
    }
}
