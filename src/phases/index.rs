//! Phase 1: Indexing
//!
//! Walks every base directory and records each directory and regular file
//! found underneath it as a root-relative entry.
//!
//! ## Process
//!
//! 1.  **Walk**: Each root is walked depth-first with entries in file name
//!     order. A directory is emitted only after everything inside it
//!     (post-order), so deeper directories always precede their parents in
//!     the per-root list.
//!
//! 2.  **Record**: Directories and regular files become [`DirectoryEntry`]
//!     and [`FileEntry`] values carrying the permission bits seen at
//!     discovery. Symbolic links and special files are skipped.
//!
//! 3.  **Concatenate**: Per-root results are returned as owned collections
//!     and appended in root order.
//!
//! Any listing or stat failure aborts the whole pass.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::path::{BaseDirectory, DirectoryEntry, FileEntry};

/// Everything discovered under one or more base directories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    pub directories: Vec<DirectoryEntry>,
    pub files: Vec<FileEntry>,
}

impl Index {
    /// Append another index, keeping order.
    pub fn extend(&mut self, other: Index) {
        self.directories.extend(other.directories);
        self.files.extend(other.files);
    }
}

/// Index every base directory, concatenating the results in order.
pub fn execute(base_dirs: &[BaseDirectory]) -> Result<Index> {
    let mut index = Index::default();
    for base in base_dirs {
        let found = index_base_directory(base)?;
        debug!(
            "Indexed {}: {} directories, {} files",
            base,
            found.directories.len(),
            found.files.len()
        );
        index.extend(found);
    }
    Ok(index)
}

/// Recursively index a single base directory.
pub fn index_base_directory(base: &BaseDirectory) -> Result<Index> {
    let root = base.root_path();
    check_root(root)?;

    let mut index = Index::default();
    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .contents_first(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| Error::Index {
            path: e.path().unwrap_or(root).to_path_buf(),
            source: e.into(),
        })?;
        let file_type = entry.file_type();

        if file_type.is_symlink() {
            debug!("Skipping symbolic link {}", entry.path().display());
            continue;
        }
        if !file_type.is_dir() && !file_type.is_file() {
            debug!("Skipping special file {}", entry.path().display());
            continue;
        }

        let metadata = entry.metadata().map_err(|e| Error::Metadata {
            path: entry.path().to_path_buf(),
            source: e.into(),
        })?;
        let relative = base.relative_path_of(entry.path())?;
        let mode = mode_of(&metadata);

        if file_type.is_dir() {
            index.directories.push(DirectoryEntry {
                base: base.clone(),
                relative,
                mode,
            });
        } else {
            index.files.push(FileEntry {
                base: base.clone(),
                relative,
                mode,
            });
        }
    }

    Ok(index)
}

fn check_root(root: &Path) -> Result<()> {
    let metadata = fs::metadata(root).map_err(|e| Error::Index {
        path: root.to_path_buf(),
        source: e,
    })?;
    if !metadata.is_dir() {
        return Err(Error::Index {
            path: root.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        });
    }
    Ok(())
}

/// Permission bits of an entry
#[cfg(unix)]
pub(crate) fn mode_of(metadata: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o7777
}

/// Permission bits of an entry
#[cfg(not(unix))]
pub(crate) fn mode_of(metadata: &fs::Metadata) -> u32 {
    match (metadata.is_dir(), metadata.permissions().readonly()) {
        (true, _) => 0o755,
        (false, true) => 0o444,
        (false, false) => 0o644,
    }
}
