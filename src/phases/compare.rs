//! Phase 2: Comparison
//!
//! Decides, for every indexed file, which other base directories hold a
//! missing or stale copy of it.
//!
//! Each indexed file is the *reference copy* for its own comparison. Against
//! every other base directory:
//!
//! - no file at the same relative path: the copy is missing, propagate;
//! - same checksum: identical content, nothing to do (timestamps ignored);
//! - different checksum: propagate only if the reference copy's
//!   modification time is strictly later.
//!
//! The rule is evaluated pairwise for each (reference, other) combination.
//! No global "newest wins" is computed across all roots at once.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

use log::trace;

use crate::error::{Error, Result};
use crate::path::{BaseDirectory, FileEntry, RelativeEntry};

/// Content digest of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checksum(blake3::Hash);

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

/// The outcome of comparing one reference copy against every other root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonResult {
    /// The file as discovered while indexing
    pub file: FileEntry,
    /// Checksum of the reference copy at comparison time
    pub checksum: Checksum,
    /// Base directories that must receive the reference copy, in root order
    pub targets: Vec<BaseDirectory>,
}

impl ComparisonResult {
    pub fn needs_propagation(&self) -> bool {
        !self.targets.is_empty()
    }
}

/// Compare every indexed file against all other base directories.
pub fn execute(base_dirs: &[BaseDirectory], files: &[FileEntry]) -> Result<Vec<ComparisonResult>> {
    files
        .iter()
        .map(|file| compare_file(base_dirs, file))
        .collect()
}

/// Compare a single reference copy against all other base directories.
pub fn compare_file(base_dirs: &[BaseDirectory], file: &FileEntry) -> Result<ComparisonResult> {
    let reference_path = file.absolute_path();
    let checksum = checksum_file(&reference_path)?;
    let reference_mtime = modified_time(&reference_path, None)?;

    let mut targets = Vec::new();
    for base in base_dirs.iter().filter(|b| *b != file.base()) {
        let other_path = file.path_under(base);

        let metadata = match fs::metadata(&other_path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                trace!("{} is missing, propagating", other_path.display());
                targets.push(base.clone());
                continue;
            }
            Err(e) => {
                return Err(Error::Metadata {
                    path: other_path,
                    source: e,
                })
            }
        };
        if metadata.is_dir() {
            return Err(Error::EntryKindMismatch { path: other_path });
        }

        if checksum_file(&other_path)? == checksum {
            trace!("{} is identical", other_path.display());
            continue;
        }

        let other_mtime = modified_time(&other_path, Some(&metadata))?;
        if reference_mtime > other_mtime {
            trace!(
                "{} is newer than {}, propagating",
                reference_path.display(),
                other_path.display()
            );
            targets.push(base.clone());
        }
    }

    Ok(ComparisonResult {
        file: file.clone(),
        checksum,
        targets,
    })
}

/// Stream a file through BLAKE3.
pub fn checksum_file(path: &Path) -> Result<Checksum> {
    let map_err = |source| Error::Checksum {
        path: path.to_path_buf(),
        source,
    };
    let mut file = fs::File::open(path).map_err(map_err)?;
    let mut hasher = blake3::Hasher::new();
    io::copy(&mut file, &mut hasher).map_err(map_err)?;
    Ok(Checksum(hasher.finalize()))
}

fn modified_time(path: &Path, metadata: Option<&fs::Metadata>) -> Result<SystemTime> {
    let map_err = |source| Error::Metadata {
        path: path.to_path_buf(),
        source,
    };
    match metadata {
        Some(metadata) => metadata.modified().map_err(map_err),
        None => fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(map_err),
    }
}
