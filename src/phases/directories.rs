//! Phase 3: Directory Materialization
//!
//! Replicates the directory skeleton so that every directory found under any
//! base directory exists under all of them before files are propagated.
//!
//! Directories are bucketed by depth and processed shallowest first, so a
//! directory's parent has always been created (or found) in an earlier
//! bucket. Existing directories are left untouched; new ones get the mode
//! captured when the original was indexed.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::path::{BaseDirectory, DirectoryEntry, RelativeEntry};

/// Create every missing directory under every base directory.
///
/// Returns the directories created in creation order. With `dry_run` set
/// nothing is created and the returned list holds what would have been.
pub fn execute(
    base_dirs: &[BaseDirectory],
    directories: &[DirectoryEntry],
    dry_run: bool,
) -> Result<Vec<PathBuf>> {
    let mut created = Vec::new();
    let mut seen = HashSet::new();

    for (depth, bucket) in bucket_by_depth(directories) {
        debug!("Materializing {} directories at depth {}", bucket.len(), depth);
        for dir in bucket {
            for base in base_dirs.iter().filter(|b| *b != dir.base()) {
                let target = dir.path_under(base);
                if seen.contains(&target) {
                    continue;
                }
                if exists(&target)? {
                    continue;
                }
                if !dry_run {
                    create_directory(&target, dir.mode())?;
                }
                seen.insert(target.clone());
                created.push(target);
            }
        }
    }

    Ok(created)
}

/// Group directories by depth, shallowest first.
pub fn bucket_by_depth(directories: &[DirectoryEntry]) -> BTreeMap<usize, Vec<&DirectoryEntry>> {
    let mut buckets: BTreeMap<usize, Vec<&DirectoryEntry>> = BTreeMap::new();
    for dir in directories {
        buckets.entry(dir.depth()).or_default().push(dir);
    }
    buckets
}

fn exists(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(metadata) => {
            if !metadata.is_dir() {
                warn!(
                    "{} exists but is not a directory; leaving it in place",
                    path.display()
                );
            }
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::Metadata {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn create_directory(path: &Path, mode: u32) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    match builder.create(path) {
        Ok(()) => {
            debug!("Created directory {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(Error::CreateDirectory {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
