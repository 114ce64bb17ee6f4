//! Phase 4: Propagation
//!
//! Copies each reference copy into every base directory the comparison
//! flagged. Destinations are removed and rewritten, and the new copy gets the
//! permission bits of the reference copy.
//!
//! The first failure aborts the phase. Copies already made are kept.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{Error, Result};
use crate::path::RelativeEntry;
use crate::phases::compare::ComparisonResult;

/// A single propagated (or, in dry-run mode, planned) copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRecord {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub bytes: u64,
}

/// Copy every compared file into each of its target base directories.
pub fn execute(results: &[ComparisonResult], dry_run: bool) -> Result<Vec<CopyRecord>> {
    let mut copies = Vec::new();

    for result in results.iter().filter(|r| r.needs_propagation()) {
        let source = result.file.absolute_path();
        for target in &result.targets {
            let destination = result.file.path_under(target);

            let bytes = if dry_run {
                info!(
                    "Would copy file {} to {}",
                    source.display(),
                    destination.display()
                );
                source_metadata(&source)?.len()
            } else {
                let bytes = copy_file(&source, &destination)?;
                info!(
                    "Copied file {} to {}",
                    source.display(),
                    destination.display()
                );
                bytes
            };

            copies.push(CopyRecord {
                source: source.clone(),
                destination,
                bytes,
            });
        }
    }

    Ok(copies)
}

/// Replace `to` with the current content and permissions of `from`.
///
/// Returns the number of bytes written.
pub fn copy_file(from: &Path, to: &Path) -> Result<u64> {
    let metadata = source_metadata(from)?;

    match fs::symlink_metadata(to) {
        Ok(_) => fs::remove_file(to).map_err(|e| Error::RemoveDestination {
            path: to.to_path_buf(),
            source: e,
        })?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(Error::Metadata {
                path: to.to_path_buf(),
                source: e,
            })
        }
    }

    let copy_err = |source| Error::Copy {
        src: from.to_path_buf(),
        dst: to.to_path_buf(),
        source,
    };

    let bytes = {
        let mut reader = fs::File::open(from).map_err(copy_err)?;
        let mut writer = fs::File::options()
            .write(true)
            .create_new(true)
            .open(to)
            .map_err(copy_err)?;
        io::copy(&mut reader, &mut writer).map_err(copy_err)?
    };
    fs::set_permissions(to, metadata.permissions()).map_err(copy_err)?;

    Ok(bytes)
}

fn source_metadata(path: &Path) -> Result<fs::Metadata> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => Err(Error::EntryKindMismatch {
            path: path.to_path_buf(),
        }),
        Ok(metadata) => Ok(metadata),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::MissingSource {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(Error::Metadata {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
