//! Orchestrator for a complete synchronization pass
//!
//! This module coordinates all phases to provide a clean API for one run
//! over a set of base directories.

use super::{compare, directories, index, propagate};
use crate::error::{Error, Result};
use crate::path::BaseDirectory;
use log::debug;
use std::path::PathBuf;

/// Options for a synchronization pass
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Report what would change without touching any tree
    pub dry_run: bool,
}

/// What a synchronization pass did (or would do, in dry-run mode)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub directories_indexed: usize,
    pub files_indexed: usize,
    pub directories_created: Vec<PathBuf>,
    pub copies: Vec<propagate::CopyRecord>,
}

impl SyncReport {
    pub fn bytes_copied(&self) -> u64 {
        self.copies.iter().map(|c| c.bytes).sum()
    }

    /// True when the trees were already mirrored
    pub fn is_noop(&self) -> bool {
        self.directories_created.is_empty() && self.copies.is_empty()
    }
}

/// Execute a complete synchronization pass
///
/// 1. Index every base directory
/// 2. Compare each indexed file against the other roots
/// 3. Create missing directories, shallowest first
/// 4. Copy newer or missing files into place
///
/// Indexing and comparison finish before anything is written, so an error in
/// either leaves every tree untouched.
pub fn execute_sync(base_dirs: &[BaseDirectory], options: SyncOptions) -> Result<SyncReport> {
    if base_dirs.is_empty() {
        return Err(Error::NoBaseDirectories);
    }

    let index = index::execute(base_dirs)?;
    debug!(
        "Indexed {} directories and {} files across {} base directories",
        index.directories.len(),
        index.files.len(),
        base_dirs.len()
    );

    let compared = compare::execute(base_dirs, &index.files)?;
    debug!(
        "{} of {} files need propagation",
        compared.iter().filter(|c| c.needs_propagation()).count(),
        compared.len()
    );

    let directories_created = directories::execute(base_dirs, &index.directories, options.dry_run)?;
    let copies = propagate::execute(&compared, options.dry_run)?;

    Ok(SyncReport {
        directories_indexed: index.directories.len(),
        files_indexed: index.files.len(),
        directories_created,
        copies,
    })
}
