//! # dirsync Library
//!
//! This library keeps several locally mounted directory trees mirrored. It is
//! designed to be used by the `dirsync` command-line tool but can also be
//! embedded in other applications.
//!
//! ## Quick Example
//!
//! ```no_run
//! use dirsync::config;
//! use dirsync::phases::{execute_sync, SyncOptions};
//!
//! let roots = config::base_directories(&[
//!     "/home/me/Documents".to_string(),
//!     "/mnt/backup/Documents/".to_string(),
//! ]);
//! let report = execute_sync(&roots, SyncOptions::default())?;
//! println!("{} files copied", report.copies.len());
//! # Ok::<(), dirsync::error::Error>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Base directories (`path`)**: The roots being mirrored. Every file or
//!   directory is identified by the root it was found under plus its path
//!   relative to that root, so the same relative path names the matching
//!   entry under every other root.
//! - **Configuration (`config`)**: Loads the list of roots from a JSON
//!   document and merges it with roots given on the command line.
//! - **Phases (`phases`)**: The pipeline that indexes, compares, creates
//!   directories and copies files.
//!
//! ## Execution Flow
//!
//! 1.  **Indexing**: Walk every root.
//! 2.  **Comparison**: For every file, checksum it and compare it with the
//!     copy at the same relative path under each other root. Missing copies
//!     and copies that differ and are older are flagged.
//! 3.  **Directory Materialization**: Create missing directories,
//!     shallowest first.
//! 4.  **Propagation**: Copy each flagged file into place.
//!
//! A pass is single-threaded and stops at the first error.

pub mod config;
pub mod defaults;
pub mod error;
pub mod output;
pub mod path;
pub mod phases;

#[cfg(test)]
mod path_proptest;
