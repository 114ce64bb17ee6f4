//! # Error Handling
//!
//! This module defines the centralized error type for `dirsync`. It uses the
//! `thiserror` library to create an `Error` enum covering every failure mode
//! of a synchronization run.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. Filesystem variants always carry the path
//!   (or paths) involved so that the single fatal message printed by the CLI
//!   names both the failing operation and its target.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! A run never retries and never continues past an error: every variant is
//! fatal to the pass that produced it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for dirsync operations
#[derive(Error, Debug)]
pub enum Error {
    /// A directory could not be listed while indexing a base directory.
    #[error("Failed to index '{}': {source}", path.display())]
    Index {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A missing directory could not be created under another base directory.
    #[error("Failed to create directory '{}': {source}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file could not be read to compute its checksum.
    #[error("Failed to compute checksum of '{}': {source}", path.display())]
    Checksum {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Stat information could not be retrieved.
    #[error("Failed to read metadata of '{}': {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A path is a file in one base directory but a directory in another.
    #[error("Entry kind mismatch at '{}': expected a file, found a directory", path.display())]
    EntryKindMismatch { path: PathBuf },

    /// The reference copy disappeared before it could be propagated.
    #[error("Origin file '{}' does not exist", path.display())]
    MissingSource { path: PathBuf },

    /// A stale destination file could not be removed before copying.
    #[error("Failed to remove '{}': {source}", path.display())]
    RemoveDestination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Copying content from a reference copy to a destination failed.
    #[error("Failed to copy '{}' to '{}': {source}", src.display(), dst.display())]
    Copy {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A path could not be represented as a root-relative path.
    #[error("Path operation error: {message}")]
    Path { message: String },

    /// A configuration file could not be read.
    #[error("Failed to read configuration file '{}': {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration document could not be parsed.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// Neither the configuration nor the command line named a base directory.
    #[error("No base directories provided")]
    NoBaseDirectories,
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
