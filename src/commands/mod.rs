//! # CLI Command Implementations
//!
//! dirsync has a single command: one synchronization pass over the base
//! directories named on the command line or in the configuration file.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and calls into the
//!   `dirsync` library to perform the work.

pub mod sync;
