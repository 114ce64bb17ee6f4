//! Implementation of the 4 phases of a dirsync pass.
//!
//! ## Overview
//!
//! A pass follows 4 phases:
//! 1. Indexing - Walk every base directory into root-relative entries
//! 2. Comparison - Decide which roots hold missing or stale copies of each file
//! 3. Directory Materialization - Replicate the directory skeleton, shallowest first
//! 4. Propagation - Copy reference copies into the flagged roots
//!
//! Phases 1 and 2 only read. Phase 3 must complete before phase 4 so every
//! destination has a parent directory.

// Phase modules
pub mod compare;
pub mod directories;
pub mod index;
pub mod orchestrator;
pub mod propagate;

pub use compare::{Checksum, ComparisonResult};
pub use index::Index;
pub use orchestrator::{execute_sync, SyncOptions, SyncReport};
pub use propagate::CopyRecord;
