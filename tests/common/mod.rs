//! Shared test utilities for integration and E2E tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = SyncFixture::new(2).with_file(0, "notes.txt", "hello");
//!     fixture.command().assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::{at, set_mtime, SyncFixture};
}

/// A point in time `secs` seconds after the epoch.
#[allow(dead_code)]
pub fn at(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
}

/// Set the modification time of an existing file.
#[allow(dead_code)]
pub fn set_mtime(path: &Path, mtime: SystemTime) {
    std::fs::File::options()
        .write(true)
        .open(path)
        .expect("Failed to open file")
        .set_modified(mtime)
        .expect("Failed to set modification time");
}

/// A set of temporary base directories plus a separate working directory.
///
/// The working directory is kept apart from the roots so that a
/// `configuration.json` written there is never itself synchronized.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = SyncFixture::new(2)
///     .with_file(0, "docs/readme.txt", "v1");
///
/// fixture.command().assert().success();
/// fixture.root(1).child("docs/readme.txt").assert("v1");
/// ```
pub struct SyncFixture {
    roots: Vec<assert_fs::TempDir>,
    work_dir: assert_fs::TempDir,
}

impl SyncFixture {
    /// Create `count` empty base directories.
    pub fn new(count: usize) -> Self {
        Self {
            roots: (0..count)
                .map(|_| assert_fs::TempDir::new().expect("Failed to create temp directory"))
                .collect(),
            work_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a file under base directory `index`, creating parent directories.
    pub fn with_file(self, index: usize, path: &str, content: &str) -> Self {
        self.roots[index]
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Add a file with an explicit modification time.
    #[allow(dead_code)]
    pub fn with_file_at(self, index: usize, path: &str, content: &str, mtime: SystemTime) -> Self {
        let fixture = self.with_file(index, path, content);
        set_mtime(&fixture.roots[index].path().join(path), mtime);
        fixture
    }

    /// Add an empty directory under base directory `index`.
    #[allow(dead_code)]
    pub fn with_dir(self, index: usize, path: &str) -> Self {
        self.roots[index]
            .child(path)
            .create_dir_all()
            .expect("Failed to create directory");
        self
    }

    /// Base directory `index`
    #[allow(dead_code)]
    pub fn root(&self, index: usize) -> &assert_fs::TempDir {
        &self.roots[index]
    }

    /// Root path strings in order
    pub fn locations(&self) -> Vec<String> {
        self.roots
            .iter()
            .map(|r| r.path().to_str().expect("temp path is UTF-8").to_string())
            .collect()
    }

    /// The working directory commands run in
    #[allow(dead_code)]
    pub fn work_dir(&self) -> &assert_fs::TempDir {
        &self.work_dir
    }

    /// Path of a file under base directory `index`
    #[allow(dead_code)]
    pub fn path(&self, index: usize, path: &str) -> PathBuf {
        self.roots[index].path().join(path)
    }

    /// A `dirsync` command running in the working directory, with no roots.
    #[allow(dead_code)]
    pub fn bare_command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dirsync");
        cmd.current_dir(self.work_dir.path())
            .env_remove("DIRSYNC_CONFIG")
            .env_remove("RUST_LOG")
            .arg("--color")
            .arg("never");
        cmd
    }

    /// A `dirsync` command with a `--directory` flag for every root.
    #[allow(dead_code)]
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = self.bare_command();
        for location in self.locations() {
            cmd.arg("--directory").arg(location);
        }
        cmd
    }
}
