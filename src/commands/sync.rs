//! Sync command implementation
//!
//! Resolves the base directories from the configuration file and the
//! `--directory` flags, then runs one pass:
//! 1. Index every base directory
//! 2. Compare files across roots
//! 3. Create missing directories
//! 4. Copy newer or missing files

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use dirsync::config;
use dirsync::defaults::default_config_path;
use dirsync::output::{summary, OutputConfig};
use dirsync::phases::{execute_sync, SyncOptions};
use log::warn;

/// Arguments for a synchronization pass
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Add a directory to be synchronized with the others
    #[arg(short = 'd', long = "directory", value_name = "DIRECTORY")]
    pub directories: Vec<String>,

    /// Read directories from this file instead of configuration.json
    #[arg(short = 'c', long, value_name = "FILE", env = "DIRSYNC_CONFIG")]
    pub config_file: Option<PathBuf>,

    /// Show what would be done without making changes
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute a synchronization pass
pub fn execute(args: SyncArgs, output: &OutputConfig) -> Result<()> {
    let locations = config::resolve_locations(
        args.config_file.as_deref(),
        &args.directories,
        &default_config_path(),
    )?;
    let base_dirs = config::base_directories(&locations);

    let distinct: HashSet<_> = base_dirs.iter().collect();
    if distinct.len() < 2 {
        warn!("Only one distinct base directory given; nothing to synchronize with");
    }

    let options = SyncOptions {
        dry_run: args.dry_run,
    };
    let report = execute_sync(&base_dirs, options)?;

    if !args.quiet {
        println!("{}", summary(output, &report, args.dry_run));
    }

    Ok(())
}
