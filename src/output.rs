//! # Output Configuration
//!
//! Controls how the end-of-run summary looks: with colors enabled it is
//! prefixed by an emoji, otherwise by a plain bracketed marker.
//!
//! The `--color` flag wins over the environment. In `auto` mode colors are
//! disabled by `NO_COLOR`, `CLICOLOR=0` or `TERM=dumb`, forced on by
//! `CLICOLOR_FORCE=1`, and otherwise follow whether stdout is a terminal.

use std::env;

use crate::phases::SyncReport;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from the `--color` flag
    /// (`always`, `never` or `auto`) and the environment.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Returns the emoji when colors are enabled, `plain` otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

/// One-line summary of a finished pass.
pub fn summary(config: &OutputConfig, report: &SyncReport, dry_run: bool) -> String {
    if report.is_noop() {
        return format!(
            "{} Already in sync ({} files, {} directories)",
            emoji(config, "✅", "[OK]"),
            report.files_indexed,
            report.directories_indexed
        );
    }

    let verb = if dry_run { "Would copy" } else { "Copied" };
    let created = if dry_run { "would create" } else { "created" };
    format!(
        "{} {} {} files ({} bytes), {} {} directories",
        emoji(config, if dry_run { "🔎" } else { "✅" }, if dry_run { "[PLAN]" } else { "[OK]" }),
        verb,
        report.copies.len(),
        report.bytes_copied(),
        created,
        report.directories_created.len()
    )
}
