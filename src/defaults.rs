//! Default values for dirsync configuration.
//!
//! This module provides centralized default values used by the CLI,
//! ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// File name of the configuration loaded when no roots are given.
pub const CONFIG_FILE_NAME: &str = "configuration.json";

/// Returns the default configuration file path.
///
/// This is `configuration.json` in the current directory. It is only read
/// when neither `--config-file` nor `--directory` is given.
pub fn default_config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_is_relative_file_name() {
        let path = default_config_path();
        assert!(path.is_relative());
        assert_eq!(path, PathBuf::from("configuration.json"));
    }
}
