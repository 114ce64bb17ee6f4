//! # Configuration
//!
//! dirsync reads the list of base directories from a small JSON document:
//!
//! ```json
//! {
//!     "Locations": [
//!         "/home/me/Documents",
//!         "/mnt/backup/Documents"
//!     ]
//! }
//! ```
//!
//! Locations may also be given on the command line; [`resolve_locations`]
//! combines both sources into the ordered list the engine consumes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::BaseDirectory;

/// The parsed configuration document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Root paths of the trees to keep mirrored, in order
    #[serde(rename = "Locations", alias = "locations")]
    pub locations: Vec<String>,
}

/// Parse a configuration document from a JSON string
pub fn parse(json_content: &str) -> Result<Configuration> {
    serde_json::from_str(json_content).map_err(|e| Error::ConfigParse {
        message: e.to_string(),
        hint: match e.classify() {
            serde_json::error::Category::Data => Some(
                "expected an object with a \"Locations\" array of path strings".to_string(),
            ),
            _ => None,
        },
    })
}

/// Load and parse a configuration file
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Configuration> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| Error::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content).map_err(|e| match e {
        Error::ConfigParse { message, hint } => Error::ConfigParse {
            message: format!("{}: {}", path.display(), message),
            hint,
        },
        other => other,
    })
}

/// Turn location strings into canonical base directories, preserving order.
pub fn base_directories(locations: &[String]) -> Vec<BaseDirectory> {
    locations.iter().cloned().map(BaseDirectory::new).collect()
}

/// Combine configuration sources into the ordered list of locations.
///
/// Locations from `config_file` come first, followed by `directories`.
/// When neither is given, `default_config` is loaded if it exists. An empty
/// result is an error.
pub fn resolve_locations(
    config_file: Option<&Path>,
    directories: &[String],
    default_config: &Path,
) -> Result<Vec<String>> {
    let mut locations = Vec::new();

    if let Some(path) = config_file {
        locations.extend(from_file(path)?.locations);
    } else if directories.is_empty() && default_config.is_file() {
        log::debug!("Loading default configuration {}", default_config.display());
        locations.extend(from_file(default_config)?.locations);
    }
    locations.extend(directories.iter().cloned());

    if locations.is_empty() {
        return Err(Error::NoBaseDirectories);
    }
    Ok(locations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_locations() {
        let config = parse(r#"{"Locations": ["/srv/a/", "/srv/b"]}"#).unwrap();
        assert_eq!(config.locations, vec!["/srv/a/", "/srv/b"]);
    }

    #[test]
    fn test_parse_lowercase_alias() {
        let config = parse(r#"{"locations": ["/srv/a"]}"#).unwrap();
        assert_eq!(config.locations, vec!["/srv/a"]);
    }

    #[test]
    fn test_parse_wrong_shape_has_hint() {
        let err = parse(r#"{"Locations": "/srv/a"}"#).unwrap_err();
        match err {
            Error::ConfigParse { hint, .. } => assert!(hint.is_some()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse("{ not json").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { hint: None, .. }));
    }

    #[test]
    fn test_base_directories_canonicalizes_in_order() {
        let dirs = base_directories(&["/b/".to_string(), "/a".to_string()]);
        assert_eq!(dirs[0].root(), "/b");
        assert_eq!(dirs[1].root(), "/a");
    }

    #[test]
    fn test_resolve_config_file_then_flags() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("sync.json");
        fs::write(&config, r#"{"Locations": ["/from/config"]}"#).unwrap();

        let locations = resolve_locations(
            Some(&config),
            &["/from/flag".to_string()],
            &temp.path().join("configuration.json"),
        )
        .unwrap();
        assert_eq!(locations, vec!["/from/config", "/from/flag"]);
    }

    #[test]
    fn test_resolve_uses_default_config_when_nothing_given() {
        let temp = TempDir::new().unwrap();
        let default = temp.path().join("configuration.json");
        fs::write(&default, r#"{"Locations": ["/x", "/y"]}"#).unwrap();

        let locations = resolve_locations(None, &[], &default).unwrap();
        assert_eq!(locations, vec!["/x", "/y"]);
    }

    #[test]
    fn test_resolve_ignores_default_config_when_flags_given() {
        let temp = TempDir::new().unwrap();
        let default = temp.path().join("configuration.json");
        fs::write(&default, r#"{"Locations": ["/x"]}"#).unwrap();

        let locations = resolve_locations(None, &["/flag".to_string()], &default).unwrap();
        assert_eq!(locations, vec!["/flag"]);
    }

    #[test]
    fn test_resolve_nothing_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err =
            resolve_locations(None, &[], &temp.path().join("configuration.json")).unwrap_err();
        assert!(matches!(err, Error::NoBaseDirectories));
    }

    #[test]
    fn test_resolve_missing_config_file_names_the_file() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing_sync.json");
        let err = resolve_locations(
            Some(&missing),
            &[],
            &temp.path().join("configuration.json"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("missing_sync.json"));
        match err {
            Error::ReadConfig { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_file_parse_error_names_the_file() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("broken_sync.json");
        fs::write(&config, "{ \"Locations\": [unclosed").unwrap();

        let err = from_file(&config).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        let display = err.to_string();
        assert!(display.contains("Configuration parsing error"));
        assert!(display.contains("broken_sync.json"));
    }
}
