//! # Settings Module
//!
//! ## Purpose
//! Parser configuration for turning reaction equations into a stoichiometric matrix.
//! The configuration is a small JSON file (rxn_config.json by default); when the file
//! is absent the defaults are used.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "separator": "=",
//!   "strip_dup_marker": true,
//!   "log_level": "info"
//! }
//! ```
//!
//! ## Usage
//! ```rust, ignore
//! use RxnMatrix::settings::ParserConfig;
//!
//! let config = ParserConfig::load("rxn_config.json")?;
//! config.save("rxn_config_copy.json")?;
//! ```

use crate::Kinetics::rxn_errors::RxnError;
use log::{LevelFilter, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "rxn_config.json";

/// Settings of the equation parser.
///
/// # Fields
/// * `separator` - string between the reactant and the product side, "=" by default
/// * `strip_dup_marker` - remove a trailing "_DUP"/"_dup" left by mechanism databases
/// * `log_level` - verbosity of the command line tool: off, error, warn, info, debug or trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub separator: String,
    pub strip_dup_marker: bool,
    pub log_level: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            separator: "=".to_string(),
            strip_dup_marker: true,
            log_level: "info".to_string(),
        }
    }
}

impl ParserConfig {
    /// Loads configuration from a JSON file. A missing file gives the default configuration,
    /// an unreadable or invalid one is an error.
    pub fn load<P: AsRef<Path>>(config_file: P) -> Result<Self, RxnError> {
        let path = config_file.as_ref();
        if !path.exists() {
            info!(
                "config file '{}' not found, using default settings",
                path.display()
            );
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| RxnError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ParserConfig = serde_json::from_str(&content)?;
        if config.separator.trim().is_empty() {
            warn!("empty separator in '{}', falling back to '='", path.display());
            return Ok(Self {
                separator: "=".to_string(),
                ..config
            });
        }
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_file: P) -> Result<(), RxnError> {
        let path = config_file.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| RxnError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// unknown level names mean Info
    pub fn level_filter(&self) -> LevelFilter {
        match self.log_level.trim().to_lowercase().as_str() {
            "off" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "warn" | "warning" => LevelFilter::Warn,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = ParserConfig::load("surely_not_existing_rxn_config.json").unwrap();
        assert_eq!(config, ParserConfig::default());
        assert_eq!(config.separator, "=");
        assert!(config.strip_dup_marker);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), r#"{ "separator": "->" }"#).unwrap();
        let config = ParserConfig::load(file.path()).unwrap();
        assert_eq!(config.separator, "->");
        assert!(config.strip_dup_marker);
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_save_and_load_back() {
        let file = NamedTempFile::new().unwrap();
        let config = ParserConfig {
            separator: "=>".to_string(),
            strip_dup_marker: false,
            log_level: "debug".to_string(),
        };
        config.save(file.path()).unwrap();
        let loaded = ParserConfig::load(file.path()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "{ separator = ").unwrap();
        let result = ParserConfig::load(file.path());
        assert!(matches!(result, Err(RxnError::Config(_))));
    }

    #[test]
    fn test_blank_separator_replaced() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), r#"{ "separator": " " }"#).unwrap();
        let config = ParserConfig::load(file.path()).unwrap();
        assert_eq!(config.separator, "=");
    }
}
