//! Configuration file support for runbar.
//!
//! Configuration is loaded from `~/.config/runbar/config.toml` with the
//! following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! The `[[kernels]]` and `[[clusters]]` tables populate the toolbar
//! dropdowns; their order in the file is the order the dropdowns show.
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/runbar/config.toml
//! script = "train.py"
//! default_command = "python %file"
//!
//! [[kernels]]
//! id = "python3"
//! label = "Python 3"
//!
//! [[kernels]]
//! id = "julia-1.10"
//!
//! [[clusters]]
//! id = "1"
//! label = "GPU Cluster"
//!
//! [[clusters]]
//! id = "2"
//! label = "CPU Cluster"
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::spec::{OptionEntry, OptionSet};

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Script the run commands refer to (substituted for `%file`)
    pub script: Option<String>,

    /// Initial command-line text
    pub default_command: Option<String>,

    /// Kernel dropdown entries, in display order
    pub kernels: Vec<OptionEntry>,

    /// Cluster dropdown entries, in display order
    pub clusters: Vec<OptionEntry>,

    /// Theme name to use (reserved for future use)
    pub theme: Option<String>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// A missing file yields the default configuration; an unreadable or
    /// invalid file is an error.
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("runbar")
            .join("config.toml")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, script: Option<String>) -> Self {
        if script.is_some() {
            self.script = script;
        }
        self
    }

    /// Identifier uniqueness within each dropdown table. Checked here at
    /// the boundary so the selectors never have to.
    fn validate(&self) -> ConfigResult<()> {
        ensure_unique("kernels", &self.kernels)?;
        ensure_unique("clusters", &self.clusters)
    }

    /// Get the script, falling back to the environment variable.
    pub fn script(&self) -> Option<String> {
        self.script
            .clone()
            .or_else(|| std::env::var("RUNBAR_SCRIPT").ok())
    }

    /// Initial command-line text; empty when unset.
    pub fn default_command(&self) -> String {
        self.default_command.clone().unwrap_or_default()
    }

    pub fn kernel_options(&self) -> OptionSet {
        OptionSet::new(self.kernels.clone())
    }

    pub fn cluster_options(&self) -> OptionSet {
        OptionSet::new(self.clusters.clone())
    }
}

fn ensure_unique(section: &'static str, entries: &[OptionEntry]) -> ConfigResult<()> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.id.as_str()) {
            return Err(ConfigError::DuplicateOption {
                section,
                id: entry.id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.script.is_none());
        assert!(config.default_command.is_none());
        assert!(config.kernels.is_empty());
        assert!(config.clusters.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            script = "train.py"
            default_command = "python %file"

            [[kernels]]
            id = "python3"
            label = "Python 3"

            [[kernels]]
            id = "julia-1.10"

            [[clusters]]
            id = "1"
            label = "GPU Cluster"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.script, Some("train.py".to_string()));
        assert_eq!(config.kernels.len(), 2);
        assert_eq!(config.kernels[0].display_label(), "Python 3");
        assert_eq!(config.kernels[1].display_label(), "julia-1.10");
        assert_eq!(config.clusters[0].id, "1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_duplicate_identifier_is_rejected() {
        let toml = r#"
            [[clusters]]
            id = "1"

            [[clusters]]
            id = "1"
            label = "Also One"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DuplicateOption { section: "clusters", ref id } if id == "1"
        ));
    }

    #[test]
    fn test_cli_override_wins() {
        let config = Config {
            script: Some("from_file.py".to_string()),
            ..Config::default()
        };
        let merged = config.with_overrides(Some("from_cli.py".to_string()));
        assert_eq!(merged.script, Some("from_cli.py".to_string()));
    }

    #[test]
    fn test_option_sets_preserve_file_order() {
        let toml = r#"
            [[kernels]]
            id = "z"

            [[kernels]]
            id = "a"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        let options = config.kernel_options();
        assert_eq!(options.get(0).unwrap().id, "z");
        assert_eq!(options.get(1).unwrap().id, "a");
    }
}
