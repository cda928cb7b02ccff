//! Configuration handling for modkit.
//! Loads default variable values and extra template search roots from a
//! modkit.json / modkit.yml / modkit.yaml file. The core engine never reads
//! ambient process state; whatever is loaded here is passed in as plain
//! parameters.

use crate::constants::CONFIG_FILES;
use crate::descriptor::Difficulty;
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default values applied to scaffolding variables when the caller does not
/// override them on the command line.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub author: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub language: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            author: String::new(),
            category: "programming".to_string(),
            difficulty: Difficulty::Beginner,
            language: "en".to_string(),
        }
    }
}

/// Top-level modkit configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: Defaults,
    /// Extra template roots searched after the built-in locations.
    pub template_roots: Vec<PathBuf>,
}

impl Config {
    /// Loads configuration from a directory, trying multiple file formats.
    /// Supports: modkit.json, modkit.yml, modkit.yaml. Returns the built-in
    /// defaults when no config file exists.
    ///
    /// # Errors
    /// * `Error::ConfigError` if a config file exists but cannot be parsed
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        for file in CONFIG_FILES {
            let config_path = dir.as_ref().join(file);
            if config_path.exists() {
                return Self::load_file(&config_path);
            }
        }
        debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Loads configuration from an explicit file path.
    pub fn load_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(Error::IoError)?;

        // Try parsing as JSON first, fall back to YAML.
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(_) => serde_yaml::from_str(&content).map_err(|e| {
                Error::ConfigError(format!(
                    "Invalid configuration in '{}': {}",
                    path.display(),
                    e
                ))
            }),
        }
    }
}
