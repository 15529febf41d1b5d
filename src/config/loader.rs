//! Configuration loading functionality
//!
//! This module contains functions for locating, loading and validating settings.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::{debug, info};
use serde::Deserialize;
use serde_yaml::from_str;

use crate::utils::{expand_path, find_project_folder};

use super::model::Settings;

/// Loads settings from a YAML file
///
/// # Errors
/// Returns an error if the file cannot be read or if the settings are invalid
pub fn load_settings(file: &Path) -> Result<Settings> {
    let file_content = fs::read(file).map_err(|e| {
        anyhow!(
            "Failed to read configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    let content_str = String::from_utf8(file_content).map_err(|e| {
        anyhow!(
            "Configuration file {} contains invalid UTF-8 characters: {}",
            file.display(),
            e
        )
    })?;

    parse_settings(&content_str).map_err(|e| anyhow!("{}: {}", file.display(), e))
}

/// Parses and validates settings from YAML text
///
/// Blank text yields the default settings.
///
/// # Errors
/// Returns an error if the YAML is malformed or a value is invalid
pub fn parse_settings(content: &str) -> Result<Settings> {
    let settings: Settings = if content.trim().is_empty() {
        Settings::default()
    } else {
        from_str(content).map_err(|e| {
            anyhow!("Failed to parse configuration: {}\nPlease check the YAML syntax.", e)
        })?
    };

    settings.validate()?;

    Ok(settings)
}

/// Finds the configuration file to use, if any
///
/// The given path wins when it exists. Otherwise the same file name is looked
/// up in the platform configuration directory.
pub fn locate_config(config: &Path) -> Option<PathBuf> {
    if config.exists() {
        return Some(config.to_path_buf());
    }

    let folder = find_project_folder().ok()?;
    let candidate = folder.config_dir().join(config.file_name()?);
    candidate.exists().then_some(candidate)
}

/// Loads the settings from the first configuration file found, or the defaults
///
/// # Errors
/// Returns an error if a configuration file exists but cannot be loaded
pub fn read_or_default(config: &Path) -> Result<Settings> {
    match locate_config(config) {
        Some(path) => {
            info!("Using configuration file {}", path.display());
            load_settings(&path)
        }
        None => {
            debug!(
                "No configuration file found for {}, using defaults",
                config.display()
            );
            Ok(Settings::default())
        }
    }
}

/// Deserializes a path, expanding a leading `~`
pub fn deserialize_expanded_path<'de, D>(deserializer: D) -> std::result::Result<PathBuf, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(PathBuf::from(expand_path(&raw)))
}
