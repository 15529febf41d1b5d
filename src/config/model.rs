//! Configuration data structures
//!
//! This module contains the data structures for configuration.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_DESTINATION, DEFAULT_FIXTURE_COUNT, DEFAULT_MANIFEST, DEFAULT_RANGE_EXTENSION,
};
use crate::discovery::ListingOrder;
use crate::naming::extract_extension;

use super::loader::deserialize_expanded_path;

/// Settings for the photo tools
///
/// Every field has a default, so an empty file (or no file at all) is a valid
/// configuration.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Manifest file used by `copy` when none is given
    #[serde(deserialize_with = "deserialize_expanded_path")]
    pub manifest: PathBuf,
    /// Folder keepers are copied into when none is given
    #[serde(deserialize_with = "deserialize_expanded_path")]
    pub destination: PathBuf,
    /// Order in which `rename-all` numbers files
    pub order: ListingOrder,
    /// Extensions `rename-range` looks for, in priority order
    pub range_extensions: Vec<String>,
    /// Number of fixtures `generate` attempts
    pub fixture_count: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            destination: PathBuf::from(DEFAULT_DESTINATION),
            order: ListingOrder::Name,
            range_extensions: vec![DEFAULT_RANGE_EXTENSION.to_string()],
            fixture_count: DEFAULT_FIXTURE_COUNT,
        }
    }
}

impl Settings {
    /// Validates the settings
    ///
    /// # Errors
    /// Returns an error with a detailed message if a value cannot be used
    pub fn validate(&self) -> Result<()> {
        if self.manifest.as_os_str().is_empty() {
            return Err(anyhow!(
                "No manifest file specified in configuration. Remove the key to use '{}'.",
                DEFAULT_MANIFEST
            ));
        }

        if self.destination.as_os_str().is_empty() {
            return Err(anyhow!(
                "No destination folder specified in configuration. Remove the key to use '{}'.",
                DEFAULT_DESTINATION
            ));
        }

        if self.range_extensions.is_empty() {
            return Err(anyhow!(
                "range_extensions is empty. At least one extension such as '{}' is required.",
                DEFAULT_RANGE_EXTENSION
            ));
        }

        for (index, extension) in self.range_extensions.iter().enumerate() {
            if extract_extension(extension) != extension {
                return Err(anyhow!(
                    "Extension '{}' at index {} must be a dot followed by letters, digits or underscores.",
                    extension,
                    index
                ));
            }
        }

        if self.fixture_count == 0 {
            return Err(anyhow!("fixture_count must be at least 1."));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.manifest, PathBuf::from("good ones.txt"));
        assert_eq!(settings.range_extensions, vec![".JPG".to_string()]);
    }

    #[test]
    fn test_validate_rejects_bad_extension() {
        let settings = Settings {
            range_extensions: vec![".JPG".to_string(), "NEF".to_string()],
            ..Settings::default()
        };
        let error = settings.validate().unwrap_err();
        assert!(error.to_string().contains("'NEF' at index 1"));
    }

    #[test]
    fn test_validate_rejects_zero_fixtures() {
        let settings = Settings {
            fixture_count: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
