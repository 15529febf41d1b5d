//! Configuration module
//!
//! This module contains components for loading and validating settings.

mod loader;
mod model;

pub use loader::{load_settings, locate_config, parse_settings, read_or_default};
pub use model::Settings;
