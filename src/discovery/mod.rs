//! File discovery module
//!
//! This module contains components for scanning directories and finding photo files.

mod scanner;

pub use scanner::{FileInfo, ListingOrder, entry_holding, list_entry_names, scan_media_files};
