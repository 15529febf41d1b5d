//! Directory scanning functionality
//!
//! This module contains functions for listing the media files of a single
//! directory, in an explicit order.

use std::fmt;
use std::fs::read_dir;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, trace};
use serde::Deserialize;

use crate::errors::{Result, file_operation_error, invalid_filename_error, path_operation_error};
use crate::naming::is_recognized_media;

/// Information about a file found during scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// The path to the file
    pub path: PathBuf,
    /// The filename of the file
    pub filename: String,
}

impl FileInfo {
    /// Creates a new FileInfo from a path
    ///
    /// # Errors
    /// Returns an error if the filename cannot be extracted or is not valid unicode
    pub fn new(path: PathBuf) -> Result<Self> {
        let filename = path
            .file_name()
            .ok_or_else(|| path_operation_error(path.clone(), "get filename of"))?
            .to_str()
            .ok_or_else(|| invalid_filename_error(path.clone()))?
            .to_string();

        Ok(FileInfo { path, filename })
    }
}

/// Order in which scanned files are handed out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingOrder {
    /// Sorted by filename, byte-wise
    #[default]
    Name,
    /// Whatever order the operating system returns
    Listing,
}

impl FromStr for ListingOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(ListingOrder::Name),
            "listing" => Ok(ListingOrder::Listing),
            _ => Err(format!("Unknown listing order: {s}")),
        }
    }
}

impl fmt::Display for ListingOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingOrder::Name => write!(f, "name"),
            ListingOrder::Listing => write!(f, "listing"),
        }
    }
}

#[cfg(unix)]
fn is_hidden_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

#[cfg(windows)]
fn is_hidden_file(path: &Path) -> bool {
    use std::os::windows::fs::MetadataExt;

    if let Ok(metadata) = path.metadata() {
        metadata.file_attributes() & 0x2 != 0 // FILE_ATTRIBUTE_HIDDEN
    } else {
        false
    }
}

/// Scans a directory for photo and video files
///
/// Only regular, non-hidden files whose extension the classifier recognizes are
/// returned. Subdirectories are not descended into.
///
/// # Errors
/// Returns an error if the directory cannot be read
pub fn scan_media_files(directory: &Path, order: ListingOrder) -> Result<Vec<FileInfo>> {
    debug!("Scanning directory: {}", directory.display());

    let mut files: Vec<FileInfo> = read_dir(directory)
        .map_err(|e| file_operation_error(e, directory.to_path_buf(), "read directory"))?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| !is_hidden_file(path))
        .filter(|path| path.is_file())
        .filter_map(|path| FileInfo::new(path).ok())
        .filter(|info| {
            let keep = is_recognized_media(&info.filename);
            if !keep {
                trace!("Ignoring {}", info.filename);
            }
            keep
        })
        .collect();

    if order == ListingOrder::Name {
        files.sort_by(|a, b| a.filename.cmp(&b.filename));
    }

    debug!("Found {} media files in directory", files.len());

    Ok(files)
}

/// Lists the names of every entry in a directory, hidden ones included
///
/// # Errors
/// Returns an error if the directory cannot be read
pub fn list_entry_names(directory: &Path) -> Result<Vec<String>> {
    let names = read_dir(directory)
        .map_err(|e| file_operation_error(e, directory.to_path_buf(), "read directory"))?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    Ok(names)
}

/// Returns the name of the directory entry that currently holds `name`, if any
///
/// On case-insensitive filesystems the holder can differ from `name` in case,
/// e.g. `a_0001.JPG` holds `a_0001.jpg`.
///
/// # Errors
/// Returns an error if the directory cannot be read
pub fn entry_holding(directory: &Path, name: &str) -> Result<Option<String>> {
    if !directory.join(name).exists() {
        return Ok(None);
    }

    let entries = list_entry_names(directory)?;
    let holder = matching_entry(&entries, name).unwrap_or(name);
    Ok(Some(holder.to_string()))
}

fn matching_entry<'a>(entries: &'a [String], name: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|entry| entry.as_str() == name)
        .or_else(|| entries.iter().find(|entry| entry.eq_ignore_ascii_case(name)))
        .map(String::as_str)
}
