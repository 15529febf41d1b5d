//! Lower-casing upper-case JPEG extensions

use std::fs::rename;
use std::path::Path;

use log::{info, warn};

use crate::discovery::{ListingOrder, entry_holding, scan_media_files};
use crate::errors::{Result, file_operation_error};
use crate::logging::format_transition;
use crate::naming::extract_extension;

const UPPER_JPG: &str = ".JPG";
const LOWER_JPG: &str = ".jpg";

/// Outcome of an extension normalization run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Names that were (or on a dry run would be) changed, as `(old, new)`
    pub renamed: Vec<(String, String)>,
    /// Files left alone because the lower-case name is already taken
    pub conflicts: Vec<String>,
}

/// Renames every `.JPG` file in the directory to `.jpg`
///
/// A file is skipped with a warning when its lower-case counterpart already
/// exists as a separate entry.
///
/// # Errors
/// * Returns an error if the directory cannot be read
/// * Returns an error if a rename fails
pub fn normalize_jpg_extensions(directory: &Path, dry_run: bool) -> Result<NormalizeReport> {
    let mut report = NormalizeReport::default();

    for file in scan_media_files(directory, ListingOrder::Name)? {
        if extract_extension(&file.filename) != UPPER_JPG {
            continue;
        }

        let stem = &file.filename[..file.filename.len() - UPPER_JPG.len()];
        let new_name = format!("{stem}{LOWER_JPG}");
        let target = directory.join(&new_name);

        if let Some(holder) = entry_holding(directory, &new_name)? {
            if holder != file.filename {
                warn!("{holder} already exists, leaving {} as is", file.filename);
                report.conflicts.push(file.filename);
                continue;
            }
        }

        if dry_run {
            info!(
                "{}",
                format_transition("Would rename", &file.filename, &new_name)
            );
        } else {
            rename(&file.path, &target)
                .map_err(|e| file_operation_error(e, file.path.clone(), "rename"))?;
            info!("{}", format_transition("Renamed", &file.filename, &new_name));
        }
        report.renamed.push((file.filename, new_name));
    }

    Ok(report)
}
