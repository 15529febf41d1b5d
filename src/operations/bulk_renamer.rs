//! Renaming every media file in a directory

use std::path::{Path, PathBuf};

use log::info;
use rand::Rng;

use crate::discovery::{ListingOrder, scan_media_files};
use crate::errors::{Result, generic_error};
use crate::naming::derive_new_file_name;

use super::plan::{RenamePlan, RenameReport};

/// Everything the bulk renamer needs to know for one run
#[derive(Debug, Clone)]
pub struct BulkRenameRequest {
    /// Directory whose media files are renamed
    pub directory: PathBuf,
    /// Prefix every file will have
    pub new_prefix: String,
    /// Number the first file gets
    pub start_index: u32,
    /// Order in which files receive their numbers
    pub order: ListingOrder,
    /// Whether to only report what would be renamed
    pub dry_run: bool,
}

impl BulkRenameRequest {
    pub fn new(directory: &Path, new_prefix: &str, start_index: u32) -> Self {
        BulkRenameRequest {
            directory: directory.to_path_buf(),
            new_prefix: new_prefix.to_string(),
            start_index,
            order: ListingOrder::default(),
            dry_run: false,
        }
    }
}

/// Builds the rename plan for every recognized media file in the directory
///
/// # Errors
/// * Returns an error if the directory cannot be read
/// * Returns an error if the numbering would overflow
pub fn plan_all(request: &BulkRenameRequest) -> Result<RenamePlan> {
    let files = scan_media_files(&request.directory, request.order)?;
    let mut plan = RenamePlan::new(&request.directory);
    let mut index = request.start_index;

    for (position, file) in files.iter().enumerate() {
        plan.push(
            file.filename.as_str(),
            derive_new_file_name(&file.filename, &request.new_prefix, index),
        );
        if position + 1 < files.len() {
            index = index
                .checked_add(1)
                .ok_or_else(|| generic_error("Photo numbers overflow while renaming"))?;
        }
    }

    Ok(plan)
}

/// Renames every recognized media file to the new prefix with increasing numbers
///
/// Files are numbered in the requested order, keeping their original extension.
/// Unrecognized files are left untouched.
///
/// # Errors
/// * Returns an error if the directory cannot be read
/// * Returns an error if a target is already taken by a file that is not being renamed
/// * Returns an error if a rename fails
pub fn rename_all_in_directory<R: Rng + ?Sized>(
    request: &BulkRenameRequest,
    rng: &mut R,
) -> Result<RenameReport> {
    let plan = plan_all(request)?;
    if plan.is_empty() {
        info!(
            "No photo or video files found in {}",
            request.directory.display()
        );
    }
    plan.run(rng, request.dry_run, Vec::new())
}
