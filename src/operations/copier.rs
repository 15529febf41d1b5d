//! Selective copying of keeper photos
//!
//! Every number in the manifest is resolved to a file in the source directory
//! by trying the candidate extensions in priority order, and the first match
//! is copied into the destination folder.

use std::collections::HashSet;
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use fs_extra::file::{CopyOptions, copy};
use log::{debug, info, warn};

use crate::constants::COPY_CANDIDATE_EXTENSIONS;
use crate::errors::{Result, file_operation_error, generic_error};
use crate::logging::format_transition;
use crate::manifest::read_manifest;
use crate::naming::{build_file_name, missing_identifier};

/// Everything the copier needs to know for one run
#[derive(Debug, Clone)]
pub struct CopyRequest {
    /// Manifest listing the keeper photo numbers
    pub manifest: PathBuf,
    /// Directory holding the photos
    pub source_dir: PathBuf,
    /// Directory the keepers are copied into
    pub destination: PathBuf,
    /// Shared filename prefix of the photos
    pub prefix: String,
    /// Whether to only report what would be copied
    pub dry_run: bool,
}

/// Outcome of a copy run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Number of manifest entries processed
    pub processed: usize,
    /// Number of successful copy attempts, duplicates included
    pub copied: usize,
    /// Identifiers of photo numbers with no matching file
    pub missing: Vec<String>,
    /// Basenames copied, in manifest order
    pub copied_files: Vec<String>,
}

impl CopyReport {
    /// Number of different files copied
    pub fn distinct_copied(&self) -> usize {
        self.copied_files.iter().collect::<HashSet<_>>().len()
    }
}

/// Finds the file a photo number refers to, trying each candidate extension in turn
pub fn resolve_photo(source_dir: &Path, prefix: &str, sequence: u32) -> Option<String> {
    COPY_CANDIDATE_EXTENSIONS
        .iter()
        .map(|extension| build_file_name(prefix, sequence, extension))
        .find(|name| source_dir.join(name).is_file())
}

fn is_same_directory(first: &Path, second: &Path) -> bool {
    match (first.canonicalize(), second.canonicalize()) {
        (Ok(first), Ok(second)) => first == second,
        _ => false,
    }
}

/// Copies the photos listed in the manifest into the destination folder
///
/// # Errors
/// * Returns an error if the destination is the source directory itself
/// * Returns an error if the destination cannot be created
/// * Returns an error if the manifest cannot be read or holds a non-number line
/// * Returns an error if copying a found photo fails
pub fn copy_selected(request: &CopyRequest) -> Result<CopyReport> {
    if is_same_directory(&request.source_dir, &request.destination) {
        return Err(generic_error(&format!(
            "Destination {} is the source folder, refusing to copy photos onto themselves",
            request.destination.display()
        )));
    }

    if request.dry_run {
        debug!(
            "Dry run: not creating {}",
            request.destination.display()
        );
    } else if !request.destination.is_dir() {
        create_dir_all(&request.destination).map_err(|e| {
            file_operation_error(e, request.destination.clone(), "create directory")
        })?;
        info!("{} directory created", request.destination.display());
    }

    let numbers = read_manifest(&request.manifest)?;

    let options = CopyOptions::new().overwrite(true);
    let mut report = CopyReport::default();

    for number in numbers {
        report.processed += 1;

        let Some(name) = resolve_photo(&request.source_dir, &request.prefix, number) else {
            let identifier = missing_identifier(&request.prefix, number);
            warn!("{identifier} does not exist");
            report.missing.push(identifier);
            continue;
        };

        let source_path = request.source_dir.join(&name);
        let target_path = request.destination.join(&name);

        if request.dry_run {
            info!(
                "{}",
                format_transition(
                    "Would copy",
                    &name,
                    &target_path.display().to_string()
                )
            );
        } else {
            copy(&source_path, &target_path, &options).map_err(|e| {
                file_operation_error(std::io::Error::other(e), source_path.clone(), "copy")
            })?;
            info!("Copied {name}");
        }

        report.copied += 1;
        report.copied_files.push(name);
    }

    Ok(report)
}
