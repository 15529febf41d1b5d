//! Renaming a contiguous range of photo numbers
//!
//! `first..=last` under the old prefix becomes `new_start..` under the new
//! prefix. Each source keeps the extension it was found with.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use rand::Rng;

use crate::constants::DEFAULT_RANGE_EXTENSION;
use crate::errors::{Result, generic_error, invalid_range_error};
use crate::naming::{build_file_name, missing_identifier};

use super::plan::{RenamePlan, RenameReport};

/// Everything the range renamer needs to know for one run
#[derive(Debug, Clone)]
pub struct RangeRenameRequest {
    /// Directory holding the photos
    pub directory: PathBuf,
    /// First photo number to rename
    pub first: u32,
    /// Last photo number to rename, inclusive
    pub last: u32,
    /// Number the first renamed photo gets
    pub new_start: u32,
    /// Prefix the photos currently have
    pub old_prefix: String,
    /// Prefix the photos will have
    pub new_prefix: String,
    /// Extensions tried for each source, in priority order
    pub extensions: Vec<String>,
    /// Whether to only report what would be renamed
    pub dry_run: bool,
}

impl RangeRenameRequest {
    /// Creates a request that only looks for `.JPG` sources
    pub fn new(
        directory: &Path,
        first: u32,
        last: u32,
        new_start: u32,
        old_prefix: &str,
        new_prefix: &str,
    ) -> Self {
        RangeRenameRequest {
            directory: directory.to_path_buf(),
            first,
            last,
            new_start,
            old_prefix: old_prefix.to_string(),
            new_prefix: new_prefix.to_string(),
            extensions: vec![DEFAULT_RANGE_EXTENSION.to_string()],
            dry_run: false,
        }
    }
}

/// Builds the rename plan for a range, collecting the numbers that have no source file
///
/// # Errors
/// * Returns an error if `first` is greater than `last`
/// * Returns an error if no extensions are given or the new range overflows
pub fn plan_range(request: &RangeRenameRequest) -> Result<(RenamePlan, Vec<String>)> {
    if request.first > request.last {
        return Err(invalid_range_error(request.first, request.last));
    }
    if request.extensions.is_empty() {
        return Err(generic_error("No source extensions given for the range rename"));
    }

    let span = request.last - request.first;
    request.new_start.checked_add(span).ok_or_else(|| {
        generic_error(&format!(
            "New numbers starting at {} overflow for a range of {} photos",
            request.new_start,
            span as u64 + 1
        ))
    })?;

    let mut plan = RenamePlan::new(&request.directory);
    let mut missing = Vec::new();

    for offset in 0..=span {
        let old_number = request.first + offset;
        let new_number = request.new_start + offset;

        let found = request.extensions.iter().find_map(|extension| {
            let name = build_file_name(&request.old_prefix, old_number, extension);
            request
                .directory
                .join(&name)
                .is_file()
                .then(|| (name, extension))
        });

        match found {
            Some((source, extension)) => {
                let target = build_file_name(&request.new_prefix, new_number, extension);
                debug!("Planned {source} -> {target}");
                plan.push(source, target);
            }
            None => {
                let identifier = missing_identifier(&request.old_prefix, old_number);
                warn!("{identifier} does not exist, skipping");
                missing.push(identifier);
            }
        }
    }

    Ok((plan, missing))
}

/// Renames a numeric range of photos to a new prefix and starting number
///
/// Missing sources are logged and skipped. All renames are staged so that a
/// range may be shifted onto overlapping numbers.
///
/// # Errors
/// * Returns an error if the range is invalid
/// * Returns an error if a target is already taken by a file outside the range
/// * Returns an error if a rename fails
pub fn rename_range<R: Rng + ?Sized>(
    request: &RangeRenameRequest,
    rng: &mut R,
) -> Result<RenameReport> {
    let (plan, missing) = plan_range(request)?;
    plan.run(rng, request.dry_run, missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs::{self, File};
    use tempfile::tempdir;

    #[test]
    fn test_plan_range_rejects_reversed_range() {
        let temp_dir = tempdir().unwrap();
        let request = RangeRenameRequest::new(temp_dir.path(), 5, 2, 1, "DSC", "OUT");
        assert!(matches!(
            plan_range(&request),
            Err(Error::InvalidRange { first: 5, last: 2 })
        ));
    }

    #[test]
    fn test_plan_range_default_only_looks_for_jpg() {
        let temp_dir = tempdir().unwrap();
        File::create(temp_dir.path().join("DSC_0001.JPG")).unwrap();
        File::create(temp_dir.path().join("DSC_0002.NEF")).unwrap();

        let request = RangeRenameRequest::new(temp_dir.path(), 1, 2, 1, "DSC", "OUT");
        let (plan, missing) = plan_range(&request).unwrap();

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.renames()[0].target, "OUT_0001.JPG");
        assert_eq!(missing, vec!["DSC_2".to_string()]);
    }

    #[test]
    fn test_plan_range_with_extra_extensions_keeps_extension() {
        let temp_dir = tempdir().unwrap();
        File::create(temp_dir.path().join("DSC_0002.NEF")).unwrap();

        let mut request = RangeRenameRequest::new(temp_dir.path(), 2, 2, 40, "DSC", "OUT");
        request.extensions = vec![".JPG".to_string(), ".NEF".to_string()];
        let (plan, missing) = plan_range(&request).unwrap();

        assert!(missing.is_empty());
        assert_eq!(plan.renames()[0].source, "DSC_0002.NEF");
        assert_eq!(plan.renames()[0].target, "OUT_0040.NEF");
    }

    #[test]
    fn test_plan_range_rejects_overflowing_start() {
        let temp_dir = tempdir().unwrap();
        let request = RangeRenameRequest::new(temp_dir.path(), 1, 3, u32::MAX, "DSC", "OUT");
        assert!(plan_range(&request).is_err());
    }

    #[test]
    fn test_rename_range_shift_onto_itself() {
        let temp_dir = tempdir().unwrap();
        for number in 1..=3 {
            fs::write(
                temp_dir.path().join(build_file_name("DSC", number, ".JPG")),
                number.to_string(),
            )
            .unwrap();
        }

        let request = RangeRenameRequest::new(temp_dir.path(), 1, 3, 2, "DSC", "DSC");
        let report = rename_range(&request, &mut StdRng::seed_from_u64(11)).unwrap();

        assert_eq!(report.renamed, 3);
        assert!(!temp_dir.path().join("DSC_0001.JPG").exists());
        for number in 2..=4u32 {
            let content =
                fs::read_to_string(temp_dir.path().join(build_file_name("DSC", number, ".JPG")))
                    .unwrap();
            assert_eq!(content, (number - 1).to_string());
        }
    }
}
