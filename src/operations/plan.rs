//! Rename planning and execution
//!
//! Renamers first collect every `source -> target` pair into a [`RenamePlan`],
//! then validate and apply it in two phases: every source is moved to a
//! staging name with a random prefix, and only then are staging names moved to
//! their targets. A target that is still held by a not-yet-renamed source can
//! therefore never be overwritten.

use std::collections::HashSet;
use std::fs::rename;
use std::path::{Path, PathBuf};

use log::{debug, info};
use rand::Rng;
use rand::distr::{Alphanumeric, SampleString};

use crate::constants::STAGING_PREFIX_LENGTH;
use crate::discovery::{entry_holding, list_entry_names};
use crate::errors::{Result, file_operation_error, rename_conflict_error};
use crate::logging::format_transition;
use crate::naming::{build_file_name, extract_extension};

/// A single planned rename inside one directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    /// Current name of the file
    pub source: String,
    /// Name the file will have afterwards
    pub target: String,
}

impl PlannedRename {
    fn is_identity(&self) -> bool {
        self.source == self.target
    }
}

/// Ordered set of renames inside one directory
#[derive(Debug, Clone)]
pub struct RenamePlan {
    directory: PathBuf,
    renames: Vec<PlannedRename>,
}

/// Outcome of a rename run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameReport {
    /// Number of files that now carry their planned name
    pub renamed: usize,
    /// Identifiers of expected source files that did not exist
    pub missing: Vec<String>,
    /// The planned renames, in processing order
    pub planned: Vec<PlannedRename>,
    /// Whether the run only planned and touched nothing
    pub dry_run: bool,
}

impl RenamePlan {
    pub fn new(directory: &Path) -> Self {
        RenamePlan {
            directory: directory.to_path_buf(),
            renames: Vec::new(),
        }
    }

    /// Appends a rename, keeping insertion order
    pub fn push(&mut self, source: impl Into<String>, target: impl Into<String>) {
        self.renames.push(PlannedRename {
            source: source.into(),
            target: target.into(),
        });
    }

    pub fn renames(&self) -> &[PlannedRename] {
        &self.renames
    }

    pub fn len(&self) -> usize {
        self.renames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }

    /// Checks that the plan can run without overwriting anything
    ///
    /// # Errors
    /// * Returns an error if two renames share a target
    /// * Returns an error if a target is held on disk by an entry that is not one of
    ///   the plan's sources
    pub fn validate(&self) -> Result<()> {
        let sources: HashSet<&str> = self.renames.iter().map(|r| r.source.as_str()).collect();
        let mut targets: HashSet<&str> = HashSet::new();

        for planned in &self.renames {
            let source_path = self.directory.join(&planned.source);
            let target_path = self.directory.join(&planned.target);

            if !targets.insert(planned.target.as_str()) {
                return Err(rename_conflict_error(source_path, target_path));
            }
            if let Some(holder) = entry_holding(&self.directory, &planned.target)? {
                if !sources.contains(holder.as_str()) {
                    return Err(rename_conflict_error(source_path, target_path));
                }
            }
        }

        Ok(())
    }

    /// Logs every planned rename without touching the filesystem
    pub fn describe(&self) {
        for planned in &self.renames {
            info!(
                "{}",
                format_transition("Would rename", &planned.source, &planned.target)
            );
        }
    }

    /// Validates and performs the plan, returning how many files were moved
    ///
    /// # Errors
    /// * Returns an error if validation fails, before any file is touched
    /// * Returns an error if a rename fails; files renamed so far keep their new
    ///   or staging names
    pub fn apply<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize> {
        self.validate()?;

        let moving: Vec<&PlannedRename> = self
            .renames
            .iter()
            .filter(|r| !r.is_identity())
            .collect();
        if moving.is_empty() {
            return Ok(0);
        }

        let staging_prefix = self.unused_staging_prefix(rng)?;
        debug!("Staging renames under prefix {staging_prefix}");

        let mut staged: Vec<(PathBuf, &PlannedRename)> = Vec::with_capacity(moving.len());
        for (index, planned) in moving.into_iter().enumerate() {
            let staging_name = build_file_name(
                &staging_prefix,
                index as u32 + 1,
                extract_extension(&planned.target),
            );
            let source_path = self.directory.join(&planned.source);
            let staging_path = self.directory.join(&staging_name);
            rename(&source_path, &staging_path)
                .map_err(|e| file_operation_error(e, source_path.clone(), "stage"))?;
            staged.push((staging_path, planned));
        }

        for (staging_path, planned) in &staged {
            let target_path = self.directory.join(&planned.target);
            rename(staging_path, &target_path)
                .map_err(|e| file_operation_error(e, staging_path.clone(), "rename"))?;
            info!(
                "{}",
                format_transition("Renamed", &planned.source, &planned.target)
            );
        }

        Ok(staged.len())
    }

    /// Executes the plan, or only describes it on a dry run
    pub fn run<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        dry_run: bool,
        missing: Vec<String>,
    ) -> Result<RenameReport> {
        if dry_run {
            self.validate()?;
            self.describe();
        } else {
            self.apply(rng)?;
        }

        Ok(RenameReport {
            renamed: self.renames.len(),
            missing,
            planned: self.renames,
            dry_run,
        })
    }

    fn unused_staging_prefix<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        let existing = list_entry_names(&self.directory)?;
        loop {
            let candidate = Alphanumeric.sample_string(rng, STAGING_PREFIX_LENGTH);
            if !existing.iter().any(|name| name.starts_with(&candidate)) {
                return Ok(candidate);
            }
        }
    }
}
