//! Photo operations module
//!
//! This module contains the operations the command-line tools run: selective
//! copying, range and bulk renaming, extension normalization and fixture
//! generation.

mod bulk_renamer;
mod copier;
mod extension_case;
mod fixtures;
mod plan;
mod range_renamer;

pub use bulk_renamer::{BulkRenameRequest, plan_all, rename_all_in_directory};
pub use copier::{CopyReport, CopyRequest, copy_selected, resolve_photo};
pub use extension_case::{NormalizeReport, normalize_jpg_extensions};
pub use fixtures::{FixtureReport, fixture_extension, generate_fixtures};
pub use plan::{PlannedRename, RenamePlan, RenameReport};
pub use range_renamer::{RangeRenameRequest, plan_range, rename_range};
