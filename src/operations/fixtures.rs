//! Synthetic photo files for trying out the renamers
//!
//! Roughly 20% of numbers are left out to imitate deleted photos, and the rest
//! are split between `.JPG` and `.NEF`.

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, info};
use rand::Rng;

use crate::errors::{Result, file_operation_error};
use crate::naming::build_file_name;

/// Outcome of a fixture generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureReport {
    /// Number of files newly created
    pub created: usize,
    /// Numbers deliberately left without a file
    pub skipped: Vec<u32>,
}

/// Maps a uniform draw in `[0, 1)` to the extension of a fixture, or `None` to skip it
pub fn fixture_extension(draw: f64) -> Option<&'static str> {
    if draw <= 0.1 || draw >= 0.9 {
        None
    } else if draw < 0.5 {
        Some(".JPG")
    } else {
        Some(".NEF")
    }
}

/// Creates empty photo files numbered `1..=count` under `prefix`
///
/// Files that already exist are left untouched and not counted as created.
///
/// # Errors
/// Returns an error if a file cannot be created
pub fn generate_fixtures<R: Rng + ?Sized>(
    directory: &Path,
    prefix: &str,
    count: u32,
    rng: &mut R,
) -> Result<FixtureReport> {
    let mut report = FixtureReport::default();

    for sequence in 1..=count {
        let draw: f64 = rng.random();
        let Some(extension) = fixture_extension(draw) else {
            debug!("Did not create {sequence}");
            report.skipped.push(sequence);
            continue;
        };

        let path = directory.join(build_file_name(prefix, sequence, extension));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => report.created += 1,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!("{} already exists", path.display());
            }
            Err(e) => return Err(file_operation_error(e, path, "create")),
        }
    }

    info!("Total of {} files created", report.created);
    Ok(report)
}
