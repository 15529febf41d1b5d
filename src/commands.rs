//! Subcommand handlers
//!
//! Each handler fills in the arguments that were not given on the command line
//! by asking the [`Prompter`], runs the matching operation and logs a summary.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use clap::ArgMatches;
use log::{info, warn};

use crate::cli::{get_order, is_dry_run};
use crate::config::Settings;
use crate::constants::CURRENT_MARKER;
use crate::operations::{
    BulkRenameRequest, CopyRequest, RangeRenameRequest, RenameReport, copy_selected,
    generate_fixtures, normalize_jpg_extensions, rename_all_in_directory, rename_range,
};
use crate::prompt::{Prompter, number_or_ask, text_or_ask};
use crate::utils::directory_name;

/// Runs the subcommand selected on the command line
///
/// # Errors
/// Returns the first fatal error of the subcommand
pub fn run(matches: &ArgMatches, settings: &Settings, prompter: &mut dyn Prompter) -> Result<()> {
    let dry_run = is_dry_run(matches);
    if dry_run {
        info!("Dry run: nothing will be changed on disk");
    }

    match matches.subcommand() {
        Some(("copy", sub)) => run_copy(sub, settings, prompter, dry_run),
        Some(("rename-range", sub)) => run_rename_range(sub, settings, prompter, dry_run),
        Some(("rename-all", sub)) => run_rename_all(sub, settings, prompter, dry_run),
        Some(("generate", sub)) => run_generate(sub, settings, prompter),
        Some(("normalize-jpg", sub)) => run_normalize_jpg(sub, dry_run),
        Some((name, _)) => Err(anyhow!("Unknown command: {name}")),
        None => Err(anyhow!("No command given")),
    }
}

fn path_arg(matches: &ArgMatches, id: &str) -> PathBuf {
    matches
        .get_one::<PathBuf>(id)
        .cloned()
        .unwrap_or_else(|| PathBuf::from(CURRENT_MARKER))
}

fn text_arg(matches: &ArgMatches, id: &str) -> Option<String> {
    matches.get_one::<String>(id).cloned()
}

/// Replaces the `.` answer with the name of `directory`
fn prefix_or_folder_name(prefix: String, directory: &Path) -> Result<String> {
    if prefix == CURRENT_MARKER {
        Ok(directory_name(directory)?)
    } else {
        Ok(prefix)
    }
}

fn run_copy(
    matches: &ArgMatches,
    settings: &Settings,
    prompter: &mut dyn Prompter,
    dry_run: bool,
) -> Result<()> {
    let source_dir = path_arg(matches, "source");

    let manifest = match matches.get_one::<PathBuf>("manifest") {
        Some(path) if path.as_os_str() != CURRENT_MARKER => path.clone(),
        Some(_) => source_dir.join(&settings.manifest),
        None => {
            let answer = prompter.ask(&format!(
                "Which file lists the photo numbers? Type `.` for '{}':",
                settings.manifest.display()
            ))?;
            if answer.is_empty() || answer == CURRENT_MARKER {
                source_dir.join(&settings.manifest)
            } else {
                PathBuf::from(answer)
            }
        }
    };

    let destination = matches
        .get_one::<PathBuf>("dest")
        .cloned()
        .unwrap_or_else(|| source_dir.join(&settings.destination));

    let prefix = text_or_ask(
        prompter,
        text_arg(matches, "prefix"),
        "What is the photo prefix? Type `.` for the folder name:",
    )?;
    let prefix = prefix_or_folder_name(prefix, &source_dir)?;

    let request = CopyRequest {
        manifest,
        source_dir,
        destination,
        prefix,
        dry_run,
    };
    let report = copy_selected(&request)?;

    info!("Number of photos to be copied: {}", report.processed);
    info!("Number of photos copied: {}", report.copied);
    if report.distinct_copied() != report.copied {
        info!("Number of distinct photos copied: {}", report.distinct_copied());
    }
    if !report.missing.is_empty() {
        warn!("Missing photos: {}", report.missing.join(", "));
    }

    Ok(())
}

fn run_rename_range(
    matches: &ArgMatches,
    settings: &Settings,
    prompter: &mut dyn Prompter,
    dry_run: bool,
) -> Result<()> {
    let directory = path_arg(matches, "dir");

    let first = number_or_ask(
        prompter,
        matches.get_one::<u32>("first").copied(),
        "First photo number to rename:",
        "first photo number",
    )?;
    let last = number_or_ask(
        prompter,
        matches.get_one::<u32>("last").copied(),
        "Last photo number to rename:",
        "last photo number",
    )?;
    let new_start = number_or_ask(
        prompter,
        matches.get_one::<u32>("start").copied(),
        "New number of the first photo:",
        "new starting number",
    )?;
    let old_prefix = text_or_ask(
        prompter,
        text_arg(matches, "from"),
        "Current photo prefix:",
    )?;
    let new_prefix = text_or_ask(prompter, text_arg(matches, "to"), "New photo prefix:")?;

    let extensions = match matches.get_many::<String>("extension") {
        Some(values) => values.cloned().collect(),
        None => settings.range_extensions.clone(),
    };

    let request = RangeRenameRequest {
        extensions,
        dry_run,
        ..RangeRenameRequest::new(&directory, first, last, new_start, &old_prefix, &new_prefix)
    };
    let report = rename_range(&request, &mut rand::rng())?;

    log_rename_summary(&report);
    Ok(())
}

fn run_rename_all(
    matches: &ArgMatches,
    settings: &Settings,
    prompter: &mut dyn Prompter,
    dry_run: bool,
) -> Result<()> {
    let directory = path_arg(matches, "dir");

    let prefix = text_or_ask(
        prompter,
        text_arg(matches, "prefix"),
        "New photo prefix? Type `.` for the folder name:",
    )?;
    let prefix = prefix_or_folder_name(prefix, &directory)?;
    let start_index = number_or_ask(
        prompter,
        matches.get_one::<u32>("start").copied(),
        "Number of the first photo:",
        "starting number",
    )?;

    let request = BulkRenameRequest {
        order: get_order(matches).unwrap_or(settings.order),
        dry_run,
        ..BulkRenameRequest::new(&directory, &prefix, start_index)
    };
    let report = rename_all_in_directory(&request, &mut rand::rng())?;

    log_rename_summary(&report);
    Ok(())
}

fn run_generate(
    matches: &ArgMatches,
    settings: &Settings,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    let directory = path_arg(matches, "dir");
    let prefix = text_or_ask(prompter, text_arg(matches, "prefix"), "Prefix of the test photos:")?;
    let count = matches
        .get_one::<u32>("count")
        .copied()
        .unwrap_or(settings.fixture_count);

    let report = generate_fixtures(&directory, &prefix, count, &mut rand::rng())?;
    info!(
        "Left out {} of {} numbers",
        report.skipped.len(),
        count
    );
    Ok(())
}

fn run_normalize_jpg(matches: &ArgMatches, dry_run: bool) -> Result<()> {
    let directory = path_arg(matches, "dir");
    let report = normalize_jpg_extensions(&directory, dry_run)?;

    info!("Number of extensions renamed: {}", report.renamed.len());
    if !report.conflicts.is_empty() {
        warn!("Left as is: {}", report.conflicts.join(", "));
    }
    Ok(())
}

fn log_rename_summary(report: &RenameReport) {
    if report.dry_run {
        info!("Number of photos to be renamed: {}", report.renamed);
    } else {
        info!("Number of photos renamed: {}", report.renamed);
    }
    if !report.missing.is_empty() {
        warn!("Missing photos: {}", report.missing.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::build_command;
    use crate::discovery::ListingOrder;
    use crate::prompt::ScriptedPrompter;
    use std::fs;
    use tempfile::tempdir;

    fn matches_for(args: &[&str]) -> ArgMatches {
        let mut full = vec!["pcull"];
        full.extend_from_slice(args);
        build_command().try_get_matches_from(full).unwrap()
    }

    #[test]
    fn test_copy_prompts_for_manifest_and_prefix() {
        let temp_dir = tempdir().unwrap();
        let shoot = temp_dir.path().join("IMG");
        fs::create_dir(&shoot).unwrap();
        fs::write(shoot.join("IMG_0002.NEF"), b"raw").unwrap();
        fs::write(shoot.join("good ones.txt"), "2\n").unwrap();

        let source = shoot.to_str().unwrap();
        let matches = matches_for(&["copy", "--source", source]);
        let mut prompter = ScriptedPrompter::new([".", "."]);

        run(&matches, &Settings::default(), &mut prompter).unwrap();

        assert_eq!(prompter.asked().len(), 2);
        assert!(shoot.join("Good Ones").join("IMG_0002.NEF").is_file());
    }

    #[test]
    fn test_rename_range_takes_arguments_without_prompting() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("DSC_0001.JPG"), b"a").unwrap();
        let dir = temp_dir.path().to_str().unwrap();

        let matches = matches_for(&[
            "rename-range", "--first", "1", "--last", "1", "--start", "5", "--from", "DSC",
            "--to", "OUT", "--dir", dir,
        ]);
        let mut prompter = ScriptedPrompter::default();

        run(&matches, &Settings::default(), &mut prompter).unwrap();

        assert!(prompter.asked().is_empty());
        assert!(temp_dir.path().join("OUT_0005.JPG").is_file());
    }

    #[test]
    fn test_rename_all_rejects_non_integer_answer() {
        let temp_dir = tempdir().unwrap();
        let dir = temp_dir.path().to_str().unwrap();
        let matches = matches_for(&["rename-all", "--dir", dir, "--prefix", "B"]);
        let mut prompter = ScriptedPrompter::new(["first"]);

        assert!(run(&matches, &Settings::default(), &mut prompter).is_err());
    }

    #[test]
    fn test_dry_run_leaves_files_alone() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("A_0001.JPG"), b"a").unwrap();
        let dir = temp_dir.path().to_str().unwrap();

        let matches = matches_for(&["-n", "normalize-jpg", "--dir", dir]);
        run(&matches, &Settings::default(), &mut ScriptedPrompter::default()).unwrap();

        assert!(temp_dir.path().join("A_0001.JPG").is_file());
    }

    #[test]
    fn test_rename_all_uses_configured_order() {
        let temp_dir = tempdir().unwrap();
        for name in ["C_0003.JPG", "A_0001.NEF", "B_0002.MOV"] {
            fs::write(temp_dir.path().join(name), name).unwrap();
        }
        let dir = temp_dir.path().to_str().unwrap();
        let settings = Settings {
            order: ListingOrder::Listing,
            ..Settings::default()
        };

        let matches = matches_for(&["rename-all", "--dir", dir, "--prefix", "D", "--start", "1"]);
        run(&matches, &settings, &mut ScriptedPrompter::default()).unwrap();

        let mut names: Vec<String> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        let numbers: Vec<&str> = names.iter().map(|name| &name[2..6]).collect();
        assert_eq!(numbers, vec!["0001", "0002", "0003"]);
        assert!(names.iter().all(|name| name.starts_with("D_")));
    }
}
