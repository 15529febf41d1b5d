use std::path::PathBuf;

use atty::Stream;
use clap::{
    Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description, crate_name,
    crate_version, value_parser,
};

use crate::constants::{
    CONFIG_HELP, DEFAULT_CONFIG_PATH, DRY_RUN_HELP, LOCAL_LOGGING_HELP, LOG_FILE_DEFAULT,
    LOG_FILE_HELP, NO_PAUSE_HELP, VERBOSE_HELP,
};
use crate::discovery::ListingOrder;
use crate::errors::{Result, generic_error};
use crate::logging::LogLevel;
use crate::utils::find_project_folder;

/// Checks if stdout is a terminal and waits for user input if it is
///
/// This function is used to prevent the console window from closing
/// immediately after the program finishes when run from a file manager.
pub fn check_for_stdout_stream() {
    if atty::is(Stream::Stdout) {
        dont_disappear::enter_to_continue::default();
    }
}

fn directory_arg(help: &'static str) -> Arg {
    Arg::new("dir")
        .short('d')
        .long("dir")
        .help(help)
        .value_parser(value_parser!(PathBuf))
        .default_value(".")
}

fn number_arg(id: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(long)
        .help(help)
        .value_parser(value_parser!(u32))
}

fn text_arg(id: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(id).long(long).help(help)
}

fn copy_command() -> Command {
    Command::new("copy")
        .about("Copy the photos listed in a manifest into a keepers folder")
        .arg(
            Arg::new("manifest")
                .short('m')
                .long("manifest")
                .help("File with one photo number per line")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("source")
                .short('s')
                .long("source")
                .help("Folder holding the photos")
                .value_parser(value_parser!(PathBuf))
                .default_value("."),
        )
        .arg(
            Arg::new("dest")
                .long("dest")
                .help("Folder to copy the keepers into")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(text_arg(
            "prefix",
            "prefix",
            "Shared photo prefix, `.` for the source folder name",
        ))
}

fn rename_range_command() -> Command {
    Command::new("rename-range")
        .about("Rename a numeric range of photos to a new prefix and starting number")
        .arg(number_arg("first", "first", "First photo number to rename"))
        .arg(number_arg("last", "last", "Last photo number to rename"))
        .arg(number_arg(
            "start",
            "start",
            "Number the first renamed photo gets",
        ))
        .arg(text_arg("from", "from", "Current prefix of the photos"))
        .arg(text_arg("to", "to", "New prefix of the photos"))
        .arg(
            Arg::new("extension")
                .short('e')
                .long("extension")
                .help("Source extension to look for, in priority order (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(directory_arg("Folder holding the photos"))
}

fn rename_all_command() -> Command {
    Command::new("rename-all")
        .about("Rename every photo and video in a folder with increasing numbers")
        .arg(text_arg(
            "prefix",
            "prefix",
            "New prefix, `.` for the folder name",
        ))
        .arg(number_arg("start", "start", "Number the first photo gets"))
        .arg(
            Arg::new("order")
                .long("order")
                .help("Order in which photos are numbered")
                .value_parser(["name", "listing"]),
        )
        .arg(directory_arg("Folder holding the photos"))
}

fn generate_command() -> Command {
    Command::new("generate")
        .about("Create empty test photos with gaps in the numbering")
        .arg(text_arg("prefix", "prefix", "Prefix of the generated files"))
        .arg(number_arg(
            "count",
            "count",
            "Highest photo number to consider",
        ))
        .arg(directory_arg("Folder to create the files in"))
}

fn normalize_jpg_command() -> Command {
    Command::new("normalize-jpg")
        .about("Rename .JPG extensions to .jpg")
        .arg(directory_arg("Folder holding the photos"))
}

/// Builds the command-line interface
///
/// Defines the global options (`config`, `dry`, `verbose`, `log_file`,
/// `log_locally`, `no_pause`) and one subcommand per tool.
pub fn build_command() -> Command {
    // define arg for reading from a specific config file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP)
        .default_value(DEFAULT_CONFIG_PATH)
        .global(true);

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue)
        .global(true);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count)
        .global(true);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .default_value(LOG_FILE_DEFAULT)
        .global(true);

    // define arg for local logging
    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(ArgAction::SetTrue)
        .global(true);

    let no_pause = Arg::new("no_pause")
        .long("no-pause")
        .help(NO_PAUSE_HELP)
        .action(ArgAction::SetTrue)
        .global(true);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(arg_config)
        .arg(arg_dry)
        .arg(log_file)
        .arg(log_locally)
        .arg(no_pause)
        .arg(arg_verbose)
        .subcommand(copy_command())
        .subcommand(rename_range_command())
        .subcommand(rename_all_command())
        .subcommand(generate_command())
        .subcommand(normalize_jpg_command())
}

/// Parses the process arguments
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Gets the path of the log file, or an empty string when file logging is off
///
/// Unless `--log-locally` is set the file lives in the platform config directory.
pub fn get_log_file(matches: &ArgMatches) -> Result<String> {
    let filename = matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string());
    if filename.is_empty() || matches.get_flag("log_locally") {
        Ok(filename)
    } else {
        let folder = find_project_folder()?;
        let path = folder.config_dir().join(filename);
        let path_str = path.as_path().to_str().ok_or_else(|| {
            generic_error(&format!("Failed to convert path to string: {:?}", path))
        })?;
        Ok(path_str.to_string())
    }
}

/// Gets the configuration file path
pub fn get_config_path(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<String>("config")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

pub fn is_dry_run(matches: &ArgMatches) -> bool {
    matches.get_flag("dry")
}

pub fn should_pause(matches: &ArgMatches) -> bool {
    !matches.get_flag("no_pause")
}

/// Reads the `--order` value of a subcommand, if given
pub fn get_order(matches: &ArgMatches) -> Option<ListingOrder> {
    matches
        .get_one::<String>("order")
        .and_then(|order| order.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        build_command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let matches = build_command()
            .try_get_matches_from(["pcull", "rename-all", "-n", "-vv", "--order", "listing"])
            .unwrap();

        assert!(is_dry_run(&matches));
        assert_eq!(get_verbosity(&matches), LogLevel::Trace);

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "rename-all");
        assert_eq!(get_order(sub), Some(ListingOrder::Listing));
        assert_eq!(sub.get_one::<u32>("start"), None);
    }

    #[test]
    fn test_numbers_must_be_integers() {
        let result = build_command().try_get_matches_from([
            "pcull",
            "rename-range",
            "--first",
            "one",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_repeated_extensions_keep_order() {
        let matches = build_command()
            .try_get_matches_from(["pcull", "rename-range", "-e", ".NEF", "-e", ".JPG"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        let extensions: Vec<&String> = sub.get_many::<String>("extension").unwrap().collect();
        assert_eq!(extensions, vec![".NEF", ".JPG"]);
    }

    #[test]
    fn test_local_log_file_is_used_as_given() {
        let matches = build_command()
            .try_get_matches_from(["pcull", "normalize-jpg", "-L", "-l", "run.log"])
            .unwrap();
        assert_eq!(get_log_file(&matches).unwrap(), "run.log");

        let matches = build_command()
            .try_get_matches_from(["pcull", "normalize-jpg", "-l", ""])
            .unwrap();
        assert_eq!(get_log_file(&matches).unwrap(), "");
    }
}
