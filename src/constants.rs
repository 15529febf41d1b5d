/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// This is the name of the application used in configuration and log file paths.
pub const APPLICATION: &str = "photo_cull";

/// Extensions treated as photo or video media, matched case-sensitively
pub const RECOGNIZED_EXTENSIONS: [&str; 5] = [".JPG", ".NEF", ".jpg", ".MOV", ".CR2"];

/// Extensions tried, in priority order, when resolving a manifest number to a file
pub const COPY_CANDIDATE_EXTENSIONS: [&str; 3] = [".NEF", ".JPG", ".jpg"];

/// Source extension assumed by the range renamer unless configured otherwise
pub const DEFAULT_RANGE_EXTENSION: &str = ".JPG";

/// Width the sequence number is zero-padded to
pub const SEQUENCE_WIDTH: usize = 4;

/// Length of the random prefix used for staging names during renames
pub const STAGING_PREFIX_LENGTH: usize = 6;

/// Default manifest file listing keeper photo numbers
pub const DEFAULT_MANIFEST: &str = "good ones.txt";

/// Default folder keeper photos are copied into
pub const DEFAULT_DESTINATION: &str = "Good Ones";

/// Default number of fixture files the generator attempts
pub const DEFAULT_FIXTURE_COUNT: u32 = 500;

/// Prompt answer meaning "use the default" or "use the current directory name"
pub const CURRENT_MARKER: &str = ".";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read settings from a specific config file";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Show what would happen without touching any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Write a log file with this name (empty to disable)";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str =
    "Use the log file path as given instead of placing it in the config directory";

/// Help text for the no-pause command-line option
pub const NO_PAUSE_HELP: &str = "Exit immediately instead of waiting for Enter";

/// Default path for the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "photo_cull.yaml";

/// Default name of the log file
pub const LOG_FILE_DEFAULT: &str = "photo_cull.log";
