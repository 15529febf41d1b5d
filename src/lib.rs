pub use errors::*;

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod discovery;
mod errors;
pub mod logging;
pub mod manifest;
pub mod naming;
pub mod operations;
pub mod prompt;
pub mod utils;

pub mod prelude {
    pub use crate::cli::{get_log_file, get_verbosity};
    pub use crate::commands::run;
    pub use crate::config::{Settings, read_or_default};
    pub use crate::errors::{
        file_operation_error, generic_error, invalid_filename_error, invalid_number_error,
        invalid_range_error, manifest_parse_error, path_operation_error, rename_conflict_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::operations::{
        copy_selected, generate_fixtures, normalize_jpg_extensions, rename_all_in_directory,
        rename_range,
    };
}
