use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

/// Custom error type for the Photo Cull application
#[derive(Debug)]
pub enum Error {
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error related to path operations
    PathOperation { path: PathBuf, operation: String },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Error when a prompt answer or argument is not an integer
    InvalidNumber {
        source: ParseIntError,
        field: String,
        input: String,
    },
    /// Error when a manifest line is not an integer
    ManifestParse {
        path: PathBuf,
        line_number: usize,
        content: String,
    },
    /// Error when the first number of a range is greater than the last
    InvalidRange { first: u32, last: u32 },
    /// Error when a rename target is already taken by a file outside the plan
    RenameConflict { source: PathBuf, target: PathBuf },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileOperation {
                source,
                path,
                operation,
            } => {
                write!(
                    f,
                    "Failed to {} file: {} ({source})",
                    operation,
                    path.display()
                )
            }
            Error::PathOperation { path, operation } => {
                write!(f, "Failed to {} path: {}", operation, path.display())
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::InvalidNumber { field, input, .. } => {
                write!(f, "Expected a whole number for {field}, got '{input}'")
            }
            Error::ManifestParse {
                path,
                line_number,
                content,
            } => {
                write!(
                    f,
                    "Line {} of {} is not a photo number: '{}'",
                    line_number,
                    path.display(),
                    content
                )
            }
            Error::InvalidRange { first, last } => {
                write!(
                    f,
                    "First photo number {first} is greater than last photo number {last}"
                )
            }
            Error::RenameConflict { source, target } => {
                write!(
                    f,
                    "Cannot rename {} to {}: target already exists",
                    source.display(),
                    target.display()
                )
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::InvalidNumber { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "perform operation on".to_string(),
        }
    }
}

/// Custom Result type for the Photo Cull application
///
/// # Examples
/// ```
/// use photo_cull::prelude::{Result, generic_error};
///
/// fn example_function() -> Result<String> {
///     // Return success
///     Ok("success".to_string())
///
///     // Or return an error
///     // Err(generic_error("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a path operation error
pub fn path_operation_error(path: PathBuf, operation: &str) -> Error {
    Error::PathOperation {
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create an invalid number error
pub fn invalid_number_error(err: ParseIntError, field: &str, input: &str) -> Error {
    Error::InvalidNumber {
        source: err,
        field: field.to_string(),
        input: input.to_string(),
    }
}

/// Helper function to create a manifest parse error
pub fn manifest_parse_error(path: PathBuf, line_number: usize, content: &str) -> Error {
    Error::ManifestParse {
        path,
        line_number,
        content: content.to_string(),
    }
}

/// Helper function to create an invalid range error
pub fn invalid_range_error(first: u32, last: u32) -> Error {
    Error::InvalidRange { first, last }
}

/// Helper function to create a rename conflict error
pub fn rename_conflict_error(source: PathBuf, target: PathBuf) -> Error {
    Error::RenameConflict { source, target }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_operation_error() {
        let path = PathBuf::from("/test/path");
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = file_operation_error(io_error, path.clone(), "read");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("read"),
            "Error message should contain the operation"
        );
        assert!(
            error_string.contains("/test/path"),
            "Error message should contain the path"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_path_operation_error() {
        let path = PathBuf::from("/test/path");
        let error = path_operation_error(path.clone(), "get filename of");

        let error_string = format!("{error}");
        assert!(error_string.contains("get filename of"));
        assert!(error_string.contains("/test/path"));
    }

    #[test]
    fn test_invalid_number_error() {
        let parse_error = "abc".parse::<u32>().unwrap_err();
        let error = invalid_number_error(parse_error, "first photo number", "abc");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("first photo number"),
            "Error message should name the field"
        );
        assert!(
            error_string.contains("'abc'"),
            "Error message should echo the input"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_manifest_parse_error() {
        let error = manifest_parse_error(PathBuf::from("good ones.txt"), 4, "12a");

        let error_string = format!("{error}");
        assert!(error_string.contains("Line 4"));
        assert!(error_string.contains("good ones.txt"));
        assert!(error_string.contains("'12a'"));
    }

    #[test]
    fn test_invalid_range_error() {
        let error = invalid_range_error(9, 3);
        assert_eq!(
            format!("{error}"),
            "First photo number 9 is greater than last photo number 3"
        );
    }

    #[test]
    fn test_rename_conflict_error() {
        let error = rename_conflict_error(
            PathBuf::from("DSC_0001.JPG"),
            PathBuf::from("OUT_0001.JPG"),
        );

        let error_string = format!("{error}");
        assert!(error_string.contains("DSC_0001.JPG"));
        assert!(error_string.contains("OUT_0001.JPG"));
    }

    #[test]
    fn test_generic_error() {
        let error = generic_error("Something went wrong");
        assert_eq!(format!("{error}"), "Something went wrong");
    }

    #[test]
    fn test_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();

        let error_string = format!("{error}");
        assert!(
            error_string.contains("Failed to perform operation on file"),
            "Error message should contain the underlying error"
        );
    }
}
