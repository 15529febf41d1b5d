use std::fs::create_dir_all;
use std::path::Path;

use directories::ProjectDirs;
use shellexpand::tilde;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{Result, generic_error, invalid_filename_error, path_operation_error};

/// Expands a leading `~` to the home directory
pub fn expand_path(path: &str) -> String {
    tilde(path).to_string()
}

/// Returns the name of a directory, resolving `.` and relative paths first
///
/// Used for the "type `.` to use the folder name" prompt answers.
pub fn directory_name(directory: &Path) -> Result<String> {
    let absolute = directory
        .canonicalize()
        .map_err(|_| path_operation_error(directory.to_path_buf(), "resolve"))?;

    absolute
        .file_name()
        .ok_or_else(|| path_operation_error(absolute.clone(), "get folder name of"))?
        .to_str()
        .map(str::to_string)
        .ok_or_else(|| invalid_filename_error(absolute.clone()))
}

pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir())?;
    }
    Ok(folder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::create_dir;
    use tempfile::tempdir;

    #[test]
    fn test_directory_name() {
        let temp_dir = tempdir().unwrap();
        let shoot = temp_dir.path().join("Iceland 2024");
        create_dir(&shoot).unwrap();

        assert_eq!(directory_name(&shoot).unwrap(), "Iceland 2024");
        assert_eq!(directory_name(&shoot.join(".")).unwrap(), "Iceland 2024");
    }

    #[test]
    fn test_directory_name_of_missing_directory() {
        let temp_dir = tempdir().unwrap();
        assert!(directory_name(&temp_dir.path().join("absent")).is_err());
    }

    #[test]
    fn test_expand_path_without_tilde() {
        assert_eq!(expand_path("photos/keep"), "photos/keep");
    }
}
