//! Keeper manifest reading
//!
//! A manifest is a plain text file with one photo number per line. Files saved
//! by Windows editors often carry a byte order mark or are UTF-16, so the raw
//! bytes are decoded with BOM sniffing before parsing.

use std::fs;
use std::path::Path;

use encoding_rs::UTF_8;
use log::{debug, warn};

use crate::errors::{Result, file_operation_error, manifest_parse_error};

/// Parses manifest text into photo numbers, in file order
///
/// Lines are trimmed and blank lines skipped. Any other line that is not a
/// whole number fails the whole read.
pub fn parse_manifest(text: &str, origin: &Path) -> Result<Vec<u32>> {
    let mut numbers = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let number = trimmed
            .parse::<u32>()
            .map_err(|_| manifest_parse_error(origin.to_path_buf(), index + 1, trimmed))?;
        numbers.push(number);
    }
    Ok(numbers)
}

/// Reads and parses a manifest file
///
/// # Errors
/// * Returns an error if the file cannot be read
/// * Returns an error if a non-blank line is not a whole number
pub fn read_manifest(path: &Path) -> Result<Vec<u32>> {
    let bytes =
        fs::read(path).map_err(|e| file_operation_error(e, path.to_path_buf(), "read manifest"))?;

    let (text, encoding, had_errors) = UTF_8.decode(&bytes);
    if had_errors {
        warn!(
            "Manifest {} contains bytes that are not valid {}",
            path.display(),
            encoding.name()
        );
    }

    let numbers = parse_manifest(&text, path)?;
    debug!(
        "Read {} photo numbers from {} ({})",
        numbers.len(),
        path.display(),
        encoding.name()
    );
    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use tempfile::tempdir;

    #[test]
    fn test_parse_manifest_keeps_order_and_duplicates() {
        let numbers = parse_manifest("5\n7\n5\n", Path::new("m.txt")).unwrap();
        assert_eq!(numbers, vec![5, 7, 5]);
    }

    #[test]
    fn test_parse_manifest_tolerates_whitespace_and_blank_lines() {
        let numbers = parse_manifest("  12 \r\n\n\t3\n\n\n", Path::new("m.txt")).unwrap();
        assert_eq!(numbers, vec![12, 3]);
    }

    #[test]
    fn test_parse_manifest_rejects_non_numbers() {
        let error = parse_manifest("1\n2\nthree\n4\n", Path::new("m.txt")).unwrap_err();
        match error {
            Error::ManifestParse {
                line_number,
                content,
                ..
            } => {
                assert_eq!(line_number, 3);
                assert_eq!(content, "three");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_manifest_rejects_negative_numbers() {
        assert!(parse_manifest("-4\n", Path::new("m.txt")).is_err());
    }

    #[test]
    fn test_read_manifest_with_utf8_bom() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("good ones.txt");
        fs::write(&path, b"\xEF\xBB\xBF10\n11\n").unwrap();

        assert_eq!(read_manifest(&path).unwrap(), vec![10, 11]);
    }

    #[test]
    fn test_read_manifest_utf16_with_bom() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("good ones.txt");
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "4\r\n8\r\n".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        fs::write(&path, bytes).unwrap();

        assert_eq!(read_manifest(&path).unwrap(), vec![4, 8]);
    }

    #[test]
    fn test_read_missing_manifest_fails() {
        let temp_dir = tempdir().unwrap();
        let error = read_manifest(&temp_dir.path().join("absent.txt")).unwrap_err();
        assert!(format!("{error}").contains("read manifest"));
    }
}
