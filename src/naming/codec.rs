//! Filename construction and extension extraction
//!
//! Every function here is pure: no filesystem access, no hidden state.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::SEQUENCE_WIDTH;

static EXTENSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\.\w+$").expect("Failed to compile regex pattern for EXTENSION_PATTERN")
});

static PHOTO_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?<prefix>.+)_(?<sequence>\d+)(?<extension>\.\w+)$")
        .expect("Failed to compile regex pattern for PHOTO_NAME_PATTERN")
});

/// The parts of a `<prefix>_<sequence><extension>` filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoName {
    pub prefix: String,
    pub sequence: u32,
    pub extension: String,
}

/// Builds a canonical photo filename
///
/// The sequence number is zero-padded up to four digits and printed at its
/// natural length beyond that, so `7` becomes `0007` and `12345` stays `12345`.
///
/// # Examples
/// ```
/// use photo_cull::naming::build_file_name;
///
/// assert_eq!(build_file_name("DSC", 7, ".JPG"), "DSC_0007.JPG");
/// assert_eq!(build_file_name("DSC", 12345, ".NEF"), "DSC_12345.NEF");
/// ```
pub fn build_file_name(prefix: &str, sequence: u32, extension: &str) -> String {
    format!("{prefix}_{sequence:0width$}{extension}", width = SEQUENCE_WIDTH)
}

/// Returns the trailing `.` plus word characters of a filename, or `""`
///
/// # Examples
/// ```
/// use photo_cull::naming::extract_extension;
///
/// assert_eq!(extract_extension("DSC_0001.NEF"), ".NEF");
/// assert_eq!(extract_extension("archive.tar.gz"), ".gz");
/// assert_eq!(extract_extension("README"), "");
/// ```
pub fn extract_extension(file_name: &str) -> &str {
    EXTENSION_PATTERN
        .find(file_name)
        .map_or("", |found| found.as_str())
}

/// Builds the new name for a file, keeping its original extension
pub fn derive_new_file_name(original_file_name: &str, new_prefix: &str, sequence: u32) -> String {
    build_file_name(new_prefix, sequence, extract_extension(original_file_name))
}

/// Splits a photo filename into prefix, sequence number and extension
///
/// Returns `None` when the name does not follow the `<prefix>_<digits><extension>`
/// shape or the number does not fit in a `u32`.
pub fn parse_sequence(file_name: &str) -> Option<PhotoName> {
    let captures = PHOTO_NAME_PATTERN.captures(file_name)?;
    let sequence = captures.name("sequence")?.as_str().parse::<u32>().ok()?;
    Some(PhotoName {
        prefix: captures.name("prefix")?.as_str().to_string(),
        sequence,
        extension: captures.name("extension")?.as_str().to_string(),
    })
}

/// Identifier reported for a photo number with no matching file
pub fn missing_identifier(prefix: &str, sequence: u32) -> String {
    format!("{prefix}_{sequence}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_file_name_padding_boundaries() {
        assert_eq!(build_file_name("DSC", 1, ".JPG"), "DSC_0001.JPG");
        assert_eq!(build_file_name("DSC", 9, ".JPG"), "DSC_0009.JPG");
        assert_eq!(build_file_name("DSC", 10, ".JPG"), "DSC_0010.JPG");
        assert_eq!(build_file_name("DSC", 99, ".JPG"), "DSC_0099.JPG");
        assert_eq!(build_file_name("DSC", 100, ".JPG"), "DSC_0100.JPG");
        assert_eq!(build_file_name("DSC", 999, ".JPG"), "DSC_0999.JPG");
        assert_eq!(build_file_name("DSC", 1000, ".JPG"), "DSC_1000.JPG");
        assert_eq!(build_file_name("DSC", 9999, ".JPG"), "DSC_9999.JPG");
        assert_eq!(build_file_name("DSC", 10000, ".JPG"), "DSC_10000.JPG");
    }

    #[test]
    fn test_build_file_name_numeric_field_width() {
        for sequence in [1, 5, 42, 512, 1000, 4321, 9999] {
            let name = build_file_name("P", sequence, ".NEF");
            assert!(name.ends_with(".NEF"));
            let numeric = &name["P_".len()..name.len() - ".NEF".len()];
            assert_eq!(numeric.len(), 4, "numeric field of {name}");
        }
    }

    #[test]
    fn test_build_file_name_keeps_prefix_verbatim() {
        assert_eq!(build_file_name("", 3, ".jpg"), "_0003.jpg");
        assert_eq!(
            build_file_name("Trip_2024", 3, ".CR2"),
            "Trip_2024_0003.CR2"
        );
        assert_eq!(build_file_name("DSC", 3, ""), "DSC_0003");
    }

    #[test]
    fn test_extract_extension() {
        assert_eq!(extract_extension("DSC_0001.JPG"), ".JPG");
        assert_eq!(extract_extension("DSC_0001.jpeg"), ".jpeg");
        assert_eq!(extract_extension("photo.backup.NEF"), ".NEF");
        assert_eq!(extract_extension("snake_case.my_ext"), ".my_ext");
        assert_eq!(extract_extension("no_extension"), "");
        assert_eq!(extract_extension("trailing."), "");
        assert_eq!(extract_extension("dash.j-pg"), "");
        assert_eq!(extract_extension(""), "");
    }

    #[test]
    fn test_extract_extension_of_built_name() {
        for extension in [".JPG", ".NEF", ".jpg", ".MOV", ".CR2", ".x_1"] {
            let name = build_file_name("A", 17, extension);
            assert_eq!(extract_extension(&name), extension);
        }
    }

    #[test]
    fn test_derive_new_file_name() {
        assert_eq!(derive_new_file_name("IMG_4411.MOV", "B", 2), "B_0002.MOV");
        assert_eq!(derive_new_file_name("notes", "B", 2), "B_0002");

        let first = derive_new_file_name("DSC_0001.NEF", "Trip", 12);
        let second = derive_new_file_name("DSC_0001.NEF", "Trip", 12);
        assert_eq!(first, second);
        assert_eq!(first, "Trip_0012.NEF");
    }

    #[test]
    fn test_parse_sequence() {
        assert_eq!(
            parse_sequence("Trip_2024_0031.NEF"),
            Some(PhotoName {
                prefix: "Trip_2024".to_string(),
                sequence: 31,
                extension: ".NEF".to_string(),
            })
        );
        assert_eq!(parse_sequence("DSC_12345.JPG").map(|p| p.sequence), Some(12345));
        assert_eq!(parse_sequence("DSC0001.JPG"), None);
        assert_eq!(parse_sequence("DSC_0001"), None);
        assert_eq!(parse_sequence("DSC_99999999999.JPG"), None);
    }

    #[test]
    fn test_missing_identifier_is_unpadded() {
        assert_eq!(missing_identifier("PREFIX", 3), "PREFIX_3");
    }
}
