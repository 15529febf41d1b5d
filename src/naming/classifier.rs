//! Media file classification

use crate::constants::RECOGNIZED_EXTENSIONS;

use super::codec::extract_extension;

/// Returns true when the filename carries one of the recognized media extensions
///
/// The comparison is exact and case-sensitive: `.MOV` is media, `.mov` is not.
pub fn is_recognized_media(file_name: &str) -> bool {
    RECOGNIZED_EXTENSIONS.contains(&extract_extension(file_name))
}
