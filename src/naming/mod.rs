//! Photo naming module
//!
//! This module contains the pure functions that build and take apart
//! `<prefix>_<sequence><extension>` filenames, and the classifier that decides
//! which files count as photo or video media.

mod classifier;
mod codec;

pub use classifier::is_recognized_media;
pub use codec::{
    PhotoName, build_file_name, derive_new_file_name, extract_extension, missing_identifier,
    parse_sequence,
};
