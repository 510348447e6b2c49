// ringlist/src/config.rs
//! Hardcoded inputs for the snippet generator.

/// Folder scanned for images, relative to the working directory.
pub const IMAGE_DIR: &str = "images";

/// Suffixes (lowercase, with dot) an entry name must end with.
pub const VALID_EXTENSIONS: [&str; 4] = [".png", ".jpg", ".jpeg", ".webp"];

/// JS variable the generated list is assigned to.
pub const LIST_VAR_NAME: &str = "ringImageFiles";

/// Prepended to every filename in the list.
pub const PATH_PREFIX: &str = "images/";

pub const BANNER_START: &str = "--- COPY THE CODE BELOW ---";
pub const BANNER_END: &str = "---------------------------";
