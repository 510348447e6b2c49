// ringlist/src/error.rs

use std::{io, path::PathBuf};
use thiserror::Error;

/// Failures while listing the image folder.
///
/// Only `DirectoryNotFound` is recovered from; the rest are fatal.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("The folder '{}' was not found.", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("reading {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("non-utf8 file name in {}: {name}", .dir.display())]
    NonUtf8Name { dir: PathBuf, name: String },
}

pub type Result<T> = std::result::Result<T, ScanError>;
