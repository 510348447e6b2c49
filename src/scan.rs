// ringlist/src/scan.rs

use log::debug;
use std::{
    fs,
    io::ErrorKind,
    path::Path,
};
use crate::{
    config::VALID_EXTENSIONS,
    error::{
        Result,
        ScanError
    }
};

/// True when the lowercased name ends with one of `VALID_EXTENSIONS`.
/// Plain suffix match: `.png` and `a.tar.png` both pass.
pub fn has_image_extension(name: &str) -> bool {
    let lower = name.to_lowercase();
    VALID_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// List the direct entries of `dir` whose names pass `has_image_extension`.
///
/// Order is whatever `read_dir` yields; nothing is sorted. Entries are not
/// checked for being regular files.
pub fn list_images(dir: &Path) -> Result<Vec<String>> {
    debug!("scanning {}", dir.display());
    let rd = fs::read_dir(dir).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ScanError::DirectoryNotFound(dir.to_path_buf()),
        _ => io_err(dir, e),
    })?;

    let mut files = Vec::new();
    for dent in rd {
        let dent = dent.map_err(|e| io_err(dir, e))?;
        let name = dent.file_name().into_string().map_err(|raw| ScanError::NonUtf8Name {
            dir: dir.to_path_buf(),
            name: raw.to_string_lossy().into_owned(),
        })?;

        if has_image_extension(&name) {
            files.push(name);
        } else {
            debug!("skip {name}");
        }
    }

    debug!("{} image(s) in {}", files.len(), dir.display());
    Ok(files)
}

/* ----------------------------- helpers ----------------------------- */

fn io_err(dir: &Path, source: std::io::Error) -> ScanError {
    ScanError::Io { path: dir.to_path_buf(), source }
}
