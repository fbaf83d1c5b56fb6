//! Sorted enumeration of image files within a source directory

use crate::io::configuration::IMAGE_EXTENSIONS;
use crate::io::error::{DatasetError, Result};
use std::path::{Path, PathBuf};

fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let lowered = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&lowered.as_str())
        })
}

/// Enumerate the image files in a directory, sorted lexicographically
///
/// The sorted order is the dataset's index space: reordering or renaming
/// files in the directory changes sample identity. Non-image entries and
/// subdirectories are skipped.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| DatasetError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read directory",
        source: e,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DatasetError::FileSystem {
            path: dir.to_path_buf(),
            operation: "read directory entry",
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() && is_image_file(&path) {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

/// The filename of a sample without its extension
///
/// Used as the sample's stable identifier in the output record.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
