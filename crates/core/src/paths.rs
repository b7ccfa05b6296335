//! Destination path resolution for downloaded assets.
//!
//! Catalog filenames are relative paths that may contain subdirectories.
//! The batch loop joins them onto the configured output root; a filename
//! must never escape that root.

use std::path::{Component, Path, PathBuf};

use crate::error::CoreError;

/// Resolve the destination path for a catalog filename.
///
/// Rejects absolute filenames and any path containing a `..` component,
/// then joins the filename onto `output_root`.
pub fn resolve_destination(output_root: &Path, filename: &str) -> Result<PathBuf, CoreError> {
    let relative = Path::new(filename);
    if relative.is_absolute() {
        return Err(CoreError::UnsafePath(relative.to_path_buf()));
    }
    for component in relative.components() {
        match component {
            Component::Normal(_) => {}
            _ => return Err(CoreError::UnsafePath(relative.to_path_buf())),
        }
    }
    Ok(output_root.join(relative))
}
