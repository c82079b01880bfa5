//! Directory scanner for enumerating candidate input files

use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collect every path under `root`, in traversal order.
///
/// Directories are included; the copier is the gate that rejects
/// non-regular sources. Any traversal error (permissions, broken link)
/// aborts the whole listing.
pub fn list_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root.as_ref()) {
        let entry = entry?;
        files.push(entry.into_path());
    }
    Ok(files)
}
