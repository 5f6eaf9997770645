//! Finds AST documents on disk.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{err_msg, Result};

/// Extension of AST documents.
pub const DOCUMENT_EXTENSION: &str = "json";

/// Lists the documents under `root`.
///
/// A file is returned as-is whatever its extension; a directory is scanned
/// recursively for `.json` files. The list is sorted so runs are deterministic.
pub fn discover_documents<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| {
            err_msg!(Io, "failed to walk '{}': {}", root.display(), e)
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !is_document(path) {
            continue;
        }

        files.push(path.to_path_buf());
    }
    files.sort();
    Ok(files)
}

fn is_document(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION))
}
