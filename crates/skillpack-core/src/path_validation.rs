//! Path resolution.
//!
//! Relative inputs are interpreted against the current directory.

use std::path::{Path, PathBuf};

/// Canonical absolute path when `path` exists, otherwise the absolute path
/// joined onto the current directory.
pub fn resolve_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    }
}
