//! Find skill folders (containing SKILL.md) among a workspace's direct children.

use std::fs;
use std::path::{Path, PathBuf};

use super::source::SKILL_MANIFEST;

/// Direct child directories of `workspace` that contain `SKILL.md`, sorted by name.
pub fn discover_skills_in_workspace(workspace: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(workspace) else {
        return Vec::new();
    };
    let mut children: Vec<_> = entries.flatten().collect();
    children.sort_by_key(|e| e.file_name());
    children
        .into_iter()
        .map(|e| e.path())
        .filter(|p| p.is_dir() && p.join(SKILL_MANIFEST).is_file())
        .collect()
}
