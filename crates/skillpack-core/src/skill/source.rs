//! A validated skill folder, ready to be archived.

use std::path::{Path, PathBuf};

use crate::error::PackageError;
use crate::path_validation::resolve_path;

/// Manifest whose presence marks a folder as a skill.
pub const SKILL_MANIFEST: &str = "SKILL.md";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillSource {
    /// Final path component of `root`; names the archive.
    pub name: String,
    /// Canonical absolute folder path.
    pub root: PathBuf,
}

impl SkillSource {
    pub fn archive_file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.name, extension)
    }
}

/// Resolve `skill_path` and check, in order, that it is a directory and that
/// `SKILL.md` sits directly inside it.
pub fn validate_skill_dir(skill_path: impl AsRef<Path>) -> Result<SkillSource, PackageError> {
    let root = resolve_path(skill_path);
    if !root.is_dir() {
        return Err(PackageError::NotFound { path: root });
    }
    if !root.join(SKILL_MANIFEST).is_file() {
        return Err(PackageError::MissingManifest { path: root });
    }
    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| PackageError::NotFound { path: root.clone() })?;
    Ok(SkillSource { name, root })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_valid_skill() {
        let tmp = tempfile::tempdir().unwrap();
        let skill = tmp.path().join("autoreject");
        fs::create_dir(&skill).unwrap();
        fs::write(skill.join("SKILL.md"), "# autoreject\n").unwrap();

        let src = validate_skill_dir(&skill).unwrap();
        assert_eq!(src.name, "autoreject");
        assert_eq!(src.root, skill.canonicalize().unwrap());
        assert_eq!(src.archive_file_name("skill"), "autoreject.skill");
    }

    #[test]
    fn test_missing_folder() {
        let tmp = tempfile::tempdir().unwrap();
        let err = validate_skill_dir(tmp.path().join("mne-core")).unwrap_err();
        match err {
            PackageError::NotFound { path } => assert!(path.ends_with("mne-core")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_file_instead_of_folder() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("mne-core");
        fs::write(&file, "not a dir").unwrap();
        assert!(matches!(
            validate_skill_dir(&file),
            Err(PackageError::NotFound { .. })
        ));
    }

    #[test]
    fn test_manifest_must_be_direct_child() {
        let tmp = tempfile::tempdir().unwrap();
        let skill = tmp.path().join("mne-icalabel");
        fs::create_dir_all(skill.join("docs")).unwrap();
        fs::write(skill.join("docs").join("SKILL.md"), "nested").unwrap();
        assert!(matches!(
            validate_skill_dir(&skill),
            Err(PackageError::MissingManifest { .. })
        ));
    }
}
