//! Per-skill packaging failures.

use std::path::PathBuf;

use thiserror::Error;

/// Why a single skill was not packaged. None of these abort the run.
#[derive(Debug, Error)]
pub enum PackageError {
    /// The skill path does not exist or is not a directory.
    #[error("Skill folder not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The folder exists but has no `SKILL.md` at its top level.
    #[error("SKILL.md not found in {}", path.display())]
    MissingManifest { path: PathBuf },

    /// Creating the output directory or writing the archive failed.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

impl PackageError {
    pub fn write(path: impl Into<PathBuf>, source: impl Into<zip::result::ZipError>) -> Self {
        Self::Write {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Stable label for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::MissingManifest { .. } => "MISSING_MANIFEST",
            Self::Write { .. } => "WRITE_ERROR",
        }
    }
}
