//! Configuration structs grouped by concern, loaded from the environment.

use super::env_keys::{observability as obv_keys, paths, run};
use super::loader::{env_bool, env_list, env_optional, env_or};
use std::path::PathBuf;

/// Skill folders packaged when nothing else is configured, in order.
pub const DEFAULT_SKILLS: &[&str] = &[
    "mne-core",
    "mne-connectivity",
    "mne-icalabel",
    "mne-microstates",
    "autoreject",
];

/// Output directory used when nothing else is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// What one packaging run processes and where it writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackConfig {
    /// Skill folder paths, relative to the current directory or absolute.
    pub skills: Vec<String>,
    pub output_dir: PathBuf,
    /// Exit non-zero when any skill fails.
    pub strict: bool,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            skills: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            strict: false,
        }
    }
}

impl PackConfig {
    /// Defaults overlaid with `SKILLPACK_*` variables (loads `.env` first).
    pub fn from_env() -> Self {
        super::loader::load_dotenv();
        let defaults = Self::default();
        Self {
            skills: env_list(paths::SKILLPACK_SKILLS, &[]).unwrap_or(defaults.skills),
            output_dir: env_optional(paths::SKILLPACK_OUTPUT_DIR, &[])
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            strict: env_bool(run::SKILLPACK_STRICT, &[], defaults.strict),
        }
    }

    pub fn with_skills(mut self, skills: Vec<String>) -> Self {
        if !skills.is_empty() {
            self.skills = skills;
        }
        self
    }

    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = self.strict || strict;
        self
    }
}

/// Workspace used for skill discovery.
#[derive(Debug, Clone)]
pub struct PathsConfig {
    pub workspace: PathBuf,
}

impl PathsConfig {
    pub fn from_env() -> Self {
        super::loader::load_dotenv();
        let workspace = env_optional(paths::SKILLPACK_WORKSPACE, &[])
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
        Self { workspace }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Only WARN and above.
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        super::loader::load_dotenv();
        Self {
            quiet: env_bool(obv_keys::SKILLPACK_QUIET, &[], false),
            log_level: env_or(obv_keys::SKILLPACK_LOG_LEVEL, &[], || {
                "skillpack=info".to_string()
            }),
            log_json: env_bool(obv_keys::SKILLPACK_LOG_JSON, &[], false),
        }
    }
}
