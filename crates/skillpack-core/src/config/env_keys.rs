//! Environment variable keys.
//!
//! Primary keys use the `SKILLPACK_*` prefix.

/// Packaging inputs and outputs
pub mod paths {
    pub const SKILLPACK_OUTPUT_DIR: &str = "SKILLPACK_OUTPUT_DIR";

    /// Comma separated list of skill folders to package.
    pub const SKILLPACK_SKILLS: &str = "SKILLPACK_SKILLS";

    pub const SKILLPACK_WORKSPACE: &str = "SKILLPACK_WORKSPACE";
}

/// Run behavior
pub mod run {
    /// Exit non-zero when any skill fails to package.
    pub const SKILLPACK_STRICT: &str = "SKILLPACK_STRICT";
}

/// Logging
pub mod observability {
    pub const SKILLPACK_QUIET: &str = "SKILLPACK_QUIET";
    pub const SKILLPACK_LOG_LEVEL: &str = "SKILLPACK_LOG_LEVEL";
    pub const SKILLPACK_LOG_JSON: &str = "SKILLPACK_LOG_JSON";
}
