//! Skill folders: validation and workspace discovery.

pub mod discovery;
pub mod source;

pub use discovery::discover_skills_in_workspace;
pub use source::{validate_skill_dir, SkillSource, SKILL_MANIFEST};
