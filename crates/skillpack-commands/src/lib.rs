//! skillpack commands: package skill folders into `.skill` archives, list archives.

pub mod list;
pub mod package;

pub use list::{cmd_list, list_archive, ArchiveEntry};
pub use package::{
    cmd_pack, package_skill, run_packaging, write_skill_archive, FailedSkill, PackSummary,
    PackedSkill, SKILL_ARCHIVE_EXTENSION,
};
