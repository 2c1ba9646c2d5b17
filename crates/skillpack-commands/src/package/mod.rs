//! `skillpack pack`: bundle skill folders into `<name>.skill` archives.
//!
//! Each skill is validated, then archived, then reported, strictly one at a
//! time. A failure for one skill is recorded and the run moves on.

mod archive;
mod report;

pub use archive::write_skill_archive;
pub use report::{FailedSkill, PackSummary, PackedSkill};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use skillpack_core::config::PackConfig;
use skillpack_core::error::PackageError;
use skillpack_core::path_validation::resolve_path;
use skillpack_core::skill::{validate_skill_dir, SkillSource};

use report::Reporter;

/// Extension of produced archives.
pub const SKILL_ARCHIVE_EXTENSION: &str = "skill";

/// Package one skill folder into `output_dir/<folder name>.skill`.
///
/// Validation runs before anything is created, so a rejected skill never
/// touches the output directory or an archive left by a previous run.
pub fn package_skill(
    skill_path: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
) -> Result<PathBuf, PackageError> {
    package_with_progress(skill_path.as_ref(), output_dir.as_ref(), |_| Ok(()))
        .map(|(archive, _)| archive)
}

fn package_with_progress<F>(
    skill_path: &Path,
    output_dir: &Path,
    on_start: F,
) -> Result<(PathBuf, usize), PackageError>
where
    F: FnOnce(&SkillSource) -> std::io::Result<()>,
{
    let source = validate_skill_dir(skill_path)?;
    let output_file = prepare_output(&source, output_dir)?;
    on_start(&source).map_err(|e| PackageError::write(&output_file, e))?;
    let entries = write_skill_archive(&source, &output_file)?;
    Ok((output_file, entries))
}

/// Create the output directory (idempotent) and return the archive path in it.
fn prepare_output(source: &SkillSource, output_dir: &Path) -> Result<PathBuf, PackageError> {
    fs::create_dir_all(output_dir).map_err(|e| PackageError::write(output_dir, e))?;
    Ok(resolve_path(output_dir).join(source.archive_file_name(SKILL_ARCHIVE_EXTENSION)))
}

/// Package every configured skill in order, writing the progress report to `out`.
///
/// Only failures writing the report itself are returned as errors; per-skill
/// failures are counted in the summary.
pub fn run_packaging(config: &PackConfig, out: &mut dyn Write) -> Result<PackSummary> {
    let mut reporter = Reporter::new(out);
    let mut summary = PackSummary::default();
    reporter.start().context("Failed to write report")?;

    for skill in &config.skills {
        let result = package_with_progress(Path::new(skill), &config.output_dir, |source| {
            reporter.packaging(&source.name)
        });
        match result {
            Ok((archive, entries)) => {
                tracing::info!(skill = %skill, archive = %archive.display(), entries, "Created skill archive");
                reporter.created(&archive).context("Failed to write report")?;
                summary.record_success(skill, archive, entries);
            }
            Err(err) => {
                tracing::warn!(skill = %skill, kind = err.kind(), "Skipped skill: {}", err);
                reporter.failed(&err).context("Failed to write report")?;
                summary.record_failure(skill, &err);
            }
        }
        reporter.end_skill().context("Failed to write report")?;
    }

    reporter.finish(&summary).context("Failed to write report")?;
    Ok(summary)
}

/// `skillpack pack` entry: report to stdout, optional JSON summary, strict exit.
pub fn cmd_pack(config: &PackConfig, json_output: bool) -> Result<PackSummary> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    let summary = run_packaging(config, &mut lock)?;
    if json_output {
        writeln!(lock, "{}", serde_json::to_string_pretty(&summary)?)?;
    }
    if config.strict && !summary.all_succeeded() {
        anyhow::bail!(
            "{} of {} skills failed to package",
            summary.total - summary.successes(),
            summary.total
        );
    }
    Ok(summary)
}
