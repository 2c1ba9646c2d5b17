//! Run summary and the human-readable progress report.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use skillpack_core::error::PackageError;

#[derive(Debug, Clone, Serialize)]
pub struct PackedSkill {
    pub skill: String,
    pub archive: PathBuf,
    pub entries: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FailedSkill {
    pub skill: String,
    pub kind: &'static str,
    pub message: String,
}

/// Outcome of one packaging run. Transient: printed, never persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PackSummary {
    pub total: usize,
    pub packaged: Vec<PackedSkill>,
    pub failed: Vec<FailedSkill>,
}

impl PackSummary {
    pub fn successes(&self) -> usize {
        self.packaged.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty() && self.successes() == self.total
    }

    pub(crate) fn record_success(&mut self, skill: &str, archive: PathBuf, entries: usize) {
        self.total += 1;
        self.packaged.push(PackedSkill {
            skill: skill.to_string(),
            archive,
            entries,
        });
    }

    pub(crate) fn record_failure(&mut self, skill: &str, err: &PackageError) {
        self.total += 1;
        self.failed.push(FailedSkill {
            skill: skill.to_string(),
            kind: err.kind(),
            message: err.to_string(),
        });
    }

    pub fn summary_line(&self) -> String {
        format!(
            "Packaging complete: {}/{} skills packaged successfully",
            self.successes(),
            self.total
        )
    }
}

/// Writes progress lines to stdout (or any writer, for tests).
pub(crate) struct Reporter<'a> {
    out: &'a mut dyn Write,
}

impl<'a> Reporter<'a> {
    pub(crate) fn new(out: &'a mut dyn Write) -> Self {
        Self { out }
    }

    pub(crate) fn start(&mut self) -> io::Result<()> {
        writeln!(self.out, "Starting skill packaging...")?;
        writeln!(self.out)
    }

    pub(crate) fn packaging(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "Packaging {}...", name)
    }

    pub(crate) fn created(&mut self, archive: &Path) -> io::Result<()> {
        writeln!(self.out, "Created: {}", archive.display())
    }

    pub(crate) fn failed(&mut self, err: &PackageError) -> io::Result<()> {
        writeln!(self.out, "Error: {}", err)
    }

    pub(crate) fn end_skill(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub(crate) fn finish(&mut self, summary: &PackSummary) -> io::Result<()> {
        writeln!(self.out, "{}", summary.summary_line())?;
        self.out.flush()
    }
}
