//! `skillpack list` — show the entries stored in a `.skill` archive.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub size: u64,
    pub compressed_size: u64,
    pub method: String,
}

/// Read the central directory of `path`. Directory entries are skipped.
pub fn list_archive(path: &Path) -> Result<Vec<ArchiveEntry>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open archive: {}", path.display()))?;
    let mut archive = zip::ZipArchive::new(file)
        .with_context(|| format!("Invalid skill archive: {}", path.display()))?;

    let mut entries = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let file = archive.by_index(i).context("Failed to read zip entry")?;
        if file.is_dir() {
            continue;
        }
        entries.push(ArchiveEntry {
            name: file.name().to_string(),
            size: file.size(),
            compressed_size: file.compressed_size(),
            method: format!("{:?}", file.compression()),
        });
    }
    Ok(entries)
}

/// `skillpack list <ARCHIVE>`
pub fn cmd_list(archive: &str, json_output: bool) -> Result<()> {
    let path = Path::new(archive);
    let entries = list_archive(path)?;

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "archive": path.to_string_lossy(),
                "entries": entries,
            }))?
        );
        return Ok(());
    }

    println!("{}", path.display());
    for entry in &entries {
        println!(
            "  {:>10}  {:>10}  {:<8}  {}",
            entry.size, entry.compressed_size, entry.method, entry.name
        );
    }
    println!("{} file(s)", entries.len());
    Ok(())
}
