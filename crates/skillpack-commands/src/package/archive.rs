//! Deflate zip writer for a validated skill folder.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use skillpack_core::error::PackageError;
use skillpack_core::skill::SkillSource;
use walkdir::WalkDir;
use zip::result::ZipResult;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Create (or truncate) `output_file` and store every regular file under the
/// skill root, keyed by its `/`-separated path relative to the root.
///
/// Symlinks, directories and other non-regular entries are skipped, as are files
/// whose relative path is not valid UTF-8. Entries are written in file-name
/// order so repeated runs produce the same layout. If writing fails after the
/// archive was created, the partial archive is removed. Returns the number of
/// entries.
pub fn write_skill_archive(source: &SkillSource, output_file: &Path) -> Result<usize, PackageError> {
    let file = File::create(output_file).map_err(|e| PackageError::write(output_file, e))?;
    let result = write_entries(source, file, output_file);
    if result.is_err() {
        let _ = fs::remove_file(output_file);
    }
    result.map_err(|e| PackageError::write(output_file, e))
}

fn write_entries(source: &SkillSource, file: File, output_file: &Path) -> ZipResult<usize> {
    let mut zip = ZipWriter::new(file);
    let base = FileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut count = 0;

    for entry in WalkDir::new(&source.root)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() || entry.path() == output_file {
            continue;
        }
        let Some(name) = archive_entry_name(&source.root, entry.path()) else {
            tracing::warn!(
                skill = %source.name,
                path = %entry.path().display(),
                "Skipped file with a non UTF-8 name"
            );
            continue;
        };

        let meta = entry.metadata().map_err(io::Error::from)?;
        zip.start_file(name.as_str(), entry_options(base, &meta))?;
        let mut input = File::open(entry.path())?;
        io::copy(&mut input, &mut zip)?;
        tracing::debug!(skill = %source.name, entry = %name, "Archived file");
        count += 1;
    }

    zip.finish()?;
    Ok(count)
}

/// Relative path of `path` under `root`, joined with `/` regardless of platform.
/// `None` when `path` is not below `root` or a component is not valid UTF-8.
pub(crate) fn archive_entry_name(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts = rel
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<&str>>>()?;
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// Entries at or above 4 GiB need the Zip64 extension.
fn needs_large_file(len: u64) -> bool {
    len >= u32::MAX as u64
}

fn entry_options(base: FileOptions, meta: &fs::Metadata) -> FileOptions {
    with_permissions(base.large_file(needs_large_file(meta.len())), meta)
}

#[cfg(unix)]
fn with_permissions(options: FileOptions, meta: &fs::Metadata) -> FileOptions {
    use std::os::unix::fs::PermissionsExt;
    options.unix_permissions(meta.permissions().mode())
}

#[cfg(not(unix))]
fn with_permissions(options: FileOptions, _meta: &fs::Metadata) -> FileOptions {
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillpack_core::skill::validate_skill_dir;
    use std::io::Read;

    fn read_archive(path: &Path) -> Vec<(String, Vec<u8>)> {
        let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
        let mut out = Vec::new();
        for i in 0..archive.len() {
            let mut f = archive.by_index(i).unwrap();
            assert_eq!(f.compression(), CompressionMethod::Deflated);
            let mut buf = Vec::new();
            f.read_to_end(&mut buf).unwrap();
            out.push((f.name().to_string(), buf));
        }
        out
    }

    #[test]
    fn test_entry_name_is_relative_with_forward_slashes() {
        let root = Path::new("/work/autoreject");
        assert_eq!(
            archive_entry_name(root, &root.join("data").join("weights.bin")).as_deref(),
            Some("data/weights.bin")
        );
        assert_eq!(archive_entry_name(root, root), None);
        assert_eq!(archive_entry_name(root, Path::new("/elsewhere/x")), None);
    }

    #[test]
    fn test_writes_nested_files_in_sorted_order() {
        let tmp = tempfile::tempdir().unwrap();
        let skill = tmp.path().join("mne-core");
        fs::create_dir_all(skill.join("scripts").join("util")).unwrap();
        fs::create_dir_all(skill.join("empty")).unwrap();
        fs::write(skill.join("SKILL.md"), "# mne-core\n").unwrap();
        fs::write(skill.join("scripts").join("run.py"), "print('hi')\n").unwrap();
        fs::write(skill.join("scripts").join("util").join("io.py"), "x = 1\n").unwrap();

        let source = validate_skill_dir(&skill).unwrap();
        let out = tmp.path().join("mne-core.skill");
        let count = write_skill_archive(&source, &out).unwrap();
        assert_eq!(count, 3);

        let entries = read_archive(&out);
        let names: Vec<&str> = entries.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["SKILL.md", "scripts/run.py", "scripts/util/io.py"]);
        assert_eq!(entries[1].1, b"print('hi')\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_not_archived() {
        let tmp = tempfile::tempdir().unwrap();
        let skill = tmp.path().join("mne-microstates");
        fs::create_dir(&skill).unwrap();
        fs::write(skill.join("SKILL.md"), "m").unwrap();
        fs::write(tmp.path().join("outside.txt"), "outside").unwrap();
        std::os::unix::fs::symlink(tmp.path().join("outside.txt"), skill.join("link.txt"))
            .unwrap();

        let source = validate_skill_dir(&skill).unwrap();
        let out = tmp.path().join("out.skill");
        write_skill_archive(&source, &out).unwrap();
        let names: Vec<String> = read_archive(&out).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["SKILL.md"]);
    }

    #[test]
    fn test_unwritable_target_reports_write_error() {
        let tmp = tempfile::tempdir().unwrap();
        let skill = tmp.path().join("autoreject");
        fs::create_dir(&skill).unwrap();
        fs::write(skill.join("SKILL.md"), "a").unwrap();
        let source = validate_skill_dir(&skill).unwrap();

        let out = tmp.path().join("missing-dir").join("autoreject.skill");
        let err = write_skill_archive(&source, &out).unwrap_err();
        assert_eq!(err.kind(), "WRITE_ERROR");
        assert!(!out.exists());
    }

    #[test]
    fn test_large_file_detected_from_sparse_file() {
        let tmp = tempfile::tempdir().unwrap();
        let huge = tmp.path().join("huge.bin");
        File::create(&huge).unwrap().set_len((1 << 32) + 16).unwrap();
        let small = tmp.path().join("small.bin");
        fs::write(&small, "x").unwrap();

        assert!(needs_large_file(fs::metadata(&huge).unwrap().len()));
        assert!(!needs_large_file(fs::metadata(&small).unwrap().len()));
        assert!(needs_large_file(u32::MAX as u64));
    }

    #[test]
    #[ignore = "deflates a 4 GiB entry"]
    fn test_packages_file_over_4gib() {
        let tmp = tempfile::tempdir().unwrap();
        let skill = tmp.path().join("big");
        fs::create_dir(&skill).unwrap();
        fs::write(skill.join("SKILL.md"), "big").unwrap();
        File::create(skill.join("huge.bin"))
            .unwrap()
            .set_len((1 << 32) + 16)
            .unwrap();

        let source = validate_skill_dir(&skill).unwrap();
        let out = tmp.path().join("big.skill");
        assert_eq!(write_skill_archive(&source, &out).unwrap(), 2);

        let mut archive = zip::ZipArchive::new(File::open(&out).unwrap()).unwrap();
        let f = archive.by_name("huge.bin").unwrap();
        assert_eq!(f.size(), (1 << 32) + 16);
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_create_keeps_existing_archive() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let skill = tmp.path().join("autoreject");
        fs::create_dir(&skill).unwrap();
        fs::write(skill.join("SKILL.md"), "a").unwrap();
        let source = validate_skill_dir(&skill).unwrap();

        let out = tmp.path().join("autoreject.skill");
        fs::write(&out, b"previous run").unwrap();
        fs::set_permissions(&out, fs::Permissions::from_mode(0o444)).unwrap();
        if fs::OpenOptions::new().write(true).open(&out).is_ok() {
            // Running as root: read-only files are still writable.
            return;
        }

        let err = write_skill_archive(&source, &out).unwrap_err();
        assert_eq!(err.kind(), "WRITE_ERROR");
        assert_eq!(fs::read(&out).unwrap(), b"previous run");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_names_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = tempfile::tempdir().unwrap();
        let skill = tmp.path().join("mne-core");
        fs::create_dir(&skill).unwrap();
        fs::write(skill.join("SKILL.md"), "m").unwrap();
        let bad = skill.join(OsStr::from_bytes(b"bad\xff.txt"));
        if fs::write(&bad, "bad").is_err() {
            // Filesystem rejects non UTF-8 names.
            return;
        }

        assert_eq!(archive_entry_name(&skill, &bad), None);

        let source = validate_skill_dir(&skill).unwrap();
        let out = tmp.path().join("mne-core.skill");
        assert_eq!(write_skill_archive(&source, &out).unwrap(), 1);
        let names: Vec<String> = read_archive(&out).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["SKILL.md"]);
    }
}
