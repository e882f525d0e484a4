use crate::domain::packages::ROOT_MARKER;
use anyhow::Context;
use chrono::{DateTime, Local};
use globset::GlobMatcher;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

pub fn find_project_root(start: &Path) -> PathBuf {
    let mut current = start;
    loop {
        if current.join(ROOT_MARKER).is_file() {
            debug!("Found {} marker in: {}", ROOT_MARKER, current.display());
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => {
                debug!(
                    "No {} marker found, falling back to: {}",
                    ROOT_MARKER,
                    start.display()
                );
                return start.to_path_buf();
            }
        }
    }
}

// Root-relative path with forward slashes regardless of platform; this is
// the dedup key and the path printed in TOC and section headers.
pub fn relative_posix_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

pub fn matching_files(
    base_dir: &Path,
    root: &Path,
    matcher: &GlobMatcher,
) -> anyhow::Result<Vec<PathBuf>> {
    debug!("Scanning directory: {}", base_dir.display());
    let mut matches = Vec::new();

    for entry in walkdir::WalkDir::new(base_dir) {
        let entry =
            entry.with_context(|| format!("Failed to traverse {}", base_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if matcher.is_match(entry.file_name()) {
            debug!("Found matching file: {}", entry.path().display());
            matches.push(entry.path().to_path_buf());
        }
    }

    // Filesystem enumeration order is not guaranteed stable; sorting by
    // relative path keeps the output deterministic across runs.
    matches.sort_by_key(|path| relative_posix_path(path, root).to_lowercase());

    debug!("Found {} matching files", matches.len());
    Ok(matches)
}

pub fn read_file_contents(path: &Path) -> anyhow::Result<String> {
    debug!("Reading file contents: {}", path.display());
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

pub fn file_timestamps(path: &Path) -> anyhow::Result<(DateTime<Local>, DateTime<Local>)> {
    let metadata =
        fs::metadata(path).with_context(|| format!("Failed to stat {}", path.display()))?;
    let modified = metadata
        .modified()
        .with_context(|| format!("Failed to read mtime of {}", path.display()))?;
    // Not every filesystem reports a birth time; the modified time is the
    // closest stand-in when it is missing.
    let created = metadata.created().unwrap_or(modified);
    Ok((DateTime::from(created), DateTime::from(modified)))
}
