use chrono::{DateTime, Local};
use std::path::PathBuf;

// One named output document covering a subset of project files. Specs are
// static configuration declared in packages.rs, never derived at runtime.
#[derive(Debug, Clone, Copy)]
pub struct PackageSpec {
    pub suffix: &'static str,
    pub root_files: &'static [&'static str],
    pub include_dirs: &'static [&'static str],
    pub file_pattern: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub struct PackagerConfig {
    pub root_override: Option<PathBuf>,
    pub project_title: String,
    pub output_dir: String,
}

#[derive(Debug, Clone)]
pub struct CollectedFile {
    pub relative_path: String,
    pub absolute_path: PathBuf,
    pub created_at: DateTime<Local>,
    pub modified_at: DateTime<Local>,
    pub content: String,
}
