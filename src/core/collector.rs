use crate::domain::models::{CollectedFile, PackageSpec};
use crate::infra::file_system::{
    file_timestamps, matching_files, read_file_contents, relative_posix_path,
};
use crate::infra::output::print_warning;
use anyhow::Context;
use globset::Glob;
use log::{debug, info};
use std::collections::HashSet;
use std::path::Path;

pub fn collect_package_files(
    spec: &PackageSpec,
    root: &Path,
) -> anyhow::Result<Vec<CollectedFile>> {
    info!("Collecting files for package '{}'", spec.suffix);
    let matcher = Glob::new(spec.file_pattern)
        .with_context(|| format!("Invalid file pattern '{}'", spec.file_pattern))?
        .compile_matcher();

    let mut collected = Vec::new();
    let mut seen = HashSet::new();

    // Explicit root files first, in listed order; first-seen wins, so these
    // always take precedence over anything the directory walk finds later.
    for name in spec.root_files {
        let path = root.join(name);
        if !path.is_file() {
            debug!("Root file not present, skipping: {}", path.display());
            continue;
        }
        let relative = relative_posix_path(&path, root);
        if seen.insert(relative.clone()) {
            collected.push(load_collected_file(&path, relative)?);
        }
    }

    for dir in spec.include_dirs {
        let base_dir = root.join(dir);
        if !base_dir.is_dir() {
            print_warning(&format!("Directory not found: {}", base_dir.display()))?;
            continue;
        }
        for path in matching_files(&base_dir, root, &matcher)? {
            let relative = relative_posix_path(&path, root);
            if seen.insert(relative.clone()) {
                collected.push(load_collected_file(&path, relative)?);
            }
        }
    }

    info!(
        "Collected {} files for package '{}'",
        collected.len(),
        spec.suffix
    );
    Ok(collected)
}

fn load_collected_file(path: &Path, relative_path: String) -> anyhow::Result<CollectedFile> {
    let content = read_file_contents(path)?;
    let (created_at, modified_at) = file_timestamps(path)?;
    Ok(CollectedFile {
        relative_path,
        absolute_path: path.to_path_buf(),
        created_at,
        modified_at,
        content,
    })
}
