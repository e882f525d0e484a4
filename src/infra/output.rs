use anyhow::Context;
use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use log::{debug, info, warn};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub fn write_archive(out_dir: &Path, filename: &str, document: &str) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(out_dir).with_context(|| {
        format!("Failed to create output directory {}", out_dir.display())
    })?;

    let output_path = out_dir.join(filename);
    debug!("Writing archive to: {}", output_path.display());
    fs::write(&output_path, document)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!("Archive written to: {}", output_path.display());
    Ok(output_path)
}

pub fn print_created(filename: &str, file_count: usize) -> anyhow::Result<()> {
    let mut stdout = io::stdout();

    stdout.execute(SetForegroundColor(Color::Green))?;
    writeln!(stdout, "  → {}  ({} files)", filename, file_count)?;
    stdout.execute(ResetColor)?;
    Ok(())
}

// Warnings must stay visible at every verbosity, so they go straight to
// stdout; the log line is the diagnostic duplicate.
pub fn print_warning(message: &str) -> anyhow::Result<()> {
    warn!("{}", message);

    let mut stdout = io::stdout();
    stdout.execute(SetForegroundColor(Color::Yellow))?;
    writeln!(stdout, "  Warning: {}", message)?;
    stdout.execute(ResetColor)?;
    Ok(())
}
