use crate::core::archive::{output_filename, render_archive, run_timestamp};
use crate::core::collector::collect_package_files;
use crate::domain::models::PackagerConfig;
use crate::domain::packages::{DEFAULT_OUTPUT_DIR, DEFAULT_PROJECT_TITLE, PACKAGES};
use crate::infra::file_system::find_project_root;
use crate::infra::logger::setup_logger;
use crate::infra::output::{print_created, print_warning, write_archive};
use anyhow::Context;
use chrono::Local;
use clap::Parser;
use log::{debug, info};
use std::collections::HashSet;
use std::path::PathBuf;

const GENERATOR: &str = concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));

#[derive(Parser)]
#[command(name = "code-packager")]
#[command(about = "Bundle project files into timestamped text archives", long_about = None)]
pub struct Cli {
    // Optional project root override; discovered via the marker file when absent.
    pub root: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_PROJECT_TITLE)]
    pub title: String,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logger(cli.verbose)?;

    info!("Starting packaging run");
    debug!(
        "Command parameters: root={:?}, title={}, verbose={}",
        cli.root, cli.title, cli.verbose
    );

    let config = PackagerConfig {
        root_override: cli.root,
        project_title: cli.title,
        output_dir: DEFAULT_OUTPUT_DIR.to_string(),
    };

    package_all(&config)
}

pub fn package_all(config: &PackagerConfig) -> anyhow::Result<()> {
    let root = match &config.root_override {
        Some(path) => {
            let resolved = path
                .canonicalize()
                .with_context(|| format!("Invalid root override {}", path.display()))?;
            println!("Using override root: {}\n", resolved.display());
            resolved
        }
        None => {
            let start = std::env::current_dir().context("Failed to resolve current directory")?;
            find_project_root(&start)
        }
    };

    // One timestamp for the whole run; every package's output filename shares
    // it, so the four files sort adjacently.
    let stamp = run_timestamp(&Local::now());

    println!("Project root: {}", root.display());
    println!("Timestamp prefix: {}\n", stamp);

    let mut seen_suffixes = HashSet::new();
    for package in PACKAGES {
        if !seen_suffixes.insert(package.suffix) {
            print_warning(&format!(
                "Duplicate package suffix '{}', outputs will overwrite each other",
                package.suffix
            ))?;
        }
    }

    let out_dir = root.join(&config.output_dir);
    for package in PACKAGES {
        println!("Creating {}_{} ...", config.project_title, package.suffix);

        let files = collect_package_files(package, &root)?;
        let document = render_archive(
            &files,
            &config.project_title,
            package.description,
            GENERATOR,
            &Local::now(),
        );
        let filename = output_filename(&stamp, &config.project_title, package.suffix);
        write_archive(&out_dir, &filename, &document)?;
        print_created(&filename, files.len())?;
    }

    println!(
        "\nAll {} packages created in ./{}/",
        PACKAGES.len(),
        config.output_dir
    );
    Ok(())
}
