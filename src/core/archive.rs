use crate::domain::models::CollectedFile;
use chrono::{DateTime, Local};
use log::debug;

const HEADER_RULE: &str =
    "// ============================================================================";
const SECTION_RULE: &str =
    "================================================================================";

// Human-readable, millisecond precision; used for the generation line and
// per-file created/modified lines.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

// Fixed-width prefix shared by all of one run's output filenames, so a
// lexicographic sort groups runs together and orders them chronologically.
const OUTPUT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

pub fn format_timestamp(timestamp: &DateTime<Local>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

pub fn run_timestamp(now: &DateTime<Local>) -> String {
    now.format(OUTPUT_TIMESTAMP_FORMAT).to_string()
}

pub fn output_filename(run_stamp: &str, title: &str, suffix: &str) -> String {
    format!("{}_{}_{}.txt", run_stamp, title, suffix)
}

pub fn render_archive(
    files: &[CollectedFile],
    title: &str,
    description: &str,
    generator: &str,
    generated_at: &DateTime<Local>,
) -> String {
    debug!("Rendering archive with {} files", files.len());
    let mut document = String::new();

    document.push_str(HEADER_RULE);
    document.push('\n');
    document.push_str(&format!("// {} – {}\n", title, description));
    document.push_str(&format!("// Generated by: {}\n", generator));
    document.push_str(&format!("// Generated at: {}\n", format_timestamp(generated_at)));
    document.push_str(HEADER_RULE);
    document.push_str("\n\n");

    document.push_str(HEADER_RULE);
    document.push('\n');
    document.push_str("// TABLE OF CONTENTS\n");
    document.push_str(HEADER_RULE);
    document.push('\n');
    for (index, file) in files.iter().enumerate() {
        document.push_str(&format!("// {:03}. {}\n", index + 1, file.relative_path));
    }
    if files.is_empty() {
        document.push_str("// (no files included)\n");
    }
    document.push_str(HEADER_RULE);
    document.push_str("\n\n");

    for (index, file) in files.iter().enumerate() {
        document.push_str("\n\n\n");
        document.push_str(SECTION_RULE);
        document.push('\n');
        document.push_str(&format!("// SECTION {:03}: {}\n", index + 1, file.relative_path));
        document.push_str(&format!("// Created:  {}\n", format_timestamp(&file.created_at)));
        document.push_str(&format!("// Modified: {}\n", format_timestamp(&file.modified_at)));
        document.push_str(SECTION_RULE);
        document.push('\n');
        document.push_str(file.content.trim_end());
        document.push('\n');
    }

    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::path::PathBuf;

    fn fixed_timestamp() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap()
    }

    fn sample_file(relative_path: &str, content: &str) -> CollectedFile {
        CollectedFile {
            relative_path: relative_path.to_string(),
            absolute_path: PathBuf::from(relative_path),
            created_at: fixed_timestamp(),
            modified_at: fixed_timestamp(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_format_timestamp_millisecond_precision() {
        assert_eq!(format_timestamp(&fixed_timestamp()), "2024-05-01 12:30:45.000");
    }

    #[test]
    fn test_run_timestamp_is_sortable_prefix() {
        assert_eq!(run_timestamp(&fixed_timestamp()), "20240501_123045");
    }

    #[test]
    fn test_output_filename() {
        assert_eq!(
            output_filename("20240501_123045", "secure_gate", "src"),
            "20240501_123045_secure_gate_src.txt"
        );
    }

    #[test]
    fn test_render_archive_header_block() {
        let files = vec![sample_file("Cargo.toml", "[package]")];

        let document = render_archive(
            &files,
            "secure_gate",
            "Full library source + Cargo.toml",
            "code-packager v0.1.0",
            &fixed_timestamp(),
        );

        assert!(document.starts_with(HEADER_RULE));
        assert!(document.contains("// secure_gate – Full library source + Cargo.toml\n"));
        assert!(document.contains("// Generated by: code-packager v0.1.0\n"));
        assert!(document.contains("// Generated at: 2024-05-01 12:30:45.000\n"));
    }

    #[test]
    fn test_render_archive_toc_matches_section_order() {
        let files = vec![
            sample_file("Cargo.toml", "[package]"),
            sample_file("src/lib.rs", "fn a(){}"),
            sample_file("src/mod.rs", "mod x;"),
        ];

        let document = render_archive(&files, "demo", "sources", "gen", &fixed_timestamp());

        let toc: Vec<&str> = document
            .lines()
            .filter(|line| line.starts_with("// 0"))
            .collect();
        assert_eq!(
            toc,
            vec!["// 001. Cargo.toml", "// 002. src/lib.rs", "// 003. src/mod.rs"]
        );

        let sections: Vec<&str> = document
            .lines()
            .filter(|line| line.starts_with("// SECTION"))
            .collect();
        assert_eq!(
            sections,
            vec![
                "// SECTION 001: Cargo.toml",
                "// SECTION 002: src/lib.rs",
                "// SECTION 003: src/mod.rs"
            ]
        );
    }

    #[test]
    fn test_render_archive_section_metadata() {
        let files = vec![sample_file("src/lib.rs", "fn a(){}")];

        let document = render_archive(&files, "demo", "sources", "gen", &fixed_timestamp());

        assert!(document.contains("// Created:  2024-05-01 12:30:45.000\n"));
        assert!(document.contains("// Modified: 2024-05-01 12:30:45.000\n"));
    }

    #[test]
    fn test_render_archive_empty_placeholder() {
        let document = render_archive(&[], "demo", "tests", "gen", &fixed_timestamp());

        assert!(document.contains("// TABLE OF CONTENTS\n"));
        assert!(document.contains("// (no files included)\n"));
        assert!(!document.contains("// SECTION"));
    }

    #[test]
    fn test_render_archive_trims_trailing_whitespace() {
        let files = vec![sample_file("src/lib.rs", "fn a(){}  \n\n\n")];

        let document = render_archive(&files, "demo", "sources", "gen", &fixed_timestamp());

        assert!(document.ends_with("fn a(){}\n"));
        assert!(!document.ends_with("\n\n"));
    }

    #[test]
    fn test_render_archive_is_deterministic_for_identical_inputs() {
        let files = vec![
            sample_file("src/a.rs", "struct A;"),
            sample_file("src/b.rs", "struct B;"),
        ];

        let first = render_archive(&files, "demo", "sources", "gen", &fixed_timestamp());
        let second = render_archive(&files, "demo", "sources", "gen", &fixed_timestamp());

        assert_eq!(first, second);
    }
}
