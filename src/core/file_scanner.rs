use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// What to scan below the base directory.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions<'a> {
    /// Directories (literal or glob) to scan; empty means the base directory.
    pub includes: &'a [String],
    /// Paths (literal prefix or glob) to skip.
    pub ignores: &'a [String],
    pub ignore_test_files: bool,
    pub verbose: bool,
}

/// Result of scanning files.
pub struct ScanResult {
    /// Source files in path order.
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

fn warn(verbose: bool, message: std::fmt::Arguments<'_>) {
    if verbose {
        eprintln!("{} {}", "warning:".bold().yellow(), message);
    }
}

pub fn scan_files(base_dir: &Path, options: &ScanOptions<'_>) -> ScanResult {
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in options.ignores {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => warn(
                    options.verbose,
                    format_args!("Invalid ignore pattern '{}': {}", p, e),
                ),
            }
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    if options.ignore_test_files {
        glob_patterns.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
    }

    let dirs_to_scan: Vec<PathBuf> = if options.includes.is_empty() {
        vec![base_dir.to_path_buf()]
    } else {
        let mut paths = Vec::new();
        for inc in options.includes {
            if is_glob_pattern(inc) {
                let full_pattern = base_dir.join(inc);
                match glob(&full_pattern.to_string_lossy()) {
                    Ok(entries) => paths.extend(entries.flatten().filter(|entry| entry.is_dir())),
                    Err(e) => warn(
                        options.verbose,
                        format_args!("Invalid glob pattern '{}': {}", inc, e),
                    ),
                }
            } else {
                let path = base_dir.join(inc);
                if path.exists() {
                    paths.push(path);
                } else {
                    warn(
                        options.verbose,
                        format_args!("Include path does not exist: {}", path.display()),
                    );
                }
            }
        }
        paths
    };

    let is_ignored = |path: &Path| {
        let path_str = path.to_string_lossy();
        literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
            || glob_patterns.iter().any(|p| p.matches(&path_str))
    };

    for dir in dirs_to_scan {
        for entry in WalkDir::new(dir).into_iter().filter_entry(|e| !is_ignored(e.path())) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    warn(options.verbose, format_args!("Cannot access path: {}", e));
                    continue;
                }
            };

            let path = entry.path();
            if entry.file_type().is_file() && is_scannable_file(path) {
                files.insert(path.to_string_lossy().into_owned());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn is_scannable_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("tsx" | "ts" | "jsx" | "js" | "mjs" | "cjs")
    )
}
