use std::{
    collections::BTreeSet,
    fs,
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context as _, Result};
use colored::Colorize;
use rayon::prelude::*;
use swc_common::SourceMap;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        extract::{IdCollector, IdUsage},
        file_scanner::{ScanOptions, scan_files},
        parsers::jsx::parse_jsx_source,
        translations::{IndexError, LocaleSettings, TranslationCache, TranslationIndex},
    },
    issues::ParseErrorIssue,
};

/// Everything a `check` run needs before any file is parsed.
///
/// Configuration is merged with the following priority (highest to lowest):
/// 1. CLI arguments (e.g., `--locale-file src/translations/fr.json`)
/// 2. `.intlidrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Directory relative config paths are anchored at.
    pub root_dir: PathBuf,

    /// Source files to analyze, in path order.
    pub files: BTreeSet<String>,

    /// Settings the translation index is built from.
    pub locale_settings: LocaleSettings,

    pub verbose: bool,
}

/// Id usages and parse failures of every scanned source file.
#[derive(Debug, Default)]
pub struct SourceAnalysis {
    pub usages: Vec<IdUsage>,
    pub parse_errors: Vec<ParseErrorIssue>,
}

impl CheckContext {
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        // The CLI source root decides where the config search starts.
        let start_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&start_dir)?;

        if verbose && !config_result.from_file {
            eprintln!(
                "{} No {} found, using default configuration",
                "note:".bold(),
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        let root_dir = config_result.root_dir;

        if !common_args.locale_files.is_empty() {
            config.locale_files = Some(common_args.locale_files.clone());
        }

        let mut locale_settings = config.locale_settings(&root_dir);
        if let Some(project_root) = &common_args.project_root {
            locale_settings.project_root = Some(project_root.clone());
        }

        let scan_root = match &common_args.source_root {
            Some(source_root) => source_root.clone(),
            None => join_relative(&root_dir, &config.source_root),
        };

        let scan_result = scan_files(
            &scan_root,
            &ScanOptions {
                includes: &config.includes,
                ignores: &config.ignores,
                ignore_test_files: config.ignore_test_files,
                verbose,
            },
        );

        if verbose && scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) could not be read while scanning {}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                scan_root.display()
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            locale_settings,
            verbose,
        })
    }

    /// Number of configured locale files.
    pub fn locale_file_count(&self) -> usize {
        self.locale_settings
            .locale_files
            .as_ref()
            .map_or(0, Vec::len)
    }

    /// Parse every source file in parallel and collect its id usages.
    ///
    /// Files that cannot be read or parsed become `ParseErrorIssue`s.
    pub fn analyze_files(&self) -> SourceAnalysis {
        let results: Vec<_> = self
            .files
            .par_iter()
            .map(|file_path| (file_path, analyze_file(file_path)))
            .collect();

        let mut analysis = SourceAnalysis::default();
        for (file_path, result) in results {
            match result {
                Ok(usages) => analysis.usages.extend(usages),
                Err(e) => {
                    if self.verbose {
                        eprintln!("{} {} - {:#}", "warning:".bold().yellow(), file_path, e);
                    }
                    analysis.parse_errors.push(ParseErrorIssue {
                        file_path: file_path.clone(),
                        error: format!("{:#}", e),
                    });
                }
            }
        }
        analysis
    }
}

/// Read, parse and walk one source file.
pub fn analyze_file(file_path: &str) -> Result<Vec<IdUsage>> {
    let code = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read file: {}", file_path))?;
    // Each file gets its own SourceMap so files can be parsed on any thread.
    let source_map = Arc::new(SourceMap::default());
    let parsed = parse_jsx_source(code, file_path, source_map)?;
    Ok(IdCollector::new(file_path, &parsed.source_map).collect(&parsed.module))
}

fn join_relative(root: &Path, rel: &str) -> PathBuf {
    let rel: PathBuf = Path::new(rel)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if rel.as_os_str().is_empty() {
        root.to_path_buf()
    } else {
        root.join(rel)
    }
}

/// Owns the translation cache for the lifetime of one analysis session.
///
/// Loading the index twice in the same session only re-parses locale files
/// whose modification time changed in between.
#[derive(Debug, Default)]
pub struct CheckSession {
    cache: TranslationCache,
}

impl CheckSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    pub fn load_index(&mut self, settings: &LocaleSettings) -> Result<TranslationIndex, IndexError> {
        TranslationIndex::load(settings, &mut self.cache)
    }
}
