use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::translations::LocaleSettings;

pub const CONFIG_FILE_NAME: &str = ".intlidrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Locale JSON files; required by `check`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale_files: Option<Vec<String>>,
    /// Base directory `locale_files` are resolved against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_root: Option<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
}

fn default_ignores() -> Vec<String> {
    vec!["**/node_modules/**".to_string()]
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_ignore_test_files() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale_files: None,
            project_root: None,
            ignores: default_ignores(),
            includes: Vec::new(),
            source_root: default_source_root(),
            ignore_test_files: default_ignore_test_files(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` or `includes` are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Include patterns without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }

    /// Settings for the translation index, with `project_root` anchored at
    /// `root_dir` when it is relative or absent.
    pub fn locale_settings(&self, root_dir: &Path) -> LocaleSettings {
        let project_root = match &self.project_root {
            Some(project_root) => root_dir.join(project_root),
            None => root_dir.to_path_buf(),
        };
        LocaleSettings {
            locale_files: self.locale_files.clone(),
            project_root: Some(project_root),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config {
        locale_files: Some(vec!["./src/translations/en.json".to_string()]),
        ..Default::default()
    };
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Search `start_dir` and its ancestors for the config file, stopping at the
/// first directory that holds `.git`.
///
/// A config file in `start_dir` itself is returned relative to it, so
/// reported paths stay relative to the working directory.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let config_path = start_dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        return Some(config_path);
    }

    let mut current = std::path::absolute(start_dir).ok()?;
    loop {
        if current.join(".git").exists() || !current.pop() {
            return None;
        }
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory relative config paths are anchored at: the config file's
    /// directory, or the working directory when no file was found.
    pub root_dir: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let root_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                root_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            root_dir: PathBuf::from("."),
        }),
    }
}
