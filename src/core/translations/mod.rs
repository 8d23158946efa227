//! Locale translation files and the per-run translation index.
//!
//! ## Module Structure
//!
//! - `cache`: mtime-validated cache of parsed locale files
//! - `error`: errors that abort index loading
//! - `locale`: locale name derivation from file names

pub mod cache;
pub mod error;
pub mod locale;

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

pub use cache::{CacheEntry, TranslationCache};
pub use error::IndexError;
pub use locale::locale_from_file_name;

/// Locale name paired with a copy of its keys, in `localeFiles` order.
pub type LocaleIds = Vec<(String, Vec<String>)>;

/// Settings the translation index is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleSettings {
    /// Locale JSON files. `None` means the setting is missing entirely.
    pub locale_files: Option<Vec<String>>,
    /// Base directory `locale_files` are resolved against.
    pub project_root: Option<PathBuf>,
}

impl LocaleSettings {
    pub fn new(locale_files: Vec<String>) -> Self {
        Self {
            locale_files: Some(locale_files),
            project_root: None,
        }
    }

    pub fn with_project_root(mut self, project_root: impl Into<PathBuf>) -> Self {
        self.project_root = Some(project_root.into());
        self
    }

    fn resolve(&self, file: &str) -> PathBuf {
        match &self.project_root {
            Some(root) => root.join(file),
            None => Path::new(file).to_path_buf(),
        }
    }
}

/// Read the keys of every configured locale file through `cache`.
///
/// Returns fresh copies of the cached key lists. When two files map to the
/// same locale, the later file's keys win and the locale keeps its first
/// position.
pub fn load_intl_ids(
    settings: &LocaleSettings,
    cache: &mut TranslationCache,
) -> Result<LocaleIds, IndexError> {
    let Some(locale_files) = &settings.locale_files else {
        return Err(IndexError::Configuration);
    };

    let mut results: LocaleIds = Vec::with_capacity(locale_files.len());

    for file in locale_files {
        let full_path = settings.resolve(file);
        let entry = cache.load(file, &full_path)?;

        match results.iter_mut().find(|(locale, _)| *locale == entry.locale) {
            Some((_, keys)) => *keys = entry.keys.clone(),
            None => results.push((entry.locale.clone(), entry.keys.clone())),
        }
    }

    Ok(results)
}

/// Known keys of a single locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleKeySet {
    pub locale: String,
    pub keys: HashSet<String>,
}

/// Locale key sets for one analysis run, in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationIndex {
    locales: Vec<LocaleKeySet>,
}

impl TranslationIndex {
    /// Build the index from the configured locale files.
    pub fn load(settings: &LocaleSettings, cache: &mut TranslationCache) -> Result<Self, IndexError> {
        Ok(Self::from_locale_ids(load_intl_ids(settings, cache)?))
    }

    pub fn from_locale_ids(ids: LocaleIds) -> Self {
        Self {
            locales: ids
                .into_iter()
                .map(|(locale, keys)| LocaleKeySet {
                    locale,
                    keys: keys.into_iter().collect(),
                })
                .collect(),
        }
    }

    pub fn locales(&self) -> &[LocaleKeySet] {
        &self.locales
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
