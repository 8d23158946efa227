use std::{
    collections::{HashMap, hash_map::Entry},
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

use log::debug;

use super::{IndexError, locale::locale_from_file_name};
use crate::core::parsers::json::parse_locale_keys;

/// Parsed keys of one locale file, valid while the file's mtime is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// Absolute path of the locale file.
    pub path: PathBuf,
    /// Modification time observed when the file was parsed.
    pub mtime: SystemTime,
    pub locale: String,
    /// Top-level keys in file order.
    pub keys: Vec<String>,
}

/// Locale file cache keyed by absolute path.
///
/// Owned by an analysis session and handed to the index loader by `&mut`.
/// Entries are replaced when the on-disk mtime no longer matches and are
/// otherwise kept until the cache is dropped.
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: HashMap<PathBuf, CacheEntry>,
    parse_count: usize,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times a locale file was actually parsed.
    pub fn parse_count(&self) -> usize {
        self.parse_count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, path: &Path) -> Option<&CacheEntry> {
        self.entries.get(&absolute_path(path))
    }

    /// Return the entry for `full_path`, parsing the file only when it is not
    /// cached yet or its mtime changed since it was cached.
    ///
    /// `file` is the configured (unresolved) name the locale is derived from.
    pub fn load(&mut self, file: &str, full_path: &Path) -> Result<&CacheEntry, IndexError> {
        let locale = locale_from_file_name(file)?;
        let path = absolute_path(full_path);
        let mtime = fs::symlink_metadata(full_path)
            .and_then(|metadata| metadata.modified())
            .map_err(|source| IndexError::TranslationFileRead {
                path: full_path.to_path_buf(),
                source,
            })?;

        let entry = match self.entries.entry(path.clone()) {
            Entry::Occupied(cached) if cached.get().mtime == mtime => {
                debug!("translation cache hit: {}", path.display());
                cached.into_mut()
            }
            slot => {
                debug!("parsing translation file: {}", path.display());
                let keys = parse_locale_keys(full_path)?;
                self.parse_count += 1;
                let fresh = CacheEntry {
                    path,
                    mtime,
                    locale,
                    keys,
                };
                match slot {
                    Entry::Occupied(mut stale) => {
                        stale.insert(fresh);
                        stale.into_mut()
                    }
                    Entry::Vacant(vacant) => vacant.insert(fresh),
                }
            }
        };

        Ok(entry)
    }
}

fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
