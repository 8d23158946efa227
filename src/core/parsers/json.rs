use std::{fs, path::Path};

use serde_json::{Map, Value};

use crate::core::translations::IndexError;

/// Read a locale file and return its top-level keys in file order.
///
/// Values are not interpreted; nested objects contribute only their
/// top-level key.
pub fn parse_locale_keys(path: &Path) -> Result<Vec<String>, IndexError> {
    let content = fs::read_to_string(path).map_err(|source| IndexError::TranslationFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_top_level_keys(&content).map_err(|source| IndexError::TranslationFileParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a JSON object and return its keys. Anything but an object fails.
pub fn parse_top_level_keys(content: &str) -> serde_json::Result<Vec<String>> {
    let object: Map<String, Value> = serde_json::from_str(content)?;
    Ok(object.into_iter().map(|(key, _)| key).collect())
}
