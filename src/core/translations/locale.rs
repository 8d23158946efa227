use std::{path::Path, sync::LazyLock};

use regex::Regex;

use super::IndexError;

/// `<locale>.<rest>`, where the locale is letters and dashes (`en`, `fr-FR`).
static LOCALE_FILE_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z-]+)\.").unwrap());

/// Extracts the locale from a locale file path.
///
/// The locale is the file name segment before the first `.`:
/// `locales/en-US.json` -> `en-US`, `locales/en.messages.json` -> `en`.
pub fn locale_from_file_name(file: &str) -> Result<String, IndexError> {
    let file_name = Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();

    LOCALE_FILE_NAME_REGEX
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| IndexError::LocaleName {
            file: file.to_string(),
        })
}
