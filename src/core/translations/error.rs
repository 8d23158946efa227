use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures that prevent the translation index from being built.
///
/// All of these are fatal for a run: no call-site is checked when the index
/// cannot be loaded.
#[derive(Debug, Error)]
pub enum IndexError {
    /// `localeFiles` is absent from the settings.
    #[error("localeFiles not in settings")]
    Configuration,

    /// The file name does not have the `<locale>.<ext>` shape.
    #[error("Cannot derive a locale name from file name: {file}")]
    LocaleName { file: String },

    /// The locale file could not be stat'ed or read.
    #[error("Failed to read translation file: {}", path.display())]
    TranslationFileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The locale file is not a JSON object. Files that cannot be read at
    /// all are reported as `TranslationFileRead` instead.
    #[error("Failed to parse translation file: {}", path.display())]
    TranslationFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
