//! intlid - react-intl message id checker
//!
//! intlid finds message ids referenced through react-intl call patterns
//! (`<FormattedMessage id>`, `formatMessage({ id })`, `defineMessages`) in
//! JS/TS/JSX/TSX sources and reports every id that is missing from one or
//! more locale JSON files.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Parsing, id extraction and the translation index
//! - `issues`: Issue type definitions and reporting
//! - `rules`: The missing-id rule

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
