//! Rule implementations for intlid.
//!
//! Rules are pure functions over the translation index and the id usages
//! extracted from source files; they never touch the file system.
//!
//! ## Module Structure
//!
//! - `missing_id`: ids referenced in code but absent from a locale file

pub mod missing_id;

pub use missing_id::{DiagnosticSink, IdValidator, MissingReport, check_missing_id_issues};
