//! Core analysis engine.
//!
//! ## Module Structure
//!
//! - `context`: configuration, file discovery and per-file id extraction
//! - `data`: shared data types (source positions, candidate ids)
//! - `extract`: swc visitor that recognizes react-intl call-sites
//! - `file_scanner`: source file discovery
//! - `parsers`: JSON and JS/TS/JSX parsing
//! - `translations`: locale files, the translation cache and index

pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod parsers;
pub mod translations;

pub use context::{CheckContext, CheckSession, SourceAnalysis, analyze_file};
pub use data::{
    CandidateId, HOLE_MARKER, SourceContext, SourceLocation, TemplatePart, TemplatePattern,
};
pub use extract::{CallSiteKind, IdCollector, IdUsage};
pub use translations::{
    IndexError, LocaleKeySet, LocaleSettings, TranslationCache, TranslationIndex,
};
