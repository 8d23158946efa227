//! Core data types shared by extraction and validation.
//!
//! ## Module Structure
//!
//! - `candidate`: Message ids extracted from call-sites (literal or template)
//! - `source`: Source code location types (SourceContext, SourceLocation)

pub mod candidate;
pub mod source;

pub use candidate::{CandidateId, HOLE_MARKER, TemplatePart, TemplatePattern};
pub use source::{SourceContext, SourceLocation};
