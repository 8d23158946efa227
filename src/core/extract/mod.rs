//! Extraction of message ids from source files.
//!
//! `recognizers` turns individual AST nodes into candidate ids without any
//! traversal state; `collector` drives them over a whole module with swc's
//! visitor.

pub mod collector;
pub mod recognizers;

pub use collector::{CallSiteKind, IdCollector, IdUsage};
pub use recognizers::{IdNode, candidate_from_tpl};

#[cfg(test)]
mod tests;
