//! File parsers for source code and locale files.
//!
//! This module provides parsers for different file types:
//! - `json`: locale file parser (top-level message ids)
//! - `jsx`: JSX/TSX source file parser (uses swc for AST generation)

pub mod json;
pub mod jsx;
