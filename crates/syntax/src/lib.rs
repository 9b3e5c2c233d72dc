//! codetint-syntax: tree-sitter front end for codetint.
//!
//! This crate turns a source buffer into the matches the renderer consumes:
//!
//! - [`Language`]: the supported grammars, looked up by name, extension or
//!   path, each with a bundled highlight query.
//! - [`parse`]: builds a [`SyntaxTree`] for a buffer.
//! - [`compile_query`] / [`default_query`]: compile a [`HighlightQuery`].
//! - [`HighlightQuery::run`]: collects every match, in cursor order, as
//!   [`codetint_render::Match`] values whose tags borrow from the query.
//!
//! # Example
//!
//! ```
//! use codetint_syntax::{default_query, parse, Language};
//!
//! let source = b"def f():\n    pass\n";
//! let tree = parse(Language::Python, source).unwrap();
//! let query = default_query(Language::Python).unwrap();
//! let matches = query.run(&tree, source).unwrap();
//! assert!(!matches.is_empty());
//! ```

mod engine;
mod error;
mod registry;

pub use engine::{compile_query, default_query, parse, HighlightQuery, SyntaxTree};
pub use error::{Result, SyntaxError};
pub use registry::{Language, LanguageConfig};
