//! Errors from grammar loading, parsing and query compilation.

use thiserror::Error;
use tree_sitter::{LanguageError, QueryErrorKind};

use crate::registry::Language;

/// Errors that can occur before rendering starts.
#[derive(Error, Debug)]
pub enum SyntaxError {
    /// The grammar was built for an ABI the tree-sitter runtime can't load.
    #[error("cannot load the {language} grammar: {source}")]
    Language {
        language: Language,
        #[source]
        source: LanguageError,
    },

    /// The parser produced no tree.
    #[error("failed to parse input as {language}")]
    Parse { language: Language },

    /// The highlight query did not compile against the grammar.
    #[error("invalid {language} query at line {}, column {} (byte {offset}, {kind:?}): {message}", .row + 1, .column + 1)]
    Query {
        language: Language,
        offset: usize,
        row: usize,
        column: usize,
        kind: QueryErrorKind,
        message: String,
    },

    /// A query was run over a tree parsed with a different grammar.
    #[error("{query} query cannot run over a {tree} syntax tree")]
    LanguageMismatch { query: Language, tree: Language },
}

pub type Result<T> = std::result::Result<T, SyntaxError>;
