//! Parsing and query execution.
//!
//! Everything here runs before rendering: parse the source once, compile
//! the highlight query once, then collect every match in cursor order.

use std::time::Instant;

use codetint_render::{Capture, Match};
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor, Tree};

use crate::error::{Result, SyntaxError};
use crate::registry::Language;

/// A parsed source buffer.
pub struct SyntaxTree {
    language: Language,
    tree: Tree,
}

impl SyntaxTree {
    pub fn language(&self) -> Language {
        self.language
    }

    /// True if the grammar had to recover from syntax errors.
    ///
    /// Trees with errors still highlight; the flag is informational.
    pub fn has_error(&self) -> bool {
        self.tree.root_node().has_error()
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }
}

/// Parses `source` with `language`'s grammar.
pub fn parse(language: Language, source: &[u8]) -> Result<SyntaxTree> {
    let config = language.config();
    let started = Instant::now();

    let mut parser = Parser::new();
    parser
        .set_language(&config.grammar)
        .map_err(|source| SyntaxError::Language { language, source })?;

    let tree = parser
        .parse(source, None)
        .ok_or(SyntaxError::Parse { language })?;

    let syntax = SyntaxTree { language, tree };
    tracing::debug!(
        %language,
        bytes = source.len(),
        has_error = syntax.has_error(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "parsed source"
    );
    Ok(syntax)
}

/// A highlight query compiled against one language's grammar.
pub struct HighlightQuery {
    language: Language,
    query: Query,
}

impl std::fmt::Debug for HighlightQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HighlightQuery")
            .field("language", &self.language)
            .field("patterns", &self.query.pattern_count())
            .field("captures", &self.query.capture_names().len())
            .finish()
    }
}

/// Compiles `query_source` against `language`'s grammar.
pub fn compile_query(language: Language, query_source: &str) -> Result<HighlightQuery> {
    let config = language.config();
    let query = Query::new(&config.grammar, query_source).map_err(|err| SyntaxError::Query {
        language,
        offset: err.offset,
        row: err.row,
        column: err.column,
        kind: err.kind,
        message: err.message,
    })?;

    tracing::debug!(
        %language,
        patterns = query.pattern_count(),
        captures = query.capture_names().len(),
        "compiled highlight query"
    );
    Ok(HighlightQuery { language, query })
}

/// Compiles the highlight query bundled with `language`'s grammar.
pub fn default_query(language: Language) -> Result<HighlightQuery> {
    compile_query(language, &language.config().highlights_query)
}

impl HighlightQuery {
    pub fn language(&self) -> Language {
        self.language
    }

    /// Capture names in index order.
    pub fn capture_names(&self) -> &[&str] {
        self.query.capture_names()
    }

    /// Runs the query over `tree` and returns every match in cursor order.
    ///
    /// Capture tags borrow from the query. `source` must be the buffer the
    /// tree was parsed from.
    pub fn run<'q>(&'q self, tree: &SyntaxTree, source: &[u8]) -> Result<Vec<Match<'q>>> {
        if tree.language != self.language {
            return Err(SyntaxError::LanguageMismatch {
                query: self.language,
                tree: tree.language,
            });
        }

        let names = self.query.capture_names();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&self.query, tree.tree.root_node(), source);

        let mut out = Vec::new();
        let mut captures = 0;
        while let Some(m) = matches.next() {
            let found: Match<'q> = m
                .captures
                .iter()
                .filter_map(|capture| {
                    let tag = *names.get(capture.index as usize)?;
                    Some(Capture::new(
                        tag,
                        capture.node.start_byte(),
                        capture.node.end_byte(),
                    ))
                })
                .collect();
            captures += found.len();
            out.push(found);
        }

        tracing::debug!(
            language = %self.language,
            matches = out.len(),
            captures,
            "ran highlight query"
        );
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::QueryErrorKind;

    fn tags_for(language: Language, source: &str) -> Vec<(String, String)> {
        let tree = parse(language, source.as_bytes()).unwrap();
        let query = default_query(language).unwrap();
        query
            .run(&tree, source.as_bytes())
            .unwrap()
            .into_iter()
            .flat_map(|m| m.captures)
            .map(|c| (c.tag.to_string(), source[c.start..c.end].to_string()))
            .collect()
    }

    #[test]
    fn test_parse_rust() {
        let tree = parse(Language::Rust, b"fn main() {}").unwrap();
        assert_eq!(tree.language(), Language::Rust);
        assert!(!tree.has_error());
    }

    #[test]
    fn test_parse_recovers_from_errors() {
        let tree = parse(Language::Rust, b"fn main( {").unwrap();
        assert!(tree.has_error());
    }

    #[test]
    fn test_parse_empty_source() {
        let tree = parse(Language::Python, b"").unwrap();
        assert!(!tree.has_error());
    }

    #[test]
    fn test_every_default_query_compiles() {
        for language in Language::ALL {
            let query = default_query(language);
            assert!(query.is_ok(), "{} query failed: {:?}", language, query.err());
        }
    }

    #[test]
    fn test_compile_query_error_position() {
        let err = compile_query(Language::Python, "(function_definition\n  name: (identifier) @name")
            .unwrap_err();
        match err {
            SyntaxError::Query { language, .. } => assert_eq!(language, Language::Python),
            other => panic!("expected query error, got {other:?}"),
        }
    }

    #[test]
    fn test_compile_query_unknown_node() {
        let err = compile_query(Language::C, "(no_such_node) @keyword").unwrap_err();
        let message = err.to_string();
        match err {
            SyntaxError::Query { row, kind, .. } => {
                assert_eq!(row, 0);
                assert!(matches!(kind, QueryErrorKind::NodeType));
            }
            other => panic!("expected query error, got {other:?}"),
        }
        assert!(message.starts_with("invalid c query at line 1"));
    }

    #[test]
    fn test_custom_query_captures() {
        let source = "def f():\n    pass\n";
        let tree = parse(Language::Python, source.as_bytes()).unwrap();
        let query = compile_query(
            Language::Python,
            "\"def\" @keyword\n(function_definition name: (identifier) @function)",
        )
        .unwrap();
        assert_eq!(query.capture_names(), &["keyword", "function"]);

        let matches = query.run(&tree, source.as_bytes()).unwrap();
        let mut spans: Vec<_> = matches
            .iter()
            .flat_map(|m| m.captures.iter())
            .map(|c| (c.tag, c.start, c.end))
            .collect();
        spans.sort_by_key(|&(_, start, _)| start);
        assert_eq!(spans, [("keyword", 0, 3), ("function", 4, 5)]);
    }

    #[test]
    fn test_default_query_highlights_rust() {
        let tags = tags_for(Language::Rust, "fn main() { let s = \"hi\"; }");
        assert!(tags.iter().any(|(tag, text)| tag.starts_with("keyword") && text == "fn"));
        assert!(tags.iter().any(|(tag, text)| tag == "string" && text == "\"hi\""));
    }

    #[test]
    fn test_default_query_highlights_python_comment() {
        let tags = tags_for(Language::Python, "x = 1  # note\n");
        assert!(tags.iter().any(|(tag, text)| tag == "comment" && text == "# note"));
    }

    #[test]
    fn test_captures_lie_within_source() {
        let source = "int main(void) { return 0; }\n";
        let tree = parse(Language::Cpp, source.as_bytes()).unwrap();
        let query = default_query(Language::Cpp).unwrap();
        for m in query.run(&tree, source.as_bytes()).unwrap() {
            for c in m.captures {
                assert!(c.start <= c.end && c.end <= source.len());
            }
        }
    }

    #[test]
    fn test_language_mismatch() {
        let tree = parse(Language::Rust, b"fn main() {}").unwrap();
        let query = default_query(Language::Python).unwrap();
        assert!(matches!(
            query.run(&tree, b"fn main() {}"),
            Err(SyntaxError::LanguageMismatch {
                query: Language::Python,
                tree: Language::Rust,
            })
        ));
    }
}
