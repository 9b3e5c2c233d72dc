//! Language registry mapping names and file extensions to tree-sitter
//! grammars and their bundled highlight queries.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

/// Grammar and default highlight query for one language.
pub struct LanguageConfig {
    /// The tree-sitter grammar.
    pub grammar: tree_sitter::Language,
    /// The highlights query (tree-sitter query syntax).
    pub highlights_query: Cow<'static, str>,
}

/// A supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    C,
    Cpp,
    JavaScript,
    TypeScript,
    Tsx,
    Rust,
    Go,
    Json,
    Toml,
    Html,
    Css,
    Bash,
    Markdown,
}

impl Language {
    pub const ALL: [Language; 14] = [
        Language::Python,
        Language::C,
        Language::Cpp,
        Language::JavaScript,
        Language::TypeScript,
        Language::Tsx,
        Language::Rust,
        Language::Go,
        Language::Json,
        Language::Toml,
        Language::Html,
        Language::Css,
        Language::Bash,
        Language::Markdown,
    ];

    /// Canonical name, as accepted by `-l`.
    pub const fn name(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Tsx => "tsx",
            Language::Rust => "rust",
            Language::Go => "go",
            Language::Json => "json",
            Language::Toml => "toml",
            Language::Html => "html",
            Language::Css => "css",
            Language::Bash => "bash",
            Language::Markdown => "markdown",
        }
    }

    /// File extensions, without the leading dot.
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Language::Python => &["py", "pyi"],
            Language::C => &["c"],
            // .h is ambiguous, default to C++
            Language::Cpp => &["cpp", "cc", "cxx", "hpp", "hh", "h"],
            Language::JavaScript => &["js", "jsx", "mjs", "cjs"],
            Language::TypeScript => &["ts", "mts", "cts"],
            Language::Tsx => &["tsx"],
            Language::Rust => &["rs"],
            Language::Go => &["go"],
            Language::Json => &["json"],
            Language::Toml => &["toml"],
            Language::Html => &["html", "htm"],
            Language::Css => &["css"],
            Language::Bash => &["sh", "bash", "zsh"],
            Language::Markdown => &["md", "markdown"],
        }
    }

    /// Looks up a language by name.
    ///
    /// Names are matched case-insensitively after trimming. Common aliases
    /// are accepted, and anything else is tried as a file extension, so
    /// `rs` and `py` work too.
    ///
    /// # Supported aliases
    ///
    /// - "py" → python
    /// - "js", "node" → javascript
    /// - "ts" → typescript
    /// - "c++" → cpp
    /// - "golang" → go
    /// - "shell", "sh", "zsh" → bash
    /// - "md" → markdown
    pub fn from_name(name: &str) -> Option<Language> {
        let name = name.trim().to_lowercase();

        let language = match name.as_str() {
            "python" | "py" => Language::Python,
            "c" => Language::C,
            "cpp" | "c++" => Language::Cpp,
            "javascript" | "js" | "node" => Language::JavaScript,
            "typescript" | "ts" => Language::TypeScript,
            "tsx" => Language::Tsx,
            "rust" => Language::Rust,
            "go" | "golang" => Language::Go,
            "json" => Language::Json,
            "toml" => Language::Toml,
            "html" => Language::Html,
            "css" => Language::Css,
            "bash" | "shell" | "sh" | "zsh" => Language::Bash,
            "markdown" | "md" => Language::Markdown,
            other => return Language::from_extension(other),
        };
        Some(language)
    }

    /// Looks up a language by file extension.
    ///
    /// The extension can be with or without a leading dot (e.g., ".rs" or "rs").
    pub fn from_extension(ext: &str) -> Option<Language> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        Language::ALL
            .into_iter()
            .find(|language| language.extensions().iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    /// Looks up a language from a path's extension.
    pub fn from_path(path: &Path) -> Option<Language> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Language::from_extension)
    }

    /// Canonical names of all languages.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Language::ALL.into_iter().map(Language::name)
    }

    /// Returns the grammar and default highlight query.
    pub fn config(self) -> LanguageConfig {
        let (grammar, highlights_query): (tree_sitter::Language, Cow<'static, str>) = match self {
            Language::Python => (
                tree_sitter_python::LANGUAGE.into(),
                tree_sitter_python::HIGHLIGHTS_QUERY.into(),
            ),
            Language::C => (
                tree_sitter_c::LANGUAGE.into(),
                tree_sitter_c::HIGHLIGHT_QUERY.into(),
            ),
            // The C++ grammar's query only covers C++-specific constructs
            // (templates, namespaces, `this`); types, keywords and functions
            // come from the C query.
            Language::Cpp => (
                tree_sitter_cpp::LANGUAGE.into(),
                layered(tree_sitter_c::HIGHLIGHT_QUERY, tree_sitter_cpp::HIGHLIGHT_QUERY),
            ),
            Language::JavaScript => (
                tree_sitter_javascript::LANGUAGE.into(),
                tree_sitter_javascript::HIGHLIGHT_QUERY.into(),
            ),
            // TypeScript and TSX extend JavaScript the same way.
            Language::TypeScript => (
                tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
                layered(
                    tree_sitter_javascript::HIGHLIGHT_QUERY,
                    tree_sitter_typescript::HIGHLIGHTS_QUERY,
                ),
            ),
            Language::Tsx => (
                tree_sitter_typescript::LANGUAGE_TSX.into(),
                layered(
                    tree_sitter_javascript::HIGHLIGHT_QUERY,
                    tree_sitter_typescript::HIGHLIGHTS_QUERY,
                ),
            ),
            Language::Rust => (
                tree_sitter_rust::LANGUAGE.into(),
                tree_sitter_rust::HIGHLIGHTS_QUERY.into(),
            ),
            Language::Go => (
                tree_sitter_go::LANGUAGE.into(),
                tree_sitter_go::HIGHLIGHTS_QUERY.into(),
            ),
            Language::Json => (
                tree_sitter_json::LANGUAGE.into(),
                tree_sitter_json::HIGHLIGHTS_QUERY.into(),
            ),
            Language::Toml => (
                tree_sitter_toml_ng::LANGUAGE.into(),
                tree_sitter_toml_ng::HIGHLIGHTS_QUERY.into(),
            ),
            Language::Html => (
                tree_sitter_html::LANGUAGE.into(),
                tree_sitter_html::HIGHLIGHTS_QUERY.into(),
            ),
            Language::Css => (
                tree_sitter_css::LANGUAGE.into(),
                tree_sitter_css::HIGHLIGHTS_QUERY.into(),
            ),
            Language::Bash => (
                tree_sitter_bash::LANGUAGE.into(),
                tree_sitter_bash::HIGHLIGHT_QUERY.into(),
            ),
            // Block grammar only; inline markup is not highlighted.
            Language::Markdown => (
                tree_sitter_md::LANGUAGE.into(),
                tree_sitter_md::HIGHLIGHT_QUERY_BLOCK.into(),
            ),
        };

        LanguageConfig {
            grammar,
            highlights_query,
        }
    }
}

/// Concatenates a base query with the one that extends it.
fn layered(base: &'static str, extension: &'static str) -> Cow<'static, str> {
    Cow::Owned(format!("{base}\n{extension}"))
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_extension() {
        assert_eq!(Language::from_extension("rs"), Some(Language::Rust));
        assert_eq!(Language::from_extension(".rs"), Some(Language::Rust));
    }

    #[test]
    fn test_cpp_extensions() {
        for ext in ["cpp", "cc", "cxx", "hpp", "h"] {
            assert_eq!(
                Language::from_extension(ext),
                Some(Language::Cpp),
                "Extension '{}' should be C++",
                ext
            );
        }
        assert_eq!(Language::from_extension("c"), Some(Language::C));
    }

    #[test]
    fn test_javascript_extensions() {
        for ext in ["js", "jsx", "mjs"] {
            assert_eq!(Language::from_extension(ext), Some(Language::JavaScript));
        }
        assert_eq!(Language::from_extension("ts"), Some(Language::TypeScript));
        assert_eq!(Language::from_extension("tsx"), Some(Language::Tsx));
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(Language::from_extension("PY"), Some(Language::Python));
        assert_eq!(Language::from_extension(".Html"), Some(Language::Html));
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(Language::from_extension("xyz"), None);
        assert_eq!(Language::from_extension("txt"), None);
        assert_eq!(Language::from_extension(""), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            Language::from_path(Path::new("src/main.rs")),
            Some(Language::Rust)
        );
        assert_eq!(
            Language::from_path(Path::new("/tmp/x/test.py")),
            Some(Language::Python)
        );
        assert_eq!(Language::from_path(Path::new("Makefile")), None);
        assert_eq!(Language::from_path(Path::new(".bashrc")), None);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Language::from_name("python"), Some(Language::Python));
        assert_eq!(Language::from_name("  Python "), Some(Language::Python));
        assert_eq!(Language::from_name("c++"), Some(Language::Cpp));
        assert_eq!(Language::from_name("golang"), Some(Language::Go));
        assert_eq!(Language::from_name("shell"), Some(Language::Bash));
        assert_eq!(Language::from_name("JS"), Some(Language::JavaScript));
    }

    #[test]
    fn test_from_name_falls_back_to_extension() {
        assert_eq!(Language::from_name("rs"), Some(Language::Rust));
        assert_eq!(Language::from_name("htm"), Some(Language::Html));
        assert_eq!(Language::from_name("cobol"), None);
    }

    #[test]
    fn test_names_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_name(language.name()), Some(language));
            assert_eq!(language.to_string(), language.name());
        }
        assert_eq!(Language::names().count(), Language::ALL.len());
    }

    #[test]
    fn test_extensions_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for language in Language::ALL {
            for ext in language.extensions() {
                assert!(seen.insert(*ext), "extension '{}' listed twice", ext);
            }
        }
    }

    #[test]
    fn test_layered_queries_include_base() {
        let cpp = Language::Cpp.config();
        assert!(cpp.highlights_query.starts_with(tree_sitter_c::HIGHLIGHT_QUERY));
        assert!(cpp.highlights_query.ends_with(tree_sitter_cpp::HIGHLIGHT_QUERY));

        let ts = Language::TypeScript.config();
        assert!(ts
            .highlights_query
            .starts_with(tree_sitter_javascript::HIGHLIGHT_QUERY));
    }

    #[test]
    fn test_every_language_has_a_query() {
        for language in Language::ALL {
            assert!(
                !language.config().highlights_query.trim().is_empty(),
                "{} has an empty highlights query",
                language
            );
        }
    }
}
