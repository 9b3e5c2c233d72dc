//! Highlight classes and the capture-tag table.
//!
//! Grammars name their captures with dotted tags. Themes only color a
//! fixed set of [`HighlightClass`]es, so every tag is first resolved to a
//! class. Resolution tries the exact tag, then progressively shorter
//! prefixes (`string.special.path` → `string.special` → `string`).

/// A highlight category every theme provides a color for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightClass {
    FunctionBuiltin,
    Function,
    String,
    Comment,
    Keyword,
    KeywordControl,
    Type,
    Variable,
    Constant,
    Literal,
}

impl HighlightClass {
    /// Number of classes; the length of every theme palette.
    pub const COUNT: usize = 10;

    /// All classes, in palette order.
    pub const ALL: [HighlightClass; Self::COUNT] = [
        HighlightClass::FunctionBuiltin,
        HighlightClass::Function,
        HighlightClass::String,
        HighlightClass::Comment,
        HighlightClass::Keyword,
        HighlightClass::KeywordControl,
        HighlightClass::Type,
        HighlightClass::Variable,
        HighlightClass::Constant,
        HighlightClass::Literal,
    ];

    /// Position of this class in a theme palette.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The canonical capture tag for this class.
    pub const fn tag(self) -> &'static str {
        match self {
            HighlightClass::FunctionBuiltin => "function.builtin",
            HighlightClass::Function => "function",
            HighlightClass::String => "string",
            HighlightClass::Comment => "comment",
            HighlightClass::Keyword => "keyword",
            HighlightClass::KeywordControl => "keyword.control",
            HighlightClass::Type => "type",
            HighlightClass::Variable => "variable",
            HighlightClass::Constant => "constant",
            HighlightClass::Literal => "literal",
        }
    }

    /// The CSS class name used by HTML output.
    pub const fn css_class(self) -> &'static str {
        match self {
            HighlightClass::FunctionBuiltin => "function-builtin",
            HighlightClass::Function => "function",
            HighlightClass::String => "string",
            HighlightClass::Comment => "comment",
            HighlightClass::Keyword => "keyword",
            HighlightClass::KeywordControl => "keyword-control",
            HighlightClass::Type => "type",
            HighlightClass::Variable => "variable",
            HighlightClass::Constant => "constant",
            HighlightClass::Literal => "literal",
        }
    }
}

/// The classes a tag resolves to in each backend.
///
/// The two only differ for `keyword.type`, which keeps the keyword color in
/// the terminal but is rendered as a type in HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagClasses {
    pub ansi: HighlightClass,
    pub html: HighlightClass,
}

impl TagClasses {
    const fn same(class: HighlightClass) -> Self {
        Self {
            ansi: class,
            html: class,
        }
    }
}

/// Resolves a capture tag to its highlight classes.
///
/// Returns `None` when neither the tag nor any of its prefixes is known.
pub fn classify(tag: &str) -> Option<TagClasses> {
    if let Some(classes) = exact(tag) {
        return Some(classes);
    }

    let mut prefix = tag;
    while let Some(dot_pos) = prefix.rfind('.') {
        prefix = &prefix[..dot_pos];
        if let Some(classes) = exact(prefix) {
            return Some(classes);
        }
    }

    None
}

fn exact(tag: &str) -> Option<TagClasses> {
    use HighlightClass::*;

    let classes = match tag {
        "function.builtin" => TagClasses::same(FunctionBuiltin),
        "function" | "function.call" => TagClasses::same(Function),
        "string" => TagClasses::same(String),
        "comment" => TagClasses::same(Comment),
        "keyword.control" => TagClasses::same(KeywordControl),
        "keyword" | "keyword.function" | "keyword.import" | "keyword.return" => {
            TagClasses::same(Keyword)
        }
        "keyword.type" => TagClasses {
            ansi: Keyword,
            html: Type,
        },
        "type" => TagClasses::same(Type),
        "variable" => TagClasses::same(Variable),
        "constant" | "constant.builtin" => TagClasses::same(Constant),
        "literal" | "number" => TagClasses::same(Literal),
        _ => return None,
    };
    Some(classes)
}
