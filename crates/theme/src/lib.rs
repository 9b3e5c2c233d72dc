//! codetint-theme: colour themes for codetint.
//!
//! This crate owns everything a renderer needs to turn a capture tag into
//! something visible:
//!
//! - [`Color`] and [`Style`]: terminal styling, with [`Style::write_sgr`]
//!   producing the escape sequence that opens a styled run.
//! - [`Rgb`]: hex colours used by HTML output.
//! - [`HighlightClass`]: the closed set of highlight categories every theme
//!   provides a colour for, and the tag table that maps capture names
//!   (`keyword.control`, `function.builtin`, ...) onto them.
//! - [`Theme`]: one of the built-in palettes, looked up by name.
//!
//! # Example
//!
//! ```
//! use codetint_theme::{HighlightClass, Theme};
//!
//! let theme = Theme::by_name("dracula").unwrap();
//! let style = theme.style_for_tag("keyword.return");
//! assert_eq!(style.class, Some(HighlightClass::Keyword));
//!
//! // Unknown tags resolve to the plain fallback instead of failing.
//! let unknown = theme.style_for_tag("punctuation.bracket");
//! assert_eq!(unknown.class, None);
//! ```

mod class;
mod style;
mod theme;

pub use class::{classify, HighlightClass, TagClasses};
pub use style::{Color, NamedColor, Rgb, Style, RESET};
pub use theme::{TagStyle, Theme, BUILTIN_THEMES, DEFAULT_THEME};
