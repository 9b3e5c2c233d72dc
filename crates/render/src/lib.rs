//! codetint-render: turns query captures into highlighted output.
//!
//! The renderer knows nothing about grammars or parsing. It takes the
//! source bytes, the matches some query engine produced over them (in the
//! engine's order), a [`Theme`] and a few options, and walks the source once:
//!
//! - [`normalize`]: orders each match's captures by start offset
//! - [`IntervalMerger`]: decides which bytes are plain and which are
//!   styled, first capture wins
//! - [`LineTracker`]: injects line-number labels at every line start
//! - [`emitter`]: writes ANSI escape sequences or HTML spans
//!
//! Rendering cannot fail. Captures that are empty, out of bounds or that
//! start inside already-written text are dropped, and tags with no theme
//! entry render unstyled. The output always contains every source byte
//! exactly once, in order.
//!
//! # Example
//!
//! ```
//! use codetint_render::{render, Capture, Match, RenderOptions};
//! use codetint_theme::Theme;
//!
//! let source = b"def f():\n    pass\n";
//! let matches = vec![Match::new(vec![
//!     Capture::new("keyword", 0, 3),
//!     Capture::new("function", 4, 5),
//! ])];
//!
//! let out = render(source, matches, Theme::default_theme(), &RenderOptions::default());
//! assert_eq!(out, b"\x1b[31mdef\x1b[0m \x1b[34mf\x1b[0m():\n    pass\n");
//! ```

mod capture;
mod document;
pub mod emitter;
mod line_tracker;
mod merge;
pub mod normalize;

pub use capture::{Capture, Match};
pub use document::HtmlDocument;
pub use emitter::{escape_html, AnsiEmitter, Emitter, HtmlEmitter};
pub use line_tracker::{label_width, LineTracker, MIN_LABEL_WIDTH};
pub use merge::{IntervalMerger, RenderStats};

use codetint_theme::Theme;

/// Render settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Write HTML spans instead of ANSI escape sequences.
    pub html: bool,
    /// Prefix every line with its number.
    pub line_numbers: bool,
}

/// Renders `source` with the captures in `matches`.
///
/// Matches are consumed in iteration order; see [`IntervalMerger`] for how
/// overlapping captures are resolved.
pub fn render<'q, I>(source: &[u8], matches: I, theme: &Theme, options: &RenderOptions) -> Vec<u8>
where
    I: IntoIterator<Item = Match<'q>>,
{
    render_with_stats(source, matches, theme, options).0
}

/// Like [`render`], also returning what happened to the captures.
pub fn render_with_stats<'q, I>(
    source: &[u8],
    matches: I,
    theme: &Theme,
    options: &RenderOptions,
) -> (Vec<u8>, RenderStats)
where
    I: IntoIterator<Item = Match<'q>>,
{
    if options.html {
        let emitter = HtmlEmitter::with_capacity(source.len() * 2);
        render_with(source, matches, theme, emitter, options.line_numbers)
    } else {
        let emitter = AnsiEmitter::with_capacity(theme, source.len() * 2);
        render_with(source, matches, theme, emitter, options.line_numbers)
    }
}

/// Renders through a caller-supplied emitter.
pub fn render_with<'q, I, E>(
    source: &[u8],
    matches: I,
    theme: &Theme,
    emitter: E,
    line_numbers: bool,
) -> (Vec<u8>, RenderStats)
where
    I: IntoIterator<Item = Match<'q>>,
    E: Emitter,
{
    let mut merger = IntervalMerger::new(source, theme, emitter, line_numbers);
    for m in matches {
        merger.feed(m);
    }
    merger.finish()
}
