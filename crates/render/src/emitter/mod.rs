//! Output backends.
//!
//! An [`Emitter`] turns the merger's stream of plain runs, styled runs and
//! line labels into bytes. Two backends exist:
//!
//! - [`AnsiEmitter`]: raw bytes wrapped in SGR escape sequences
//! - [`HtmlEmitter`]: entity-escaped bytes wrapped in `<span>` elements
//!
//! Both write every source byte exactly once and in order; only the
//! markup around them differs.

mod ansi;
mod html;

pub use ansi::AnsiEmitter;
pub use html::{escape_html, HtmlEmitter};

use codetint_theme::TagStyle;

/// A rendering backend that appends to an owned output buffer.
///
/// Calls arrive in this shape: any number of `text` and `line_label` calls,
/// with styled runs bracketed by exactly one `open` and one `close`. Runs
/// never nest.
pub trait Emitter {
    /// Starts a styled run.
    fn open(&mut self, style: &TagStyle);

    /// Ends the run started by the last `open`.
    fn close(&mut self);

    /// Writes source bytes. May be called inside or outside a run.
    fn text(&mut self, bytes: &[u8]);

    /// Writes the label for `line`, right-justified to `width` digits.
    fn line_label(&mut self, line: usize, width: usize);

    /// Consumes the emitter and returns everything written.
    fn finish(self) -> Vec<u8>
    where
        Self: Sized;
}

/// Formats a line number right-justified to `width` columns.
pub(crate) fn pad_line_number(line: usize, width: usize) -> String {
    format!("{line:>width$}")
}
