//! Terminal backend.

use codetint_theme::{Style, TagStyle, Theme, RESET};

use super::{pad_line_number, Emitter};

/// Writes styled runs as `<sgr><bytes><reset>`.
///
/// Source bytes are written untouched. Line labels read
/// `<label-style><number>│<reset> `; a label injected in the middle of a
/// styled run re-opens the run's style afterwards, so a multi-line comment
/// keeps its color on every line.
pub struct AnsiEmitter {
    out: Vec<u8>,
    line_number: Style,
    active: Option<Style>,
}

impl AnsiEmitter {
    /// Creates an emitter using `theme`'s line-number style.
    pub fn new(theme: &Theme) -> Self {
        Self::with_capacity(theme, 0)
    }

    /// Creates an emitter with room for `capacity` output bytes.
    pub fn with_capacity(theme: &Theme, capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
            line_number: theme.line_number_style(),
            active: None,
        }
    }
}

impl Emitter for AnsiEmitter {
    fn open(&mut self, style: &TagStyle) {
        style.ansi.write_sgr(&mut self.out);
        self.active = Some(style.ansi);
    }

    fn close(&mut self) {
        self.out.extend_from_slice(RESET.as_bytes());
        self.active = None;
    }

    fn text(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    fn line_label(&mut self, line: usize, width: usize) {
        self.line_number.write_sgr(&mut self.out);
        self.out
            .extend_from_slice(pad_line_number(line, width).as_bytes());
        self.out.extend_from_slice("│".as_bytes());
        self.out.extend_from_slice(RESET.as_bytes());
        self.out.push(b' ');

        if let Some(active) = self.active {
            active.write_sgr(&mut self.out);
        }
    }

    fn finish(self) -> Vec<u8> {
        self.out
    }
}
