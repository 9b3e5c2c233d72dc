//! Line-number label injection.

use crate::emitter::Emitter;

/// Labels are never narrower than this many columns.
pub const MIN_LABEL_WIDTH: usize = 4;

/// Returns the label width for `source`: the digit count of its line count,
/// but at least [`MIN_LABEL_WIDTH`].
///
/// The line count is one more than the number of `'\n'` bytes, so an empty
/// buffer and a buffer without newlines both count as one line.
pub fn label_width(source: &[u8]) -> usize {
    let lines = memchr::memchr_iter(b'\n', source).count() + 1;
    digit_count(lines).max(MIN_LABEL_WIDTH)
}

fn digit_count(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    AtLineStart,
    InLine,
}

/// Tracks line starts across the whole render and injects a label before
/// the first byte of every line.
///
/// All source bytes reach the emitter through [`LineTracker::write`], which
/// splits them at newlines, so a styled run spanning several lines gets a
/// label on each of them. A line with no bytes after its start (the
/// position after a trailing newline, or an empty buffer) gets no label.
#[derive(Debug)]
pub struct LineTracker {
    enabled: bool,
    width: usize,
    line: usize,
    state: LineState,
}

impl LineTracker {
    /// Creates a tracker for `source`. When `enabled` is false it passes
    /// bytes straight through.
    pub fn new(source: &[u8], enabled: bool) -> Self {
        let width = if enabled { label_width(source) } else { 0 };
        Self {
            enabled,
            width,
            line: 1,
            state: LineState::AtLineStart,
        }
    }

    /// The line the next byte belongs to, 1-based.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of labels emitted so far.
    pub fn labels_emitted(&self) -> usize {
        match self.state {
            LineState::AtLineStart => self.line - 1,
            LineState::InLine => self.line,
        }
    }

    /// Emits the pending label, if any, without writing source bytes.
    ///
    /// Called before opening a styled run that is known to be non-empty, so
    /// the label sits outside the run's markup.
    pub fn mark_line_start<E: Emitter>(&mut self, emitter: &mut E) {
        if self.enabled && self.state == LineState::AtLineStart {
            emitter.line_label(self.line, self.width);
            self.state = LineState::InLine;
        }
    }

    /// Writes `bytes` to `emitter`, injecting labels at line starts.
    pub fn write<E: Emitter>(&mut self, bytes: &[u8], emitter: &mut E) {
        if !self.enabled {
            emitter.text(bytes);
            return;
        }

        for chunk in bytes.split_inclusive(|&b| b == b'\n') {
            self.mark_line_start(emitter);
            emitter.text(chunk);
            if chunk.last() == Some(&b'\n') {
                self.line += 1;
                self.state = LineState::AtLineStart;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codetint_theme::TagStyle;

    /// Records calls as a readable string.
    #[derive(Default)]
    struct Recorder(String);

    impl Emitter for Recorder {
        fn open(&mut self, _style: &TagStyle) {
            self.0.push('{');
        }

        fn close(&mut self) {
            self.0.push('}');
        }

        fn text(&mut self, bytes: &[u8]) {
            self.0.push_str(&String::from_utf8_lossy(bytes));
        }

        fn line_label(&mut self, line: usize, width: usize) {
            self.0.push_str(&format!("[{line}/{width}]"));
        }

        fn finish(self) -> Vec<u8> {
            self.0.into_bytes()
        }
    }

    #[test]
    fn test_label_width() {
        assert_eq!(label_width(b""), 4);
        assert_eq!(label_width(b"one line"), 4);
        assert_eq!(label_width(&b"\n".repeat(9_998)), 4);
        assert_eq!(label_width(&b"\n".repeat(9_999)), 5);
        assert_eq!(label_width(&b"x\n".repeat(123_456)), 6);
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(100_000), 6);
    }

    #[test]
    fn test_disabled_passes_through() {
        let source = b"a\nb\n";
        let mut tracker = LineTracker::new(source, false);
        let mut out = Recorder::default();
        tracker.write(source, &mut out);
        assert_eq!(out.0, "a\nb\n");
        assert_eq!(tracker.width(), 0);
    }

    #[test]
    fn test_labels_each_line() {
        let source = b"a\nb\nc";
        let mut tracker = LineTracker::new(source, true);
        let mut out = Recorder::default();
        tracker.write(source, &mut out);
        assert_eq!(out.0, "[1/4]a\n[2/4]b\n[3/4]c");
        assert_eq!(tracker.labels_emitted(), 3);
    }

    #[test]
    fn test_no_label_after_trailing_newline() {
        let source = b"a\n";
        let mut tracker = LineTracker::new(source, true);
        let mut out = Recorder::default();
        tracker.write(source, &mut out);
        assert_eq!(out.0, "[1/4]a\n");
        assert_eq!(tracker.line(), 2);
        assert_eq!(tracker.labels_emitted(), 1);
    }

    #[test]
    fn test_state_carries_across_writes() {
        let source = b"abc\ndef";
        let mut tracker = LineTracker::new(source, true);
        let mut out = Recorder::default();
        tracker.write(b"ab", &mut out);
        tracker.write(b"c\n", &mut out);
        tracker.write(b"", &mut out);
        tracker.write(b"def", &mut out);
        assert_eq!(out.0, "[1/4]abc\n[2/4]def");
    }

    #[test]
    fn test_mark_line_start_only_once() {
        let source = b"x";
        let mut tracker = LineTracker::new(source, true);
        let mut out = Recorder::default();
        tracker.mark_line_start(&mut out);
        tracker.mark_line_start(&mut out);
        tracker.write(source, &mut out);
        assert_eq!(out.0, "[1/4]x");
    }

    #[test]
    fn test_empty_lines_are_labeled() {
        let source = b"\n\nx";
        let mut tracker = LineTracker::new(source, true);
        let mut out = Recorder::default();
        tracker.write(source, &mut out);
        assert_eq!(out.0, "[1/4]\n[2/4]\n[3/4]x");
    }
}
