//! The capture walk.
//!
//! [`IntervalMerger`] consumes matches in the order the query engine yields
//! them and walks the source exactly once, alternating plain gaps and
//! styled runs. The first capture to claim a byte wins it: later captures
//! that start inside already-written text are skipped, never re-styled.

use codetint_theme::Theme;

use crate::capture::{Capture, Match};
use crate::emitter::Emitter;
use crate::line_tracker::LineTracker;
use crate::normalize::normalize_match;

/// Counters collected over one render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Matches fed to the merger.
    pub matches: usize,
    /// Captures written as styled runs.
    pub styled: usize,
    /// Captures dropped as empty or out of bounds.
    pub invalid: usize,
    /// Captures dropped because their start was already written.
    pub overlapped: usize,
    /// Line labels written.
    pub line_labels: usize,
}

/// Single-pass renderer state for one source buffer.
pub struct IntervalMerger<'s, E> {
    source: &'s [u8],
    theme: &'s Theme,
    emitter: E,
    lines: LineTracker,
    cursor: usize,
    stats: RenderStats,
}

impl<'s, E: Emitter> IntervalMerger<'s, E> {
    pub fn new(source: &'s [u8], theme: &'s Theme, emitter: E, line_numbers: bool) -> Self {
        Self {
            source,
            theme,
            emitter,
            lines: LineTracker::new(source, line_numbers),
            cursor: 0,
            stats: RenderStats::default(),
        }
    }

    /// Offset of the first byte not yet written.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Orders one match's captures and writes them.
    pub fn feed(&mut self, m: Match<'_>) {
        self.stats.matches += 1;
        for capture in normalize_match(m).captures {
            self.feed_capture(capture);
        }
    }

    fn feed_capture(&mut self, capture: Capture<'_>) {
        if !capture.is_valid_for(self.source.len()) {
            tracing::trace!(
                tag = capture.tag,
                start = capture.start,
                end = capture.end,
                "dropping invalid capture"
            );
            self.stats.invalid += 1;
            return;
        }
        if capture.start < self.cursor {
            self.stats.overlapped += 1;
            return;
        }

        if capture.start > self.cursor {
            self.write_plain(self.cursor, capture.start);
        }

        let start = self.cursor.max(capture.start);
        if start < capture.end {
            let style = self.theme.style_for_tag(capture.tag);
            self.lines.mark_line_start(&mut self.emitter);
            self.emitter.open(&style);
            self.lines
                .write(&self.source[start..capture.end], &mut self.emitter);
            self.emitter.close();
            self.stats.styled += 1;
        }

        self.cursor = self.cursor.max(capture.end);
    }

    fn write_plain(&mut self, start: usize, end: usize) {
        self.lines.write(&self.source[start..end], &mut self.emitter);
    }

    /// Writes the unclaimed tail and returns the output with the stats.
    pub fn finish(mut self) -> (Vec<u8>, RenderStats) {
        if self.cursor < self.source.len() {
            self.write_plain(self.cursor, self.source.len());
            self.cursor = self.source.len();
        }
        self.stats.line_labels = self.lines.labels_emitted();

        tracing::debug!(
            bytes = self.source.len(),
            matches = self.stats.matches,
            styled = self.stats.styled,
            invalid = self.stats.invalid,
            overlapped = self.stats.overlapped,
            "render complete"
        );

        (self.emitter.finish(), self.stats)
    }
}
