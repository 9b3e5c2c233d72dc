//! Capture and match types.
//!
//! These are the renderer's view of a query engine's output. Tags are
//! borrowed from whatever owns the capture names (normally the compiled
//! query), so building a match allocates one `Vec` and nothing per capture.

/// A tagged byte range over the source buffer.
///
/// Valid captures satisfy `start < end <= source.len()`. Invalid ones can
/// still be constructed; the renderer filters them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture<'q> {
    /// Dotted capture name, e.g. `keyword.control`.
    pub tag: &'q str,
    /// First byte of the range.
    pub start: usize,
    /// One past the last byte of the range.
    pub end: usize,
}

impl<'q> Capture<'q> {
    pub const fn new(tag: &'q str, start: usize, end: usize) -> Self {
        Self { tag, start, end }
    }

    /// Returns true if the range is non-empty and lies within a buffer of
    /// `len` bytes.
    pub fn is_valid_for(&self, len: usize) -> bool {
        self.start < self.end && self.end <= len
    }
}

/// The captures produced by one firing of a query pattern.
///
/// Captures within a match carry no particular order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Match<'q> {
    pub captures: Vec<Capture<'q>>,
}

impl<'q> Match<'q> {
    pub fn new(captures: Vec<Capture<'q>>) -> Self {
        Self { captures }
    }

    pub fn len(&self) -> usize {
        self.captures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }
}

impl<'q> From<Vec<Capture<'q>>> for Match<'q> {
    fn from(captures: Vec<Capture<'q>>) -> Self {
        Self::new(captures)
    }
}

impl<'q> FromIterator<Capture<'q>> for Match<'q> {
    fn from_iter<I: IntoIterator<Item = Capture<'q>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
