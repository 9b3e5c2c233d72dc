//! Per-match capture ordering.

use crate::capture::{Capture, Match};

/// Sorts captures by start offset.
///
/// The sort is stable: captures starting at the same byte keep the order
/// the query engine produced them in, and the first of them wins the range.
pub fn sort_captures(captures: &mut [Capture<'_>]) {
    captures.sort_by_key(|capture| capture.start);
}

/// Returns the match with its captures ordered by start offset.
///
/// Matches are never merged with each other; each one is ordered on its own
/// as it arrives.
pub fn normalize_match(mut m: Match<'_>) -> Match<'_> {
    sort_captures(&mut m.captures);
    m
}
