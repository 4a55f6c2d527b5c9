//! # Window Utilities
//!
//! Callers express scan windows as standard [`RangeBounds`] values
//! (``2..7``, ``2..``, ``..``, ``..=5``); these helpers resolve them
//! against a haystack length. An unbounded end is the "to the end"
//! sentinel.

use core::ops::{Bound, Range, RangeBounds};

/// Resolve a [`RangeBounds`] window into raw ``(start, end)`` indices.
///
/// ## Arguments
/// * `window` - the window to resolve.
/// * `len` - the haystack length, substituted for an unbounded end.
///
/// ## Returns
/// The ``(start, end)`` pair, unclamped: `end` may exceed `len`, and
/// `start` may exceed `end`.
pub fn resolve_bounds(
    window: &impl RangeBounds<usize>,
    len: usize,
) -> (usize, usize) {
    let start = match window.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match window.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };
    (start, end)
}

/// Clamp a [`RangeBounds`] window to ``[0, len]``.
///
/// Unlike slice indexing this never panics: a start past the end, or an
/// end before the start, yields an empty range positioned at the
/// clamped start.
///
/// ## Arguments
/// * `window` - the window to clamp.
/// * `len` - the haystack length.
///
/// ## Returns
/// The clamped half-open [`Range`], with ``start <= end <= len``.
///
/// ```
/// use bytechop::ranges::clamp_range;
///
/// assert_eq!(clamp_range(&(2..7), 10), 2..7);
/// assert_eq!(clamp_range(&(2..), 4), 2..4);
/// assert_eq!(clamp_range(&(7..9), 4), 4..4);
/// ```
pub fn clamp_range(
    window: &impl RangeBounds<usize>,
    len: usize,
) -> Range<usize> {
    let (start, end) = resolve_bounds(window, len);
    let start = start.min(len);
    let end = end.min(len).max(start);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_bounds() {
        assert_eq!(resolve_bounds(&(2..7), 10), (2, 7));
        assert_eq!(resolve_bounds(&(2..=7), 10), (2, 8));
        assert_eq!(resolve_bounds(&(2..), 10), (2, 10));
        assert_eq!(resolve_bounds(&(..3), 10), (0, 3));
        assert_eq!(resolve_bounds(&(..), 10), (0, 10));

        // No clamping at this layer.
        assert_eq!(resolve_bounds(&(12..20), 10), (12, 20));
        assert_eq!(resolve_bounds(&(5..2), 10), (5, 2));
    }

    #[test]
    fn test_clamp_range() {
        assert_eq!(clamp_range(&(2..7), 10), 2..7);
        assert_eq!(clamp_range(&(2..=7), 10), 2..8);
        assert_eq!(clamp_range(&(2..), 4), 2..4);
        assert_eq!(clamp_range(&(..), 4), 0..4);
        assert_eq!(clamp_range(&(..0), 4), 0..0);

        // Start past the end: empty, positioned at len.
        assert_eq!(clamp_range(&(7..), 4), 4..4);
        assert_eq!(clamp_range(&(12..20), 4), 4..4);

        // Inverted: empty, positioned at the clamped start.
        assert_eq!(clamp_range(&(3..1), 10), 3..3);

        assert_eq!(clamp_range(&(0..0), 0), 0..0);
        assert_eq!(clamp_range(&(..), 0), 0..0);
    }

    #[test]
    fn test_clamp_is_sliceable() {
        let text = b"ola mundo";
        for (start, end) in [(0, 9), (2, 40), (9, 9), (30, 2)] {
            let range = clamp_range(&(start..end), text.len());
            // Always a valid slice of the original.
            let _ = &text[range];
        }
    }
}
