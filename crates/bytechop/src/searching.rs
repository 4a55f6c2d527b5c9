//! # Windowed Range Search
//!
//! First/last occurrence of a byte, a byte-set member, or a substring,
//! restricted to an explicit window of the haystack; plus
//! non-overlapping occurrence counting.
//!
//! Returned indices are always absolute offsets into the full haystack.
//! Windows are clamped to the haystack bounds before scanning, so a
//! window that starts past the end is simply empty and "not found" is
//! `None`, never an error. Only the counting pair enforces a bounds
//! contract, and only on the window start (see [`try_count`]).
//!
//! Single-byte scans are accelerated with [`memchr`]; any-of scans run
//! a [`ByteSet`] membership test per byte of the clamped window, never
//! a substring copy.

use core::ops::RangeBounds;

use memchr::{memchr, memmem, memrchr};

use crate::byteset::ByteSet;
use crate::errors::{BCResult, BytechopError};
use crate::ranges::{clamp_range, resolve_bounds};

/// Find the first occurrence of `target` within `window`.
///
/// ## Arguments
/// * `text` - the haystack.
/// * `target` - the byte to look for.
/// * `window` - the index window to scan; clamped to the text bounds.
///
/// ## Returns
/// The absolute index of the first match in scan order, or `None`.
///
/// ```
/// use bytechop::searching::index_of;
///
/// assert_eq!(index_of("ola mundo", b'o', ..), Some(0));
/// assert_eq!(index_of("ola mundo", b'o', 1..), Some(8));
/// assert_eq!(index_of("ola mundo", b'o', 1..4), None);
/// assert_eq!(index_of("ola mundo", b'z', ..), None);
/// ```
pub fn index_of(
    text: impl AsRef<[u8]>,
    target: u8,
    window: impl RangeBounds<usize>,
) -> Option<usize> {
    let bytes = text.as_ref();
    let window = clamp_range(&window, bytes.len());
    let start = window.start;
    memchr(target, &bytes[window]).map(|idx| start + idx)
}

/// Find the last occurrence of `target` within `window`.
///
/// The result is the maximum matching index inside the window, not
/// merely "some" match.
///
/// ## Arguments
/// * `text` - the haystack.
/// * `target` - the byte to look for.
/// * `window` - the index window to scan; clamped to the text bounds.
///
/// ## Returns
/// The absolute index of the last match, or `None`.
///
/// ```
/// use bytechop::searching::last_index_of;
///
/// assert_eq!(last_index_of("ola mundo", b'o', ..), Some(8));
/// assert_eq!(last_index_of("ola mundo", b'o', ..8), Some(0));
/// ```
pub fn last_index_of(
    text: impl AsRef<[u8]>,
    target: u8,
    window: impl RangeBounds<usize>,
) -> Option<usize> {
    let bytes = text.as_ref();
    let window = clamp_range(&window, bytes.len());
    let start = window.start;
    memrchr(target, &bytes[window]).map(|idx| start + idx)
}

/// Find the first byte within `window` that is a member of `set`.
///
/// Window boundaries are exact: a byte outside the clamped window is
/// never a match, even if it is the nearest occurrence in the full
/// text.
///
/// ## Arguments
/// * `text` - the haystack.
/// * `set` - the match candidates.
/// * `window` - the index window to scan; clamped to the text bounds.
///
/// ## Returns
/// The absolute index of the first member byte, or `None`.
///
/// ```
/// use bytechop::searching::index_of_any;
///
/// // The 'm' of "mundo", not the 'o' before the window.
/// assert_eq!(index_of_any("ola mundo", "omG", 2..), Some(4));
/// assert_eq!(index_of_any("ola mundo", "o", 1..4), None);
/// ```
pub fn index_of_any(
    text: impl AsRef<[u8]>,
    set: impl Into<ByteSet>,
    window: impl RangeBounds<usize>,
) -> Option<usize> {
    let bytes = text.as_ref();
    let set = set.into();
    let window = clamp_range(&window, bytes.len());
    let start = window.start;
    bytes[window]
        .iter()
        .position(|&b| set.contains(b))
        .map(|idx| start + idx)
}

/// Find the last byte within `window` that is a member of `set`.
///
/// ## Arguments
/// * `text` - the haystack.
/// * `set` - the match candidates.
/// * `window` - the index window to scan; clamped to the text bounds.
///
/// ## Returns
/// The absolute index of the last member byte, or `None`.
pub fn last_index_of_any(
    text: impl AsRef<[u8]>,
    set: impl Into<ByteSet>,
    window: impl RangeBounds<usize>,
) -> Option<usize> {
    let bytes = text.as_ref();
    let set = set.into();
    let window = clamp_range(&window, bytes.len());
    let start = window.start;
    bytes[window]
        .iter()
        .rposition(|&b| set.contains(b))
        .map(|idx| start + idx)
}

/// Find the first byte within `window` that is *not* a member of `set`.
///
/// This is the primitive [`crate::segmenting::trim_start`] composes
/// with.
///
/// ## Arguments
/// * `text` - the haystack.
/// * `set` - the bytes to skip over.
/// * `window` - the index window to scan; clamped to the text bounds.
///
/// ## Returns
/// The absolute index of the first non-member byte, or `None` if every
/// windowed byte is a member.
///
/// ```
/// use bytechop::searching::index_not_of_any;
///
/// assert_eq!(index_not_of_any("  ab", " ", ..), Some(2));
/// assert_eq!(index_not_of_any("    ", " ", ..), None);
/// ```
pub fn index_not_of_any(
    text: impl AsRef<[u8]>,
    set: impl Into<ByteSet>,
    window: impl RangeBounds<usize>,
) -> Option<usize> {
    let bytes = text.as_ref();
    let set = set.into();
    let window = clamp_range(&window, bytes.len());
    let start = window.start;
    bytes[window]
        .iter()
        .position(|&b| !set.contains(b))
        .map(|idx| start + idx)
}

/// Find the last byte within `window` that is *not* a member of `set`.
///
/// This is the primitive [`crate::segmenting::trim_end`] composes with.
///
/// ## Arguments
/// * `text` - the haystack.
/// * `set` - the bytes to skip over.
/// * `window` - the index window to scan; clamped to the text bounds.
///
/// ## Returns
/// The absolute index of the last non-member byte, or `None` if every
/// windowed byte is a member.
pub fn last_index_not_of_any(
    text: impl AsRef<[u8]>,
    set: impl Into<ByteSet>,
    window: impl RangeBounds<usize>,
) -> Option<usize> {
    let bytes = text.as_ref();
    let set = set.into();
    let window = clamp_range(&window, bytes.len());
    let start = window.start;
    bytes[window]
        .iter()
        .rposition(|&b| !set.contains(b))
        .map(|idx| start + idx)
}

/// Find the first occurrence of the substring `needle` within `window`.
///
/// An empty needle matches at the window start. This is the substring
/// primitive that [`count`], [`crate::predicates::contains`], and
/// [`crate::transform::replace`] build on.
///
/// ## Arguments
/// * `text` - the haystack.
/// * `needle` - the substring to look for.
/// * `window` - the index window to scan; clamped to the text bounds.
///   The whole match must lie inside the window.
///
/// ## Returns
/// The absolute index where the match begins, or `None`.
///
/// ```
/// use bytechop::searching::find;
///
/// assert_eq!(find("hello world", "world", ..), Some(6));
/// assert_eq!(find("hello world", "world", ..8), None);
/// assert_eq!(find("hello world", "", 3..), Some(3));
/// ```
pub fn find(
    text: impl AsRef<[u8]>,
    needle: impl AsRef<[u8]>,
    window: impl RangeBounds<usize>,
) -> Option<usize> {
    let bytes = text.as_ref();
    let window = clamp_range(&window, bytes.len());
    let start = window.start;
    memmem::find(&bytes[window], needle.as_ref()).map(|idx| start + idx)
}

/// Fallible form of [`count`].
///
/// Degenerate inputs short-circuit to `Ok(0)` before the bounds
/// contract is evaluated, so an empty needle never errors regardless of
/// the window.
///
/// ## Arguments
/// * `haystack` - the text to scan.
/// * `needle` - the substring to count.
/// * `window` - the index window; its start must lie inside the
///   haystack, its end is clamped.
///
/// ## Returns
/// The number of non-overlapping occurrences, or
/// [`BytechopError::StartOutOfRange`] if the resolved window start does
/// not lie in ``[0, haystack.len())``.
///
/// ```
/// use bytechop::BytechopError;
/// use bytechop::searching::try_count;
///
/// assert_eq!(try_count("aaaa", "aa", ..).unwrap(), 2);
/// assert_eq!(try_count("aaaa", "", 99..).unwrap(), 0);
/// assert!(matches!(
///     try_count("abc", "b", 3..),
///     Err(BytechopError::StartOutOfRange { start: 3, len: 3 }),
/// ));
/// ```
pub fn try_count(
    haystack: impl AsRef<[u8]>,
    needle: impl AsRef<[u8]>,
    window: impl RangeBounds<usize>,
) -> BCResult<usize> {
    let bytes = haystack.as_ref();
    let needle = needle.as_ref();

    if needle.is_empty() || bytes.is_empty() || needle.len() > bytes.len() {
        return Ok(0);
    }

    let (start, _) = resolve_bounds(&window, bytes.len());
    if start >= bytes.len() {
        return Err(BytechopError::StartOutOfRange {
            start,
            len: bytes.len(),
        });
    }

    let window = clamp_range(&window, bytes.len());
    Ok(memmem::find_iter(&bytes[window], needle).count())
}

/// Count the non-overlapping occurrences of `needle` within the
/// windowed haystack.
///
/// Each accepted match consumes its full length before the next search
/// begins, so a match's bytes are never reused as the start of the next
/// match.
///
/// ## Arguments
/// * `haystack` - the text to scan.
/// * `needle` - the substring to count.
/// * `window` - the index window; its start must lie inside the
///   haystack, its end is clamped.
///
/// ## Returns
/// The number of non-overlapping occurrences. Zero if the needle is
/// empty, the haystack is empty, or the needle is longer than the
/// haystack.
///
/// ## Panics
/// If the resolved window start lies outside ``[0, haystack.len())``
/// and no degenerate condition applied first. That is a usage error at
/// the call site; use [`try_count`] to handle it as a result.
///
/// ```
/// use bytechop::searching::count;
///
/// assert_eq!(count("aaaa", "aa", ..), 2);
/// assert_eq!(count("ababab", "ab", 2..), 2);
/// assert_eq!(count("aaaa", "", ..), 0);
/// ```
pub fn count(
    haystack: impl AsRef<[u8]>,
    needle: impl AsRef<[u8]>,
    window: impl RangeBounds<usize>,
) -> usize {
    try_count(haystack, needle, window).unwrap()
}
