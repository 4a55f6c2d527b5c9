//! # Splitting and Trimming
//!
//! Whole-string decomposition against a byte set: [`split`] breaks at
//! every separator byte (keeping empty segments), and the trim family
//! removes matching prefixes/suffixes. The trims locate their cut
//! points with the not-in-set primitives from [`crate::searching`];
//! all of the pure functions return sub-slices of their input and
//! allocate nothing.

use core::iter::FusedIterator;

use crate::alloc::vec::Vec;
use crate::byteset::ByteSet;
use crate::searching::{index_not_of_any, last_index_not_of_any};

/// Lazy segment iterator returned by [`split`].
///
/// Yields the sub-slices of the input between separator bytes, in
/// left-to-right order. Separators are consumed; consecutive, leading,
/// and trailing separators yield empty segments. At least one segment
/// is always yielded, so an empty input produces a single empty
/// segment.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Split<'a> {
    text: &'a [u8],
    separators: ByteSet,
    pos: usize,
    done: bool,
}

impl<'a> Iterator for Split<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        if self.done {
            return None;
        }
        match self.text[self.pos..]
            .iter()
            .position(|&b| self.separators.contains(b))
        {
            Some(idx) => {
                let segment = &self.text[self.pos..self.pos + idx];
                self.pos += idx + 1;
                Some(segment)
            }
            None => {
                self.done = true;
                Some(&self.text[self.pos..])
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            // One more segment than remaining separators, at most
            // one separator per remaining byte.
            (1, Some(self.text.len() - self.pos + 1))
        }
    }
}

impl FusedIterator for Split<'_> {}

/// Split `text` at every byte in `separators`.
///
/// Empty segments are kept, not collapsed: leading, trailing, and
/// consecutive separators all contribute them, so the segment count is
/// always the number of separator bytes plus one. An empty text yields
/// exactly one empty segment; an empty separator set yields the whole
/// text as one segment.
///
/// ## Arguments
/// * `text` - the text to decompose.
/// * `separators` - the separator byte set.
///
/// ## Returns
/// A lazy [`Split`] iterator over the segments.
///
/// ```
/// use bytechop::segmenting::split;
///
/// let parts: Vec<&[u8]> = split("/usr/local/bin", "/").collect();
/// assert_eq!(parts, ["", "usr", "local", "bin"].map(str::as_bytes));
///
/// let parts: Vec<&[u8]> = split("a,b,,c", ",").collect();
/// assert_eq!(parts, ["a", "b", "", "c"].map(str::as_bytes));
/// ```
pub fn split<'a, B, S>(
    text: &'a B,
    separators: S,
) -> Split<'a>
where
    B: AsRef<[u8]> + ?Sized,
    S: Into<ByteSet>,
{
    Split {
        text: text.as_ref(),
        separators: separators.into(),
        pos: 0,
        done: false,
    }
}

/// Remove the maximal prefix of bytes in `set`.
///
/// ## Arguments
/// * `text` - the text to trim.
/// * `set` - the bytes to strip.
///
/// ## Returns
/// The trimmed sub-slice of `text`; empty if every byte matched.
///
/// ```
/// use bytechop::segmenting::trim_start;
///
/// assert_eq!(trim_start("  hello ", " "), b"hello ");
/// assert_eq!(trim_start("   ", " "), b"");
/// assert_eq!(trim_start("abc", "xyz"), b"abc");
/// ```
pub fn trim_start<'a, B, S>(
    text: &'a B,
    set: S,
) -> &'a [u8]
where
    B: AsRef<[u8]> + ?Sized,
    S: Into<ByteSet>,
{
    let bytes = text.as_ref();
    match index_not_of_any(bytes, set, ..) {
        Some(idx) => &bytes[idx..],
        None => &bytes[..0],
    }
}

/// Remove the maximal suffix of bytes in `set`.
///
/// ## Arguments
/// * `text` - the text to trim.
/// * `set` - the bytes to strip.
///
/// ## Returns
/// The trimmed sub-slice of `text`; empty if every byte matched.
///
/// ```
/// use bytechop::segmenting::trim_end;
///
/// assert_eq!(trim_end("  hello ", " "), b"  hello");
/// assert_eq!(trim_end("   ", " "), b"");
/// ```
pub fn trim_end<'a, B, S>(
    text: &'a B,
    set: S,
) -> &'a [u8]
where
    B: AsRef<[u8]> + ?Sized,
    S: Into<ByteSet>,
{
    let bytes = text.as_ref();
    match last_index_not_of_any(bytes, set, ..) {
        Some(idx) => &bytes[..=idx],
        None => &bytes[..0],
    }
}

/// Remove the maximal matching prefix and suffix of bytes in `set`.
///
/// Composes [`trim_start`] and [`trim_end`], so a text consisting
/// entirely of matching bytes trims to the empty slice rather than
/// re-scanning the original.
///
/// ## Arguments
/// * `text` - the text to trim.
/// * `set` - the bytes to strip.
///
/// ## Returns
/// The trimmed sub-slice of `text`.
///
/// ```
/// use bytechop::segmenting::trim;
///
/// assert_eq!(trim("  hello ", " "), b"hello");
/// assert_eq!(trim("   ", " "), b"");
/// assert_eq!(trim("abc", "xyz"), b"abc");
/// ```
pub fn trim<'a, B, S>(
    text: &'a B,
    set: S,
) -> &'a [u8]
where
    B: AsRef<[u8]> + ?Sized,
    S: Into<ByteSet>,
{
    let set = set.into();
    trim_end(trim_start(text, &set), &set)
}

/// In-place form of [`trim_start`].
///
/// Computes the retained range with the pure primitive and applies a
/// single drain, so the content is replaced wholesale.
///
/// ```
/// use bytechop::segmenting::trim_start_in_place;
///
/// let mut text = b"  hello ".to_vec();
/// trim_start_in_place(&mut text, " ");
/// assert_eq!(text, b"hello ");
/// ```
pub fn trim_start_in_place(
    text: &mut Vec<u8>,
    set: impl Into<ByteSet>,
) {
    match index_not_of_any(&*text, set, ..) {
        Some(start) => {
            text.drain(..start);
        }
        None => text.clear(),
    }
}

/// In-place form of [`trim_end`].
pub fn trim_end_in_place(
    text: &mut Vec<u8>,
    set: impl Into<ByteSet>,
) {
    match last_index_not_of_any(&*text, set, ..) {
        Some(end) => text.truncate(end + 1),
        None => text.clear(),
    }
}

/// In-place form of [`trim`].
pub fn trim_in_place(
    text: &mut Vec<u8>,
    set: impl Into<ByteSet>,
) {
    let set = set.into();
    match last_index_not_of_any(&*text, &set, ..) {
        Some(end) => {
            text.truncate(end + 1);
            if let Some(start) = index_not_of_any(&*text, &set, ..) {
                text.drain(..start);
            }
        }
        None => text.clear(),
    }
}
