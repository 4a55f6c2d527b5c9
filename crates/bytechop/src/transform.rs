//! # Byte Text Transforms
//!
//! The peripheral builder layer: case conversion, padding, tab
//! expansion, replacement, and joining. Everything is byte-wise ASCII;
//! [`to_lower`] / [`to_upper`] are the case-folding collaborators the
//! case-insensitive predicates build on, and no locale logic exists
//! anywhere. All functions return new buffers and leave their input
//! untouched.

use memchr::memmem;

use crate::alloc::{vec, vec::Vec};

/// Lowercase every ASCII uppercase byte.
pub fn to_lower(text: impl AsRef<[u8]>) -> Vec<u8> {
    text.as_ref().iter().map(u8::to_ascii_lowercase).collect()
}

/// Uppercase every ASCII lowercase byte.
pub fn to_upper(text: impl AsRef<[u8]>) -> Vec<u8> {
    text.as_ref().iter().map(u8::to_ascii_uppercase).collect()
}

/// Swap the case of every ASCII letter.
///
/// ```
/// use bytechop::transform::swap_case;
///
/// assert_eq!(swap_case("Hello, World!"), b"hELLO, wORLD!");
/// ```
pub fn swap_case(text: impl AsRef<[u8]>) -> Vec<u8> {
    text.as_ref()
        .iter()
        .map(|&b| {
            if b.is_ascii_uppercase() {
                b.to_ascii_lowercase()
            } else {
                b.to_ascii_uppercase()
            }
        })
        .collect()
}

/// Uppercase the first byte, leaving the rest unchanged.
pub fn capitalize(text: impl AsRef<[u8]>) -> Vec<u8> {
    let mut out = text.as_ref().to_vec();
    if let Some(first) = out.first_mut() {
        first.make_ascii_uppercase();
    }
    out
}

/// Titlecase: each word starts uppercase, remaining letters lowercase.
///
/// Word boundaries are non-alphabetic bytes, so an apostrophe starts a
/// new "word".
///
/// ```
/// use bytechop::transform::title;
///
/// assert_eq!(title("hello WORLD"), b"Hello World");
/// assert_eq!(title("it's a test"), b"It'S A Test");
/// ```
pub fn title(text: impl AsRef<[u8]>) -> Vec<u8> {
    let mut prev_alpha = false;
    text.as_ref()
        .iter()
        .map(|&b| {
            let mapped = if !b.is_ascii_alphabetic() {
                b
            } else if prev_alpha {
                b.to_ascii_lowercase()
            } else {
                b.to_ascii_uppercase()
            };
            prev_alpha = b.is_ascii_alphabetic();
            mapped
        })
        .collect()
}

/// Left-pad with `fill` to at least `width` bytes.
///
/// Text already `width` long or longer is returned unchanged.
///
/// ```
/// use bytechop::transform::pad_left;
///
/// assert_eq!(pad_left("42", 5, b'0'), b"00042");
/// assert_eq!(pad_left("123456", 5, b'0'), b"123456");
/// ```
pub fn pad_left(
    text: impl AsRef<[u8]>,
    width: usize,
    fill: u8,
) -> Vec<u8> {
    let bytes = text.as_ref();
    if bytes.len() >= width {
        return bytes.to_vec();
    }
    let mut out = Vec::with_capacity(width);
    out.resize(width - bytes.len(), fill);
    out.extend_from_slice(bytes);
    out
}

/// Right-pad with `fill` to at least `width` bytes.
pub fn pad_right(
    text: impl AsRef<[u8]>,
    width: usize,
    fill: u8,
) -> Vec<u8> {
    let bytes = text.as_ref();
    let mut out = Vec::with_capacity(width.max(bytes.len()));
    out.extend_from_slice(bytes);
    if width > out.len() {
        out.resize(width, fill);
    }
    out
}

/// Center `text` in `width`, padding both sides with `fill`.
///
/// An odd padding surplus goes to the trailing side. Text already
/// `width` long or longer is returned unchanged.
///
/// ```
/// use bytechop::transform::center;
///
/// assert_eq!(center("ab", 6, b'*'), b"**ab**");
/// assert_eq!(center("ab", 5, b'*'), b"*ab**");
/// ```
pub fn center(
    text: impl AsRef<[u8]>,
    width: usize,
    fill: u8,
) -> Vec<u8> {
    let bytes = text.as_ref();
    if bytes.len() >= width {
        return bytes.to_vec();
    }
    let leading = (width - bytes.len()) / 2;
    let mut out = Vec::with_capacity(width);
    out.resize(leading, fill);
    out.extend_from_slice(bytes);
    out.resize(width, fill);
    out
}

/// Replace each TAB byte with `tab_size` spaces.
///
/// Positional replacement, not column-aware alignment.
pub fn expand_tabs(
    text: impl AsRef<[u8]>,
    tab_size: usize,
) -> Vec<u8> {
    let spaces = vec![b' '; tab_size];
    replace(text, b"\t", &spaces)
}

/// Replace every non-overlapping occurrence of `from` with `to`.
///
/// Single left-to-right pass; the scan resumes after each replacement,
/// so replaced output is never rescanned and a `to` containing `from`
/// terminates like any other input. An empty `from` returns the input
/// unchanged.
///
/// ```
/// use bytechop::transform::replace;
///
/// assert_eq!(replace("aaaa", "aa", "b"), b"bb");
/// assert_eq!(replace("a", "a", "aa"), b"aa");
/// assert_eq!(replace("hello", "l", ""), b"heo");
/// ```
pub fn replace(
    text: impl AsRef<[u8]>,
    from: impl AsRef<[u8]>,
    to: impl AsRef<[u8]>,
) -> Vec<u8> {
    let bytes = text.as_ref();
    let from = from.as_ref();
    let to = to.as_ref();

    if from.is_empty() {
        return bytes.to_vec();
    }

    let mut out = Vec::with_capacity(bytes.len());
    let mut tail = 0;
    for idx in memmem::find_iter(bytes, from) {
        out.extend_from_slice(&bytes[tail..idx]);
        out.extend_from_slice(to);
        tail = idx + from.len();
    }
    out.extend_from_slice(&bytes[tail..]);
    out
}

/// Join items with `separator` between consecutive items.
///
/// ```
/// use bytechop::transform::join;
///
/// assert_eq!(join(", ", ["a", "b", "c"]), b"a, b, c");
/// assert_eq!(join("/", ["solo"]), b"solo");
/// assert_eq!(join("/", core::iter::empty::<&str>()), b"");
/// ```
pub fn join<S, I>(
    separator: S,
    items: I,
) -> Vec<u8>
where
    S: AsRef<[u8]>,
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let separator = separator.as_ref();
    let mut out = Vec::new();
    for (idx, item) in items.into_iter().enumerate() {
        if idx > 0 {
            out.extend_from_slice(separator);
        }
        out.extend_from_slice(item.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_case_conversion() {
        assert_eq!(to_lower("Hello, World! 123"), b"hello, world! 123");
        assert_eq!(to_upper("Hello, World! 123"), b"HELLO, WORLD! 123");
        assert_eq!(to_lower(""), b"");

        // Non-ASCII bytes pass through untouched.
        assert_eq!(to_lower(b"\xC3\x84bc".as_slice()), b"\xC3\x84bc");
    }

    #[test]
    fn test_swap_case() {
        assert_eq!(swap_case("Hello, World!"), b"hELLO, wORLD!");
        assert_eq!(swap_case("abc"), b"ABC");
        assert_eq!(swap_case("123"), b"123");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hello world"), b"Hello world");
        assert_eq!(capitalize("Hello"), b"Hello");
        assert_eq!(capitalize("123abc"), b"123abc");
        assert_eq!(capitalize(""), b"");
    }

    #[test]
    fn test_title() {
        assert_eq!(title("hello world"), b"Hello World");
        assert_eq!(title("HELLO WORLD"), b"Hello World");
        assert_eq!(title("it's a test"), b"It'S A Test");
        assert_eq!(title("x1x one"), b"X1X One");
        assert_eq!(title(""), b"");
    }

    #[test]
    fn test_pads() {
        assert_eq!(pad_left("42", 5, b'0'), b"00042");
        assert_eq!(pad_right("42", 5, b'.'), b"42...");
        assert_eq!(pad_left("123456", 5, b'0'), b"123456");
        assert_eq!(pad_right("123456", 5, b'0'), b"123456");
        assert_eq!(pad_left("", 3, b'x'), b"xxx");
        assert_eq!(pad_left("abc", 3, b'x'), b"abc");
    }

    #[test]
    fn test_center() {
        assert_eq!(center("ab", 6, b'*'), b"**ab**");
        assert_eq!(center("ab", 5, b'*'), b"*ab**");
        assert_eq!(center("ab", 2, b'*'), b"ab");
        assert_eq!(center("abc", 2, b'*'), b"abc");
        assert_eq!(center("", 3, b'*'), b"***");
    }

    #[test]
    fn test_expand_tabs() {
        assert_eq!(expand_tabs("a\tb", 4), b"a    b");
        assert_eq!(expand_tabs("a\tb", 0), b"ab");
        assert_eq!(expand_tabs("\t\t", 2), b"    ");
        assert_eq!(expand_tabs("no tabs", 8), b"no tabs");
    }

    #[test]
    fn test_replace() {
        assert_eq!(replace("aaaa", "aa", "b"), b"bb");
        assert_eq!(replace("hello world", "world", "there"), b"hello there");
        assert_eq!(replace("hello", "l", ""), b"heo");
        assert_eq!(replace("abc", "xyz", "q"), b"abc");
        assert_eq!(replace("abc", "", "q"), b"abc");

        // The replacement is never rescanned.
        assert_eq!(replace("a", "a", "aa"), b"aa");
        assert_eq!(replace("aa", "a", "ab"), b"abab");
    }

    #[test]
    fn test_join() {
        assert_eq!(join(", ", ["a", "b", "c"]), b"a, b, c");
        assert_eq!(join("", ["a", "b"]), b"ab");
        assert_eq!(join("/", ["solo"]), b"solo");
        assert_eq!(join("/", core::iter::empty::<&str>()), b"");
        assert_eq!(join("-", ["", "", ""]), b"--");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn case_folds_are_idempotent_and_swap_is_involutive(
            text in proptest::collection::vec(any::<u8>(), 0..64),
        ) {
            let lower = to_lower(&text);
            prop_assert_eq!(to_lower(&lower), lower.clone());
            prop_assert_eq!(lower.len(), text.len());

            let upper = to_upper(&text);
            prop_assert_eq!(to_upper(&upper), upper.clone());

            prop_assert_eq!(swap_case(swap_case(&text)), text);
        }

        #[test]
        fn replace_identity_and_length_arithmetic(
            text in proptest::collection::vec(0..4_u8, 0..64),
            from in proptest::collection::vec(0..4_u8, 1..4),
            to in proptest::collection::vec(0..4_u8, 0..4),
        ) {
            prop_assert_eq!(replace(&text, &from, &from), text.clone());

            // Each of the `hits` non-overlapping occurrences swaps
            // `from.len()` bytes for `to.len()` bytes.
            let hits = crate::searching::count(&text, &from, ..);
            let out = replace(&text, &from, &to);
            prop_assert_eq!(
                out.len() + hits * from.len(),
                text.len() + hits * to.len()
            );
        }

        #[test]
        fn pad_reaches_width(
            text in proptest::collection::vec(any::<u8>(), 0..32),
            width in 0..48_usize,
        ) {
            let target = text.len().max(width);
            prop_assert_eq!(pad_left(&text, width, b'.').len(), target);
            prop_assert_eq!(pad_right(&text, width, b'.').len(), target);
            prop_assert_eq!(center(&text, width, b'.').len(), target);
        }
    }
}
