//! # Byte Text Predicates
//!
//! Classification and containment checks over byte strings. The class
//! predicates (`is_*`) follow an all-of contract: every byte must
//! satisfy the class, and empty text fails. [`is_null_or_whitespace`]
//! is the one exception, since "nothing there" is exactly what it
//! reports. Containment checks delegate to [`crate::searching`], and
//! the `_ignore_case` variants fold through ASCII case only.

use crate::{searching, transform};

/// Is `text` non-empty and entirely ASCII letters or digits?
pub fn is_alnum(text: impl AsRef<[u8]>) -> bool {
    let bytes = text.as_ref();
    !bytes.is_empty() && bytes.iter().all(u8::is_ascii_alphanumeric)
}

/// Is `text` non-empty and entirely ASCII letters?
pub fn is_alpha(text: impl AsRef<[u8]>) -> bool {
    let bytes = text.as_ref();
    !bytes.is_empty() && bytes.iter().all(u8::is_ascii_alphabetic)
}

/// Is `text` non-empty and entirely ASCII digits?
pub fn is_digit(text: impl AsRef<[u8]>) -> bool {
    let bytes = text.as_ref();
    !bytes.is_empty() && bytes.iter().all(u8::is_ascii_digit)
}

/// Is `text` non-empty and entirely ASCII lowercase letters?
pub fn is_lower(text: impl AsRef<[u8]>) -> bool {
    let bytes = text.as_ref();
    !bytes.is_empty() && bytes.iter().all(u8::is_ascii_lowercase)
}

/// Is `text` non-empty and entirely ASCII uppercase letters?
pub fn is_upper(text: impl AsRef<[u8]>) -> bool {
    let bytes = text.as_ref();
    !bytes.is_empty() && bytes.iter().all(u8::is_ascii_uppercase)
}

/// Is `text` non-empty and entirely ASCII whitespace?
pub fn is_space(text: impl AsRef<[u8]>) -> bool {
    let bytes = text.as_ref();
    !bytes.is_empty() && bytes.iter().all(u8::is_ascii_whitespace)
}

/// Is `text` titlecased?
///
/// Every letter run must start uppercase and continue lowercase, and
/// at least one letter must be present. This is the acceptance check
/// for [`crate::transform::title`] output.
///
/// ```
/// use bytechop::predicates::is_title;
///
/// assert!(is_title("Hello World"));
/// assert!(!is_title("Hello world"));
/// assert!(!is_title("123"));
/// ```
pub fn is_title(text: impl AsRef<[u8]>) -> bool {
    let mut prev_alpha = false;
    let mut seen_alpha = false;
    for &b in text.as_ref() {
        if b.is_ascii_alphabetic() {
            if prev_alpha && b.is_ascii_uppercase() {
                return false;
            }
            if !prev_alpha && b.is_ascii_lowercase() {
                return false;
            }
            seen_alpha = true;
        }
        prev_alpha = b.is_ascii_alphabetic();
    }
    seen_alpha
}

/// Is `text` empty or entirely ASCII whitespace?
pub fn is_null_or_whitespace(text: impl AsRef<[u8]>) -> bool {
    text.as_ref().iter().all(u8::is_ascii_whitespace)
}

/// Does `haystack` contain `needle` anywhere?
///
/// An empty needle is found everywhere.
pub fn contains(
    haystack: impl AsRef<[u8]>,
    needle: impl AsRef<[u8]>,
) -> bool {
    searching::find(haystack, needle, ..).is_some()
}

/// Does `haystack` contain `needle`, ignoring ASCII case?
pub fn contains_ignore_case(
    haystack: impl AsRef<[u8]>,
    needle: impl AsRef<[u8]>,
) -> bool {
    contains(
        transform::to_lower(haystack),
        transform::to_lower(needle),
    )
}

/// Does `text` start with `prefix`?
pub fn starts_with(
    text: impl AsRef<[u8]>,
    prefix: impl AsRef<[u8]>,
) -> bool {
    text.as_ref().starts_with(prefix.as_ref())
}

/// Does `text` start with `prefix`, ignoring ASCII case?
pub fn starts_with_ignore_case(
    text: impl AsRef<[u8]>,
    prefix: impl AsRef<[u8]>,
) -> bool {
    let text = text.as_ref();
    let prefix = prefix.as_ref();
    text.len() >= prefix.len() && text[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// Does `text` end with `suffix`?
pub fn ends_with(
    text: impl AsRef<[u8]>,
    suffix: impl AsRef<[u8]>,
) -> bool {
    text.as_ref().ends_with(suffix.as_ref())
}

/// Does `text` end with `suffix`, ignoring ASCII case?
pub fn ends_with_ignore_case(
    text: impl AsRef<[u8]>,
    suffix: impl AsRef<[u8]>,
) -> bool {
    let text = text.as_ref();
    let suffix = suffix.as_ref();
    text.len() >= suffix.len()
        && text[text.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}
