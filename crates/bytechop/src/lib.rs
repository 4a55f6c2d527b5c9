//! # `bytechop` Byte String Primitives
//!
//! This is a library of windowed search, splitting, and trimming
//! primitives over single-byte text.
//!
//! `bytechop` accepts any `impl AsRef<[u8]>` text, so `&str` and
//! `&[u8]` inputs are interchangeable.
//!
//! See:
//! * [`searching`] for windowed first/last/substring search and counting.
//! * [`segmenting`] for splitting on byte sets and trimming.
//! * [`transform`] for ASCII case folds, padding, and replacement.
//! * [`predicates`] for classification and containment tests.
//! * [`byteset`] for the membership table the above share.
//!
//! Search results are absolute indices into the haystack, windows clamp
//! to the text, and "not found" is [`None`] rather than an error; the
//! one bounds contract lives on [`searching::try_count`].
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``std``
//!
//! #### feature: ``std`` / ``no_std``
//!
//! The "std" feature enables the use of the `std` library;
//! building with ``default-features = false`` leaves an ``alloc``-only crate.
//! (Negative feature deps are not stable yet.)
//!
//! With ``std`` enabled, ``memchr`` uses its runtime-detected SIMD
//! searchers and [`BytechopError`] implements `std::error::Error` through
//! ``thiserror/std``. The searching and trimming core allocates nothing
//! either way; only [`transform`] and the in-place helpers need
//! ``alloc``.
//!
//! ## Usage
//!
//! ```
//! use bytechop::{searching, segmenting};
//!
//! // Any-of search over a window; the result is an absolute index.
//! assert_eq!(searching::index_of_any("ola mundo", "omG", 2..), Some(4));
//!
//! // Occurrence counting is non-overlapping.
//! assert_eq!(searching::count("aaaa", "aa", ..), 2);
//!
//! // Splitting keeps empty segments.
//! let parts: Vec<&[u8]> = segmenting::split("/usr/local/bin", "/").collect();
//! assert_eq!(parts, [b"".as_slice(), b"usr", b"local", b"bin"]);
//!
//! // Trimming composes the not-in-set searches.
//! assert_eq!(segmenting::trim(" chopped \t", " \t"), b"chopped");
//! ```

#![warn(missing_docs, unused)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod byteset;
pub mod errors;
pub mod predicates;
pub mod ranges;
pub mod searching;
pub mod segmenting;
pub mod transform;

pub use byteset::ByteSet;
pub use errors::{BCResult, BytechopError};
