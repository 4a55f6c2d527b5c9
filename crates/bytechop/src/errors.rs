//! # Error Types

/// Errors from bytechop operations.
///
/// Deliberately small: "not found" is an expected data condition and is
/// reported as `None` by the search functions, never as an error. The
/// only failure mode is a caller-supplied window start outside the
/// haystack's index domain, and only [`crate::searching::try_count`]
/// enforces that contract.
#[derive(Debug, thiserror::Error)]
pub enum BytechopError {
    /// A window start lies outside the haystack's valid index domain.
    #[error("window start ({start}) out of range for haystack length {len}")]
    StartOutOfRange {
        /// The resolved window start.
        start: usize,

        /// The haystack length.
        len: usize,
    },
}

/// Result type for bytechop operations.
pub type BCResult<T> = core::result::Result<T, BytechopError>;
