//! # Byte Membership Table

use core::fmt::Debug;

/// Deduplicated set of byte values with O(1) membership tests.
///
/// Built from the distinct bytes of some text, and used to answer
/// "is byte `b` one of these?" during any-of searches, splitting, and
/// trimming. Construction scans its source once; lookups index a fixed
/// 256-entry table.
///
/// Most call sites never name the type: the set parameters of the
/// search and segmenting functions are `impl Into<ByteSet>`, so a
/// `&str`, a `&[u8]`, a single `u8`, or an existing `&ByteSet` all
/// work directly.
///
/// ```
/// use bytechop::ByteSet;
///
/// let set = ByteSet::from(", \t");
/// assert!(set.contains(b','));
/// assert!(!set.contains(b'x'));
/// assert_eq!(set.len(), 3);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ByteSet {
    /// Byte-indexed membership table.
    table: [bool; 256],

    /// Number of distinct members.
    len: usize,
}

impl Debug for ByteSet {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.write_str("ByteSet")?;
        f.debug_set()
            .entries(self.iter().map(|b| b as char))
            .finish()
    }
}

impl Default for ByteSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteSet {
    /// The single-space set, the conventional trim default.
    pub const SPACE: ByteSet = ByteSet::from_slice(b" ");

    /// The ASCII whitespace bytes: space, TAB, LF, VT, FF, CR.
    pub const ASCII_WHITESPACE: ByteSet = ByteSet::from_slice(b" \t\n\x0B\x0C\r");

    /// Create an empty set.
    pub const fn new() -> Self {
        Self {
            table: [false; 256],
            len: 0,
        }
    }

    /// Build a set from the distinct bytes of a slice.
    ///
    /// Usable in const contexts; the [`From`] conversions cover the
    /// common call sites.
    pub const fn from_slice(bytes: &[u8]) -> Self {
        let mut set = Self::new();
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i] as usize;
            if !set.table[b] {
                set.table[b] = true;
                set.len += 1;
            }
            i += 1;
        }
        set
    }

    /// Membership test.
    #[inline(always)]
    pub fn contains(
        &self,
        byte: u8,
    ) -> bool {
        self.table[byte as usize]
    }

    /// Add a byte to the set.
    ///
    /// ## Returns
    /// `true` if the byte was newly added, `false` if it was already a
    /// member.
    pub fn insert(
        &mut self,
        byte: u8,
    ) -> bool {
        let slot = &mut self.table[byte as usize];
        if *slot {
            false
        } else {
            *slot = true;
            self.len += 1;
            true
        }
    }

    /// Number of distinct members.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate the members in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0_u8..=255).filter(move |&b| self.table[b as usize])
    }
}

impl From<&str> for ByteSet {
    fn from(text: &str) -> Self {
        Self::from_slice(text.as_bytes())
    }
}

impl From<&[u8]> for ByteSet {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for ByteSet {
    fn from(bytes: &[u8; N]) -> Self {
        Self::from_slice(bytes)
    }
}

impl From<u8> for ByteSet {
    fn from(byte: u8) -> Self {
        Self::from_slice(&[byte])
    }
}

impl From<&ByteSet> for ByteSet {
    fn from(set: &ByteSet) -> Self {
        set.clone()
    }
}

impl FromIterator<u8> for ByteSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<u8> for ByteSet {
    fn extend<I: IntoIterator<Item = u8>>(
        &mut self,
        iter: I,
    ) {
        for byte in iter {
            self.insert(byte);
        }
    }
}
