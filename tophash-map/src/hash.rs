//! Splitting a 64-bit key hash into a bucket selector and a tophash.
//!
//! The low bits pick the bucket, the high byte is kept in the bucket as a
//! cheap filter in front of the full key comparison.

/// Tophash value of a slot that has never been written.
pub(crate) const EMPTY: u8 = 0;

/// Smallest tophash an occupied slot can carry.
///
/// A hash whose high byte is zero would collide with [`EMPTY`], so it is
/// bumped to this value.
pub(crate) const MIN_TOPHASH: u8 = 1;

/// Bit offset of the tophash byte inside a `u64` hash.
const TOPHASH_SHIFT: u32 = u64::BITS - u8::BITS;

/// A key hash split into its two uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SplitHash {
    /// Index of the primary bucket.
    pub(crate) selector: usize,
    /// One-byte discriminator stored next to the key. Never [`EMPTY`].
    pub(crate) tophash: u8,
}

impl SplitHash {
    /// Splits `hash` for a table whose bucket count is `mask + 1`.
    #[inline(always)]
    pub(crate) fn new(hash: u64, mask: usize) -> Self {
        Self {
            selector: (hash as usize) & mask,
            tophash: tophash(hash),
        }
    }
}

/// High-order byte of `hash`, remapped away from [`EMPTY`].
#[inline(always)]
pub(crate) fn tophash(hash: u64) -> u8 {
    let top = (hash >> TOPHASH_SHIFT) as u8;
    if top < MIN_TOPHASH { MIN_TOPHASH } else { top }
}
