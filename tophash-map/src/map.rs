//! The bucket table.
//!
//! # Architecture
//! - **Buckets**: boxed slice whose length is a power of two, fixed at
//!   construction. Nothing ever rehashes or shrinks it.
//! - **Hashing**: one `hash_one` per operation; the low bits select the
//!   bucket and the high byte becomes the tophash (see [`crate::hash`]).
//! - **Collisions**: resolved inside the selected bucket and its overflow
//!   chain.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use foldhash::fast::RandomState;
use log::debug;

use crate::bucket::{BUCKET_SIZE, Bucket};
use crate::error::MapError;
use crate::hash::SplitHash;

/// Returns `log2` of the bucket count allocated for `expected` entries.
///
/// One bucket per [`BUCKET_SIZE`] expected entries plus one, rounded by bit
/// length: `bit_length(expected / 8 + 1)`.
///
/// ```
/// use tophash_map::bucket_count_log2_for;
///
/// assert_eq!(bucket_count_log2_for(0), 1);
/// assert_eq!(bucket_count_log2_for(8), 2);
/// assert_eq!(bucket_count_log2_for(u16::MAX), 14);
/// ```
pub fn bucket_count_log2_for(expected: u16) -> u8 {
    let required = expected / BUCKET_SIZE as u16 + 1;
    (u16::BITS - required.leading_zeros()) as u8
}

/// Hash map with 8-slot buckets, tophash filtering and overflow chaining.
///
/// The bucket count is chosen once from a size hint and never changes, so
/// lookups degrade linearly once chains grow past the hint.
///
/// # Type Parameters
///
/// - `K`: Key type (must implement `Hash` and `Eq`)
/// - `V`: Value type
/// - `S`: Hash builder (defaults to a randomly seeded foldhash `RandomState`)
pub struct BucketMap<K, V, S = RandomState> {
    buckets: Box<[Bucket<K, V>]>,
    mask: usize,
    bucket_count_log2: u8,
    len: usize,
    hasher: S,
}

#[cfg(feature = "std")]
impl<K, V> BucketMap<K, V, RandomState>
where
    K: Hash + Eq,
{
    /// Creates an empty map sized for a hint of zero entries (two buckets).
    ///
    /// # Examples
    ///
    /// ```
    /// use tophash_map::StringMap;
    ///
    /// let map = StringMap::new();
    /// assert_eq!(map.bucket_count(), 2);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty map sized for `expected` entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use tophash_map::StringMap;
    ///
    /// let map = StringMap::with_capacity(100);
    /// assert_eq!(map.bucket_count(), 16);
    /// ```
    pub fn with_capacity(expected: u16) -> Self {
        Self::with_capacity_and_hasher(expected, RandomState::default())
    }
}

impl<K, V, S> BucketMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Creates an empty map with the smallest bucket array and the given hasher.
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates an empty map sized for `expected` entries, using `hasher`.
    ///
    /// Aborts through the global allocation error handler if the bucket array
    /// cannot be allocated.
    pub fn with_capacity_and_hasher(expected: u16, hasher: S) -> Self {
        let log2 = bucket_count_log2_for(expected);
        let count = 1usize << log2;
        let mut buckets = Vec::with_capacity(count);
        buckets.extend((0..count).map(|_| Bucket::new()));
        Self::from_buckets(expected, log2, buckets, hasher)
    }

    /// Like [`with_capacity_and_hasher`](Self::with_capacity_and_hasher), but
    /// reports a failed bucket allocation instead of aborting.
    pub fn try_with_capacity_and_hasher(expected: u16, hasher: S) -> Result<Self, MapError> {
        let log2 = bucket_count_log2_for(expected);
        let count = 1usize << log2;
        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(count)
            .map_err(|_| MapError::AllocationFailed { buckets: count })?;
        buckets.extend((0..count).map(|_| Bucket::new()));
        Ok(Self::from_buckets(expected, log2, buckets, hasher))
    }

    fn from_buckets(expected: u16, log2: u8, buckets: Vec<Bucket<K, V>>, hasher: S) -> Self {
        debug!(
            "bucket map sized for {} entries: {} buckets",
            expected,
            buckets.len()
        );
        Self {
            mask: buckets.len() - 1,
            buckets: buckets.into_boxed_slice(),
            bucket_count_log2: log2,
            len: 0,
            hasher,
        }
    }

    #[inline(always)]
    fn split<Q>(&self, key: &Q) -> SplitHash
    where
        Q: Hash + ?Sized,
    {
        SplitHash::new(self.hasher.hash_one(key), self.mask)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the key already exists its value is replaced in place and the old
    /// value is returned; the entry count is unchanged. Otherwise the key
    /// takes a new slot and `None` is returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let split = self.split(&key);
        let old = self.buckets[split.selector].put(key, value, split.tophash);
        if old.is_none() {
            self.len += 1;
        }
        old
    }

    /// Returns a reference to the value stored for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let split = self.split(key);
        self.buckets[split.selector].get(key, split.tophash)
    }

    /// Returns true if the map contains the specified key
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }
}

impl<K, V, S> BucketMap<K, V, S> {
    /// Returns the number of distinct keys in the map
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of primary buckets. Always a power of two.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `log2` of [`bucket_count`](Self::bucket_count).
    pub fn bucket_count_log2(&self) -> u8 {
        self.bucket_count_log2
    }

    /// Counts overflow buckets across all chains.
    ///
    /// Walks every chain, so this is meant for diagnostics and tests.
    pub fn overflow_bucket_count(&self) -> usize {
        self.buckets.iter().map(Bucket::overflow_len).sum()
    }

    /// Returns a reference to the map's hash builder
    pub fn hasher(&self) -> &S {
        &self.hasher
    }
}

#[cfg(feature = "std")]
impl<K, V> Default for BucketMap<K, V, RandomState>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> fmt::Debug for BucketMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BucketMap")
            .field("len", &self.len)
            .field("bucket_count", &self.bucket_count())
            .field("overflow_buckets", &self.overflow_bucket_count())
            .finish()
    }
}
