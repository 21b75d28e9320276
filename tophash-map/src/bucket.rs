//! Fixed-size buckets with an overflow chain.
//!
//! # Layout
//! - **Tophashes**: one byte per slot, scanned first. `EMPTY` marks a slot
//!   that has never been written.
//! - **Entries**: key and value per slot, compared only on a tophash hit.
//! - **Overflow**: at most one boxed bucket, allocated the first time a key
//!   does not fit. Chains only ever grow.

use alloc::boxed::Box;
use core::borrow::Borrow;
use core::mem;

use log::trace;

use crate::hash::EMPTY;

/// Number of slots in every bucket.
pub const BUCKET_SIZE: usize = 8;

/// Key-value pair stored in an occupied slot.
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Outcome of scanning the slots of one bucket for a key.
enum Probe {
    /// Slot holding the key.
    Found(usize),
    /// Key absent; first never-written slot, if any.
    Missing(Option<usize>),
}

pub(crate) struct Bucket<K, V> {
    tophash: [u8; BUCKET_SIZE],
    entries: [Option<Entry<K, V>>; BUCKET_SIZE],
    overflow: Option<Box<Bucket<K, V>>>,
}

impl<K, V> Bucket<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            tophash: [EMPTY; BUCKET_SIZE],
            entries: core::array::from_fn(|_| None),
            overflow: None,
        }
    }

    /// Number of overflow buckets chained behind this one.
    pub(crate) fn overflow_len(&self) -> usize {
        let mut count = 0;
        let mut next = self.overflow.as_deref();
        while let Some(bucket) = next {
            count += 1;
            next = bucket.overflow.as_deref();
        }
        count
    }

    /// Scans all slots of this bucket only. Does not follow the chain.
    ///
    /// The scan never stops early: a key may sit behind an empty slot, and an
    /// update has to win over filling that slot.
    #[inline]
    fn probe<Q>(&self, key: &Q, tophash: u8) -> Probe
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut vacant = None;
        for (i, &top) in self.tophash.iter().enumerate() {
            if top == tophash {
                if let Some(entry) = &self.entries[i] {
                    if entry.key.borrow() == key {
                        return Probe::Found(i);
                    }
                }
            } else if top == EMPTY && vacant.is_none() {
                vacant = Some(i);
            }
        }
        Probe::Missing(vacant)
    }

    /// Inserts or updates `key` in this bucket or its chain.
    ///
    /// Returns the previous value on update, `None` when a new slot was
    /// taken. A bucket that already has an overflow never takes new keys
    /// itself, even if it still has empty slots.
    pub(crate) fn put(&mut self, key: K, value: V, tophash: u8) -> Option<V>
    where
        K: Eq,
    {
        debug_assert_ne!(tophash, EMPTY);

        let mut bucket = self;
        let mut depth = 0usize;
        loop {
            match bucket.probe(&key, tophash) {
                Probe::Found(i) => {
                    return bucket.entries[i]
                        .as_mut()
                        .map(|entry| mem::replace(&mut entry.value, value));
                }
                Probe::Missing(Some(i)) if bucket.overflow.is_none() => {
                    bucket.tophash[i] = tophash;
                    bucket.entries[i] = Some(Entry { key, value });
                    return None;
                }
                Probe::Missing(_) => {}
            }

            depth += 1;
            bucket = &mut **bucket.overflow.get_or_insert_with(|| {
                trace!("chaining overflow bucket at depth {}", depth);
                Box::new(Bucket::new())
            });
        }
    }

    /// Looks `key` up in this bucket, then down its chain.
    pub(crate) fn get<Q>(&self, key: &Q, tophash: u8) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut next = Some(self);
        while let Some(bucket) = next {
            if let Probe::Found(i) = bucket.probe(key, tophash) {
                return bucket.entries[i].as_ref().map(|entry| &entry.value);
            }
            next = bucket.overflow.as_deref();
        }
        None
    }
}

impl<K, V> Drop for Bucket<K, V> {
    fn drop(&mut self) {
        // Unlink the chain first so dropping a long chain does not recurse.
        let mut next = self.overflow.take();
        while let Some(mut bucket) = next {
            next = bucket.overflow.take();
        }
    }
}
