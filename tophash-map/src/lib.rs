//! Bucketed hash map with tophash filtering and overflow chaining
//!
//! This crate provides a single-threaded hash map in the style of the maps
//! found in language runtimes: a power-of-two array of fixed 8-slot buckets,
//! a one-byte "tophash" per slot that filters candidates before any key
//! comparison, and a singly linked overflow chain per bucket for keys that do
//! not fit.
//!
//! # Features
//!
//! - **Fixed Buckets**: 8 slots per bucket, scanned linearly for locality
//! - **Tophash Filtering**: The high byte of the hash is compared before keys
//! - **Overflow Chaining**: Full buckets grow a chain instead of rejecting keys
//! - **Size Hints**: The bucket count is derived once from an expected size
//! - **Flexible Hashing**: Any `BuildHasher`; foldhash `RandomState` by default
//!
//! The bucket array is never resized and entries are never removed.
//!
//! # Example
//!
//! ```rust
//! use tophash_map::StringMap;
//!
//! let mut map = StringMap::with_capacity(1);
//! assert_eq!(map.bucket_count(), 2);
//!
//! map.insert("a".to_string(), "b".to_string());
//! assert_eq!(map.len(), 1);
//!
//! assert_eq!(map.get("a").map(String::as_str), Some("b"));
//! assert_eq!(map.get("z"), None);
//! ```

#![warn(missing_docs)]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use alloc::string::String;
use foldhash::fast::RandomState;

mod bucket;
mod error;
mod hash;
mod map;

pub use bucket::BUCKET_SIZE;
pub use error::MapError;
pub use map::{BucketMap, bucket_count_log2_for};

/// Map from owned strings to owned strings.
pub type StringMap<S = RandomState> = BucketMap<String, String, S>;
