//! Track previously seen items by their hash.
//!
//! A [Tracker] hashes strings, byte slices, and byte streams into fixed-width digests (using a
//! pool of reusable [hashsearch_cryptography::Hasher]s) and records them in a sorted
//! [hashsearch_index::Ordered] index. It is meant for deduplication: feed it candidate items and it
//! tells you whether each was already seen, optionally recording it at the same time.
//!
//! Unlike a Bloom filter, membership is exact with respect to digests: the only source of false
//! positives is a hash collision, which is vanishingly unlikely for [Tracker128].
//!
//! # Example
//!
//! ```rust
//! use hashsearch_tracker::Tracker128;
//!
//! let tracker = Tracker128::new();
//! assert!(!tracker.has_or_add("hello world"));
//! assert!(tracker.has_or_add("hello world"));
//! assert!(tracker.has(b"hello world"));
//!
//! // Streams are hashed by their full contents
//! assert!(tracker.has_from_reader(&b"hello world"[..]).unwrap());
//! assert!(!tracker.has("goodbye"));
//! ```

use hashsearch_cryptography::{pool, Fnv128a, Fnv64a};
use thiserror::Error;

mod tracker;
pub use tracker::Tracker;

/// A [Tracker] keyed by 64-bit FNV-1a digests.
pub type Tracker64 = Tracker<Fnv64a>;

/// A [Tracker] keyed by 128-bit FNV-1a digests.
pub type Tracker128 = Tracker<Fnv128a>;

/// Errors that can occur when interacting with a [Tracker].
#[derive(Debug, Error)]
pub enum Error {
    #[error("hash error: {0}")]
    Hash(#[from] hashsearch_cryptography::Error),
}

/// Configuration for a [Tracker].
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// Configuration of the underlying index.
    pub index: hashsearch_index::Config,

    /// Configuration of the hasher pool.
    pub pool: pool::Config,
}
