//! A concurrency-safe, sorted index for answering "have I seen this before?" in logarithmic time.
//!
//! Keys are stored in a single growable array kept in ascending order (duplicates are permitted
//! and preserved). Membership is answered with a leftmost binary search; insertion locates the same
//! position and shifts the tail. Compared with a tree, this trades `O(n)` insertion for simple,
//! cache-friendly lookups, which suits append-heavy and read-heavy workloads of moderate size.
//!
//! All operations acquire a reader/writer lock internally, so an [Ordered] index can be shared
//! between threads (e.g. behind an [std::sync::Arc]) without external synchronization.
//! [Ordered::has_or_add] checks and inserts under a single exclusive acquisition, so two callers
//! racing on the same absent key observe exactly one `false`.
//!
//! # Warning
//!
//! [Ordered::unordered_append] pushes keys without comparison and breaks the sort order until
//! [Ordered::sort] is called. Queries issued in that window return unspecified results (no error
//! is raised). Use it only to bulk load many keys followed by a single sort.
//!
//! # Example
//!
//! ```rust
//! use hashsearch_index::Int;
//!
//! let index = Int::new();
//! index.unordered_append(33);
//! index.unordered_append(33);
//! index.unordered_append(1);
//! index.sort();
//! assert_eq!(index.snapshot(), vec![1, 33, 33]);
//!
//! assert!(index.has(&33));
//! assert!(!index.has(&2));
//! assert!(!index.has_or_add(2));
//! assert!(index.has_or_add(2));
//! ```

mod metrics;
mod ordered;
pub use ordered::Ordered;

/// An [Ordered] index of signed integers.
pub type Int = Ordered<i64>;

/// An [Ordered] index of unsigned 64-bit integers.
pub type Uint64 = Ordered<u64>;

/// An [Ordered] index of variable-length byte sequences, compared lexicographically.
pub type Bytes = Ordered<Vec<u8>>;

/// Configuration for an [Ordered] index.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// The number of keys to reserve space for when the index is created.
    pub capacity: usize,
}
