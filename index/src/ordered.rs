//! Implementation of the sorted index over any totally ordered key.

use crate::{metrics::Metrics, Config};
use parking_lot::RwLock;
use prometheus_client::registry::Registry;
use std::borrow::Borrow;
use tracing::{debug, trace};

/// A sorted, growable collection of keys guarded by a reader/writer lock.
///
/// Keys are kept in ascending order according to [Ord]. Duplicates are preserved and stored next
/// to each other. Lookups ([Ordered::has]) take the shared lock; every mutation takes the exclusive
/// lock for its whole duration.
#[derive(Debug)]
pub struct Ordered<K> {
    keys: RwLock<Vec<K>>,
    metrics: Metrics,
}

impl<K: Ord> Default for Ordered<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> Ordered<K> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::init(Config::default())
    }

    /// Create an empty index with the given configuration.
    pub fn init(cfg: Config) -> Self {
        Self {
            keys: RwLock::new(Vec::with_capacity(cfg.capacity)),
            metrics: Metrics::default(),
        }
    }

    /// Register the metrics of this index with the provided [Registry].
    ///
    /// To namespace the metrics, pass a sub-registry (e.g. [Registry::sub_registry_with_prefix]).
    pub fn register(&self, registry: &mut Registry) {
        self.metrics.register(registry);
    }

    /// Sort all keys in ascending order.
    ///
    /// This must be called after using [Ordered::unordered_append] and before relying on any
    /// other operation.
    pub fn sort(&self) {
        let mut keys = self.keys.write();
        keys.sort_unstable();
        self.metrics.sorts.inc();
        debug!(keys = keys.len(), "sorted index");
    }

    /// Insert `key` at its sorted position.
    ///
    /// Duplicate keys are accepted and stored in front of any equal keys already present.
    pub fn add(&self, key: K) {
        let mut keys = self.keys.write();
        let index = Self::search(&keys, &key);
        keys.insert(index, key);
        self.metrics.inserts.inc();
        self.metrics.keys.inc();
    }

    /// Append `key` to the end of the index without considering its order.
    ///
    /// # Warning
    ///
    /// This leaves the index unsorted. [Ordered::sort] must be called before any lookup or ordered
    /// insertion, otherwise their results are unspecified.
    pub fn unordered_append(&self, key: K) {
        let mut keys = self.keys.write();
        keys.push(key);
        self.metrics.appends.inc();
        self.metrics.keys.inc();
        trace!(keys = keys.len(), "appended key without ordering");
    }

    /// Returns `true` if the index contains `key`.
    ///
    /// The index must be sorted (see [Ordered::unordered_append]).
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let keys = self.keys.read();
        let found = Self::contains(&keys, Self::search(&keys, key), key);
        self.metrics.lookup(found);
        found
    }

    /// Returns `true` if the index already contains `key`. Otherwise, inserts `key` at its sorted
    /// position and returns `false`.
    ///
    /// The check and the insertion happen under a single exclusive lock acquisition, so concurrent
    /// callers providing the same absent key will see exactly one `false`.
    pub fn has_or_add(&self, key: K) -> bool {
        let mut keys = self.keys.write();
        let index = Self::search(&keys, &key);
        let found = Self::contains(&keys, index, &key);
        self.metrics.lookup(found);
        if !found {
            keys.insert(index, key);
            self.metrics.inserts.inc();
            self.metrics.keys.inc();
        }
        found
    }

    /// Returns the number of keys stored in the index (counting duplicates).
    pub fn len(&self) -> usize {
        self.keys.read().len()
    }

    /// Returns `true` if the index holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.read().is_empty()
    }

    /// Returns a copy of the stored keys, in their current order.
    pub fn snapshot(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.keys.read().clone()
    }

    /// Returns the leftmost position `i` such that `keys[i] >= key` (or `keys.len()` if there is
    /// none).
    fn search<Q>(keys: &[K], key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        keys.partition_point(|k| k.borrow() < key)
    }

    fn contains<Q>(keys: &[K], index: usize, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        keys.get(index).is_some_and(|k| k.borrow() == key)
    }
}
