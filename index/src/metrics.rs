use prometheus_client::{
    metrics::{counter::Counter, gauge::Gauge},
    registry::Registry,
};

/// Metrics tracked by an [crate::Ordered] index.
///
/// Handles are reference counted, so clones registered in a [Registry] observe the same values.
#[derive(Clone, Debug, Default)]
pub(crate) struct Metrics {
    pub keys: Gauge,
    pub inserts: Counter,
    pub appends: Counter,
    pub sorts: Counter,
    pub hits: Counter,
    pub misses: Counter,
}

impl Metrics {
    pub fn register(&self, registry: &mut Registry) {
        registry.register("keys", "Number of keys in the index", self.keys.clone());
        registry.register(
            "inserts",
            "Number of keys inserted in order",
            self.inserts.clone(),
        );
        registry.register(
            "appends",
            "Number of keys appended without ordering",
            self.appends.clone(),
        );
        registry.register("sorts", "Number of times the index was sorted", self.sorts.clone());
        registry.register("hits", "Number of lookups that found the key", self.hits.clone());
        registry.register(
            "misses",
            "Number of lookups that did not find the key",
            self.misses.clone(),
        );
    }

    /// Record the outcome of a lookup.
    pub fn lookup(&self, found: bool) {
        if found {
            self.hits.inc();
        } else {
            self.misses.inc();
        }
    }
}
