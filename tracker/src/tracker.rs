use crate::{Config, Error};
use hashsearch_cryptography::{Hasher, Pool};
use hashsearch_index::Ordered;
use prometheus_client::registry::Registry;
use std::io;
use tracing::{debug, trace};

/// Records the digests of previously seen items in a sorted index.
///
/// Every index operation is available in three flavors: keyed by an item (anything that is
/// `AsRef<[u8]>`, so a string and its bytes are interchangeable), keyed by the full contents of a
/// reader, or keyed by a precomputed digest.
pub struct Tracker<H: Hasher> {
    pool: Pool<H>,
    index: Ordered<H::Digest>,
}

impl<H: Hasher> Default for Tracker<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Hasher> Tracker<H> {
    /// Create an empty [Tracker] with the default configuration.
    pub fn new() -> Self {
        Self::init(Config::default())
    }

    /// Create an empty [Tracker] with the given configuration.
    pub fn init(cfg: Config) -> Self {
        Self {
            pool: Pool::new(cfg.pool),
            index: Ordered::init(cfg.index),
        }
    }

    /// Register the metrics of the underlying index with the provided [Registry].
    pub fn register(&self, registry: &mut Registry) {
        self.index.register(registry);
    }

    /// Hash `item` into the digest used as its key.
    pub fn hash(&self, item: impl AsRef<[u8]>) -> H::Digest {
        self.pool.hash(item.as_ref())
    }

    /// Hash the full contents of `reader` into the digest used as its key.
    pub fn hash_reader<R: io::Read>(&self, reader: R) -> Result<H::Digest, Error> {
        self.pool.hash_reader(reader).map_err(|err| {
            debug!(?err, "failed to hash reader");
            err.into()
        })
    }

    /// Hash all bytes written by `callback` into the digest used as their key.
    pub fn hash_from_writer<F>(&self, callback: F) -> Result<H::Digest, Error>
    where
        F: FnOnce(&mut dyn io::Write) -> io::Result<()>,
    {
        self.pool.hash_from_writer(callback).map_err(|err| {
            debug!(?err, "failed to hash writer");
            err.into()
        })
    }

    /// Sort the underlying index.
    ///
    /// This must be called after any of the `unordered_append` variants and before relying on any
    /// other operation.
    pub fn sort(&self) {
        self.index.sort();
    }

    /// Record `item`, keeping the index sorted.
    ///
    /// Items that were already recorded are recorded again (duplicates are preserved).
    pub fn add(&self, item: impl AsRef<[u8]>) {
        self.add_digest(self.hash(item));
    }

    /// Record the contents of `reader`, keeping the index sorted.
    ///
    /// Nothing is recorded if `reader` fails.
    pub fn add_from_reader<R: io::Read>(&self, reader: R) -> Result<(), Error> {
        self.add_digest(self.hash_reader(reader)?);
        Ok(())
    }

    /// Record `digest`, keeping the index sorted.
    pub fn add_digest(&self, digest: H::Digest) {
        self.index.add(digest);
    }

    /// Record `item` at the end of the index without considering its order.
    ///
    /// # Warning
    ///
    /// [Tracker::sort] must be called before any other operation is relied upon.
    pub fn unordered_append(&self, item: impl AsRef<[u8]>) {
        self.unordered_append_digest(self.hash(item));
    }

    /// Record the contents of `reader` at the end of the index without considering its order.
    ///
    /// # Warning
    ///
    /// [Tracker::sort] must be called before any other operation is relied upon.
    pub fn unordered_append_from_reader<R: io::Read>(&self, reader: R) -> Result<(), Error> {
        self.unordered_append_digest(self.hash_reader(reader)?);
        Ok(())
    }

    /// Record `digest` at the end of the index without considering its order.
    ///
    /// # Warning
    ///
    /// [Tracker::sort] must be called before any other operation is relied upon.
    pub fn unordered_append_digest(&self, digest: H::Digest) {
        self.index.unordered_append(digest);
    }

    /// Returns `true` if `item` was recorded.
    pub fn has(&self, item: impl AsRef<[u8]>) -> bool {
        self.has_digest(&self.hash(item))
    }

    /// Returns `true` if the contents of `reader` were recorded.
    pub fn has_from_reader<R: io::Read>(&self, reader: R) -> Result<bool, Error> {
        Ok(self.has_digest(&self.hash_reader(reader)?))
    }

    /// Returns `true` if `digest` was recorded.
    pub fn has_digest(&self, digest: &H::Digest) -> bool {
        self.index.has(digest)
    }

    /// Returns `true` if `item` was already recorded. Otherwise, records it and returns `false`.
    pub fn has_or_add(&self, item: impl AsRef<[u8]>) -> bool {
        self.has_or_add_digest(self.hash(item))
    }

    /// Returns `true` if the contents of `reader` were already recorded. Otherwise, records them
    /// and returns `false`.
    ///
    /// Nothing is recorded if `reader` fails.
    pub fn has_or_add_from_reader<R: io::Read>(&self, reader: R) -> Result<bool, Error> {
        Ok(self.has_or_add_digest(self.hash_reader(reader)?))
    }

    /// Returns `true` if `digest` was already recorded. Otherwise, records it and returns `false`.
    pub fn has_or_add_digest(&self, digest: H::Digest) -> bool {
        let found = self.index.has_or_add(digest);
        trace!(?digest, found, "checked digest");
        found
    }

    /// Returns the number of recorded digests (counting duplicates).
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns a copy of the recorded digests, in their current order.
    pub fn snapshot(&self) -> Vec<H::Digest> {
        self.index.snapshot()
    }
}
