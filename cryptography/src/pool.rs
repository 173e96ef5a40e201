//! A pool of reusable [Hasher] instances.
//!
//! Borrowing from the [Pool] returns a [Guard] that dereferences to a freshly reset hasher. When the
//! guard is dropped (including when a hashing call returns early with an error), the hasher is
//! handed back to the pool. At most [Config::capacity] idle hashers are retained; any extra
//! instances are dropped.
//!
//! Pooling never changes results: every borrowed hasher starts from its initial state.
//!
//! # Example
//! ```rust
//! use hashsearch_cryptography::{pool::Config, Fnv64a, Hasher, Pool};
//!
//! let pool = Pool::<Fnv64a>::new(Config::default());
//! let digest = pool.hash(b"hello world");
//! assert_eq!(digest, Fnv64a::hash(b"hello world"));
//!
//! // Streams are consumed fully
//! let digest = pool.hash_reader(&b"hello world"[..]).unwrap();
//! assert_eq!(digest, 0x779a65e7023cd2e7);
//! ```

use crate::{Error, Hasher, Writer};
use parking_lot::Mutex;
use std::{
    io,
    mem::ManuallyDrop,
    ops::{Deref, DerefMut},
};

/// Default number of idle hashers retained by a [Pool].
const DEFAULT_CAPACITY: usize = 16;

/// Configuration for a [Pool].
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// The maximum number of idle hashers to retain.
    pub capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// A pool of reusable hashers.
pub struct Pool<H: Hasher> {
    idle: Mutex<Vec<H>>,
    capacity: usize,
}

impl<H: Hasher> Default for Pool<H> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<H: Hasher> Pool<H> {
    /// Create a new, empty [Pool].
    pub fn new(cfg: Config) -> Self {
        Self {
            idle: Mutex::new(Vec::with_capacity(cfg.capacity)),
            capacity: cfg.capacity,
        }
    }

    /// Borrow a hasher, creating one if none is idle.
    ///
    /// The returned hasher is always reset to its initial state.
    pub fn get(&self) -> Guard<'_, H> {
        let hasher = self.idle.lock().pop();
        let mut hasher = hasher.unwrap_or_else(H::new);
        hasher.reset();
        Guard {
            pool: self,
            hasher: ManuallyDrop::new(hasher),
        }
    }

    /// Returns the number of idle hashers.
    pub fn idle(&self) -> usize {
        self.idle.lock().len()
    }

    /// Hash `message` with a pooled hasher.
    pub fn hash(&self, message: &[u8]) -> H::Digest {
        let mut hasher = self.get();
        hasher.update(message);
        hasher.finalize()
    }

    /// Hash the full contents of `reader` with a pooled hasher.
    ///
    /// If `reader` fails, no digest is produced and the hasher is returned to the pool.
    pub fn hash_reader<R: io::Read>(&self, mut reader: R) -> Result<H::Digest, Error> {
        let mut hasher = self.get();
        io::copy(&mut reader, &mut Writer::new(&mut *hasher)).map_err(Error::Read)?;
        Ok(hasher.finalize())
    }

    /// Hash all bytes written by `callback` with a pooled hasher.
    ///
    /// If `callback` fails, no digest is produced and the hasher is returned to the pool.
    pub fn hash_from_writer<F>(&self, callback: F) -> Result<H::Digest, Error>
    where
        F: FnOnce(&mut dyn io::Write) -> io::Result<()>,
    {
        let mut hasher = self.get();
        callback(&mut Writer::new(&mut *hasher)).map_err(Error::Write)?;
        Ok(hasher.finalize())
    }

    fn put(&self, hasher: H) {
        let mut idle = self.idle.lock();
        if idle.len() < self.capacity {
            idle.push(hasher);
        }
    }
}

/// A hasher borrowed from a [Pool].
///
/// The hasher is returned to the pool when the guard is dropped.
pub struct Guard<'a, H: Hasher> {
    pool: &'a Pool<H>,
    hasher: ManuallyDrop<H>,
}

impl<H: Hasher> Deref for Guard<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        &self.hasher
    }
}

impl<H: Hasher> DerefMut for Guard<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        &mut self.hasher
    }
}

impl<H: Hasher> Drop for Guard<'_, H> {
    fn drop(&mut self) {
        // SAFETY: Drop is only called once and the hasher is not accessed afterwards.
        let hasher = unsafe { ManuallyDrop::take(&mut self.hasher) };
        self.pool.put(hasher);
    }
}
