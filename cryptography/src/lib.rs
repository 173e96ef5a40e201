//! Derive fixed-width keys from arbitrary bytes.
//!
//! Hash functions are not hardcoded to a specific algorithm: primitives built on top of this crate
//! are generic over [Hasher], so callers can trade digest width (and collision probability) for
//! memory. Two non-cryptographic implementations are provided, [Fnv64a] and [Fnv128a].
//!
//! Hashers keep internal scratch state, so reusing them across calls avoids repeated setup. The
//! [Pool] hands out reset instances and takes them back when they are no longer in use.

use std::{fmt::Debug, hash::Hash, io};
use thiserror::Error;

pub mod fnv;
pub use fnv::{Fnv128a, Fnv64a};
pub mod pool;
pub use pool::Pool;

/// Errors that can occur when hashing.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid digest length")]
    InvalidDigestLength,
    #[error("failed to read input: {0}")]
    Read(io::Error),
    #[error("failed to write input: {0}")]
    Write(io::Error),
}

/// Fixed-width output of a [Hasher].
///
/// Digests are totally ordered so they can be used directly as keys of a sorted index.
pub trait Digest: Ord + Hash + Copy + Debug + Send + Sync + 'static {}

impl Digest for u64 {}

/// Interface that hashsearch crates rely on for hashing.
///
/// Implementations must be deterministic: the same input bytes always produce the same digest,
/// regardless of how the input was split across calls to [Hasher::update].
///
/// This trait is required to implement the `Clone` trait because it is often part of a struct
/// that is cloned. Users should not rely on the hasher state being cloned and should call `reset`
/// after cloning.
pub trait Hasher: Clone + Send + Sync + 'static {
    /// Digest generated by the hasher.
    type Digest: Digest;

    /// Create a new hasher.
    fn new() -> Self;

    /// Append message to previously recorded data.
    fn update(&mut self, message: &[u8]);

    /// Hash all recorded data and reset the hasher
    /// to the initial state.
    fn finalize(&mut self) -> Self::Digest;

    /// Reset the hasher without generating a hash.
    ///
    /// This function does not need to be called after `finalize`.
    fn reset(&mut self);

    /// Hash a message with a fresh hasher.
    fn hash(message: &[u8]) -> Self::Digest {
        let mut hasher = Self::new();
        hasher.update(message);
        hasher.finalize()
    }
}

/// Adapts a [Hasher] into an [io::Write] sink, so that any byte stream can be hashed with
/// [io::copy] or written to by a serializer.
pub struct Writer<'a, H: Hasher> {
    hasher: &'a mut H,
}

impl<'a, H: Hasher> Writer<'a, H> {
    /// Create a new [Writer] that feeds all written bytes to `hasher`.
    pub fn new(hasher: &'a mut H) -> Self {
        Self { hasher }
    }
}

impl<H: Hasher> io::Write for Writer<'_, H> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.hasher.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Converts bytes to a hexadecimal string.
pub fn hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes.iter() {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn test_hasher_multiple_runs<H: Hasher>() {
        // Generate initial hash
        let mut hasher = H::new();
        hasher.update(b"hello world");
        let digest = hasher.finalize();

        // Reuse hasher without reset
        hasher.update(b"hello world");
        let digest_again = hasher.finalize();
        assert_eq!(digest, digest_again);

        // Reuse hasher with reset
        hasher.update(b"hello mars");
        hasher.reset();
        hasher.update(b"hello world");
        let digest_reset = hasher.finalize();
        assert_eq!(digest, digest_reset);

        // Hash different data
        hasher.update(b"hello mars");
        let digest_mars = hasher.finalize();
        assert_ne!(digest, digest_mars);
    }

    fn test_hasher_multiple_updates<H: Hasher>() {
        // Generate initial hash
        let mut hasher = H::new();
        hasher.update(b"hello");
        hasher.update(b" world");
        let digest = hasher.finalize();

        // Generate hash in oneshot
        assert_eq!(digest, H::hash(b"hello world"));
    }

    fn test_hasher_writer<H: Hasher>() {
        let mut hasher = H::new();
        let mut writer = Writer::new(&mut hasher);
        write!(writer, "hello {}", "world").unwrap();
        writer.flush().unwrap();
        assert_eq!(hasher.finalize(), H::hash(b"hello world"));
    }

    #[test]
    fn test_fnv64a_hasher_multiple_runs() {
        test_hasher_multiple_runs::<Fnv64a>();
    }

    #[test]
    fn test_fnv64a_hasher_multiple_updates() {
        test_hasher_multiple_updates::<Fnv64a>();
    }

    #[test]
    fn test_fnv64a_hasher_writer() {
        test_hasher_writer::<Fnv64a>();
    }

    #[test]
    fn test_fnv128a_hasher_multiple_runs() {
        test_hasher_multiple_runs::<Fnv128a>();
    }

    #[test]
    fn test_fnv128a_hasher_multiple_updates() {
        test_hasher_multiple_updates::<Fnv128a>();
    }

    #[test]
    fn test_fnv128a_hasher_writer() {
        test_hasher_writer::<Fnv128a>();
    }

    #[test]
    fn test_hex() {
        assert_eq!(hex(&[]), "");
        assert_eq!(hex(&[0x00, 0x0f, 0xab, 0xff]), "000fabff");
    }
}
