//! FNV-1a implementations of the `Hasher` trait.
//!
//! [FNV-1a](http://www.isthe.com/chongo/tech/comp/fnv/index.html) is a fast, non-cryptographic
//! hash function. Two widths are provided: [Fnv64a] produces a [u64] and [Fnv128a] produces a
//! 16-byte [Digest] (the big-endian encoding of the 128-bit state).
//!
//! # Example
//! ```rust
//! use hashsearch_cryptography::{Fnv128a, Fnv64a, Hasher};
//!
//! // Create a new 64-bit hasher
//! let mut hasher = Fnv64a::new();
//!
//! // Update the hasher with some messages
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//!
//! // Finalize the hasher to get the digest
//! assert_eq!(hasher.finalize(), 0x779a65e7023cd2e7);
//!
//! // Generate a 128-bit digest in one shot
//! let digest = Fnv128a::hash(b"hello world");
//! assert_eq!(digest.to_string(), "6c155799fdc8eec4b91523808e7726b7");
//! ```

use crate::{hex, Error, Hasher};
use std::{
    fmt::{Debug, Display},
    ops::Deref,
};

const OFFSET_BASIS_64: u64 = 0xcbf29ce484222325;
const PRIME_64: u64 = 0x100000001b3;

const OFFSET_BASIS_128: u128 = 0x6c62272e07bb014262b821756295c58d;
const PRIME_128: u128 = 0x1000000000000000000013b;

const DIGEST_LENGTH: usize = 16;

/// FNV-1a 64-bit hasher.
#[derive(Clone, Debug)]
pub struct Fnv64a {
    state: u64,
}

impl Default for Fnv64a {
    fn default() -> Self {
        <Self as Hasher>::new()
    }
}

impl Hasher for Fnv64a {
    type Digest = u64;

    fn new() -> Self {
        Self {
            state: OFFSET_BASIS_64,
        }
    }

    fn update(&mut self, message: &[u8]) {
        for byte in message {
            self.state ^= *byte as u64;
            self.state = self.state.wrapping_mul(PRIME_64);
        }
    }

    fn finalize(&mut self) -> Self::Digest {
        let digest = self.state;
        self.reset();
        digest
    }

    fn reset(&mut self) {
        self.state = OFFSET_BASIS_64;
    }
}

/// FNV-1a 128-bit hasher.
#[derive(Clone, Debug)]
pub struct Fnv128a {
    state: u128,
}

impl Default for Fnv128a {
    fn default() -> Self {
        <Self as Hasher>::new()
    }
}

impl Hasher for Fnv128a {
    type Digest = Digest;

    fn new() -> Self {
        Self {
            state: OFFSET_BASIS_128,
        }
    }

    fn update(&mut self, message: &[u8]) {
        for byte in message {
            self.state ^= *byte as u128;
            self.state = self.state.wrapping_mul(PRIME_128);
        }
    }

    fn finalize(&mut self) -> Self::Digest {
        let digest = Digest(self.state.to_be_bytes());
        self.reset();
        digest
    }

    fn reset(&mut self) {
        self.state = OFFSET_BASIS_128;
    }
}

/// Digest of a FNV-1a 128-bit hashing operation.
///
/// Digests compare lexicographically, which matches the numeric order of the underlying 128-bit
/// value.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Digest([u8; DIGEST_LENGTH]);

impl Digest {
    /// Size of the digest in bytes.
    pub const SIZE: usize = DIGEST_LENGTH;
}

impl From<[u8; DIGEST_LENGTH]> for Digest {
    fn from(value: [u8; DIGEST_LENGTH]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = Error;
    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; DIGEST_LENGTH] =
            value.try_into().map_err(|_| Error::InvalidDigestLength)?;
        Ok(Self(array))
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for Digest {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&self.0))
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&self.0))
    }
}

impl crate::Digest for Digest {}
