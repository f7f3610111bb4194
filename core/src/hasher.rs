//! Hashers (feature-gated) and utilities for implementing them.

use crate::tree::Node;

/// A hash function combining two sibling nodes into their 32-byte parent.
///
/// The tree carries no domain separation: leaves and internal nodes share
/// the same representation, and the combining function is expected to act as
/// a collision-resistant compression of the 64-byte concatenation of its
/// inputs.
pub trait NodeHasher {
    /// Combine the left and right child nodes into their parent node.
    fn combine(left: &Node, right: &Node) -> Node;
}

/// A simple trait for representing binary hash functions.
pub trait BinaryHash {
    /// Given a byte-string, produce a 32-byte hash.
    fn hash(input: &[u8]) -> [u8; 32];

    /// An optional specialization of `hash` where there are two 32-byte inputs, left and right.
    fn hash2_32_concat(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
        let mut buf = [0u8; 64];
        buf[0..32].copy_from_slice(left);
        buf[32..64].copy_from_slice(right);
        Self::hash(&buf)
    }
}

/// A node hasher constructed from a simple binary hasher.
///
/// The binary hash wrapped by this structure must behave approximately like
/// a random oracle over the space 2^256, i.e. all 256 bit outputs are valid
/// and inputs are uniformly distributed.
///
/// Functions like Sha2/Blake3/Keccak/Groestl all meet these criteria.
pub struct BinaryHasher<H>(core::marker::PhantomData<H>);

impl<H: BinaryHash> NodeHasher for BinaryHasher<H> {
    fn combine(left: &Node, right: &Node) -> Node {
        H::hash2_32_concat(left, right)
    }
}

/// Blanket implementation for all implementations of `Digest`
impl<H: digest::Digest<OutputSize = digest::typenum::U32> + Send + Sync> BinaryHash for H {
    fn hash(input: &[u8]) -> [u8; 32] {
        H::digest(input).into()
    }
}

#[cfg(any(feature = "sha2-hasher", test))]
pub use sha2::Sha2Hasher;

/// A node hasher making use of sha2-256.
#[cfg(any(feature = "sha2-hasher", test))]
pub mod sha2 {
    use super::{BinaryHash, BinaryHasher};
    use sha2::{Digest, Sha256};

    /// A [`BinaryHash`] implementation for Sha2.
    pub struct Sha2BinaryHasher;

    /// A wrapper around sha2-256, the hash function of the observed code
    /// trie fixtures.
    pub type Sha2Hasher = BinaryHasher<Sha2BinaryHasher>;

    impl BinaryHash for Sha2BinaryHasher {
        fn hash(value: &[u8]) -> [u8; 32] {
            let mut hasher = Sha256::new();
            hasher.update(value);
            hasher.finalize().into()
        }

        fn hash2_32_concat(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
            let mut hasher = Sha256::new();
            hasher.update(left);
            hasher.update(right);
            hasher.finalize().into()
        }
    }
}

#[cfg(any(feature = "blake3-hasher", test))]
pub use blake3::Blake3Hasher;

/// A node hasher making use of blake3.
#[cfg(any(feature = "blake3-hasher", test))]
pub mod blake3 {
    use super::{BinaryHash, BinaryHasher};

    /// A [`BinaryHash`] implementation for Blake3.
    pub struct Blake3BinaryHasher;

    /// A wrapper around Blake3 for hashing tree nodes.
    pub type Blake3Hasher = BinaryHasher<Blake3BinaryHasher>;

    impl BinaryHash for Blake3BinaryHasher {
        fn hash(value: &[u8]) -> [u8; 32] {
            blake3::hash(value).into()
        }

        fn hash2_32_concat(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
            let mut hasher = blake3::Hasher::new();
            hasher.update(left);
            hasher.update(right);
            hasher.finalize().into()
        }
    }
}
