use std::fmt::Debug;

use murmurhash3::murmurhash3_x64_128;
use sha2::{Digest, Sha256};

/// Maps a byte sequence to a position on the ring.
///
/// Implementations must be deterministic across calls and across process
/// runs, so no randomly seeded hashers (e.g. `RandomState`).
pub trait RingHasher: Debug + Send + Sync {
    fn hash(&self, input: &[u8]) -> u64;
}

/// First 8 bytes of SHA-256, read big-endian.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sha256Hasher;

impl RingHasher for Sha256Hasher {
    fn hash(&self, input: &[u8]) -> u64 {
        let digest = Sha256::digest(input);
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest[..8]);
        u64::from_be_bytes(head)
    }
}

/// MurmurHash3 (x64, 128-bit variant), keeping the first half.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Murmur3Hasher {
    pub seed: u64,
}

impl Murmur3Hasher {
    pub fn new(seed: u64) -> Self {
        Murmur3Hasher { seed }
    }
}

impl RingHasher for Murmur3Hasher {
    fn hash(&self, input: &[u8]) -> u64 {
        murmurhash3_x64_128(input, self.seed).0
    }
}

// label hashed for the `index`-th replica of `name`
pub fn replica_label(name: &str, index: usize) -> String {
    format!("{}:{}", name, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_uses_first_eight_bytes_big_endian() {
        // sha256("hello") = 2cf24dba5fb0a30e...
        assert_eq!(Sha256Hasher.hash(b"hello"), 0x2cf24dba5fb0a30e);
    }

    #[test]
    fn sha256_empty_input() {
        // sha256("") = e3b0c44298fc1c14...
        assert_eq!(Sha256Hasher.hash(b""), 0xe3b0c44298fc1c14);
    }

    #[test]
    fn hashers_are_deterministic() {
        let m = Murmur3Hasher::new(7);
        for input in [&b"a"[..], b"server:0", b"some longer key with spaces"] {
            assert_eq!(Sha256Hasher.hash(input), Sha256Hasher.hash(input));
            assert_eq!(m.hash(input), Murmur3Hasher::new(7).hash(input));
        }
    }

    #[test]
    fn murmur_seed_changes_output() {
        let a = Murmur3Hasher::new(0).hash(b"key");
        let b = Murmur3Hasher::new(1).hash(b"key");
        assert_ne!(a, b);
    }

    #[test]
    fn replica_label_format() {
        assert_eq!(replica_label("cache-1", 0), "cache-1:0");
        assert_eq!(replica_label("", 12), ":12");
    }
}
