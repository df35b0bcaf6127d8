pub mod config;
pub mod error;
pub mod hasher;
pub mod log;
pub mod ring;
pub mod shared;

pub use config::RingConfig;
pub use error::RingError;
pub use hasher::{Murmur3Hasher, RingHasher, Sha256Hasher};
pub use ring::HashRing;
pub use shared::SharedRing;
