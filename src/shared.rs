use std::sync::Arc;

use parking_lot::RwLock;

use crate::{
    config::RingConfig,
    error::Result,
    hasher::{RingHasher, Sha256Hasher},
    ring::HashRing,
};

/// Thread-safe handle over a [`HashRing`].
///
/// Lookups share a read lock; membership changes take the write lock.
/// Clones point at the same ring.
#[derive(Debug)]
pub struct SharedRing<H: RingHasher = Sha256Hasher> {
    inner: Arc<RwLock<HashRing<H>>>,
}

impl<H: RingHasher> Clone for SharedRing<H> {
    fn clone(&self) -> Self {
        SharedRing {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedRing {
    pub fn new(replicas: usize) -> Result<Self> {
        Ok(Self::from_ring(HashRing::new(replicas)?))
    }

    pub fn from_config(config: &RingConfig) -> Result<Self> {
        Ok(Self::from_ring(HashRing::from_config(config)?))
    }
}

impl<H: RingHasher> SharedRing<H> {
    pub fn from_ring(ring: HashRing<H>) -> Self {
        SharedRing {
            inner: Arc::new(RwLock::new(ring)),
        }
    }

    pub fn add_server(&self, name: &str) {
        self.inner.write().add_server(name);
    }

    pub fn remove_server(&self, name: &str) {
        self.inner.write().remove_server(name);
    }

    pub fn resolve(&self, key: &str) -> Option<Arc<str>> {
        self.inner.read().resolve(key).map(Arc::from)
    }

    pub fn contains_server(&self, name: &str) -> bool {
        self.inner.read().contains_server(name)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Runs `f` against the ring under the read lock.
    pub fn with_ring<R>(&self, f: impl FnOnce(&HashRing<H>) -> R) -> R {
        f(&*self.inner.read())
    }
}

impl<H: RingHasher + Clone> SharedRing<H> {
    pub fn snapshot(&self) -> HashRing<H> {
        self.inner.read().clone()
    }
}
