use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    sync::Arc,
};

use log::{debug, trace};

use crate::{
    config::RingConfig,
    error::{Result, RingError},
    hasher::{replica_label, RingHasher, Sha256Hasher},
};

/// Consistent hash ring mapping keys to server names.
///
/// Every server occupies `replicas` positions, one per `"{name}:{i}"` label.
/// A key belongs to the first position at or after its own hash, wrapping
/// to the smallest position when it hashes past the last one.
#[derive(Debug, Clone)]
pub struct HashRing<H: RingHasher = Sha256Hasher> {
    hasher: H,
    replicas: usize,
    positions: BTreeMap<u64, Arc<str>>,
}

impl HashRing {
    pub fn new(replicas: usize) -> Result<Self> {
        Self::with_hasher(replicas, Sha256Hasher)
    }

    pub fn from_config(config: &RingConfig) -> Result<Self> {
        Self::new(config.replicas)
    }
}

impl<H: RingHasher> HashRing<H> {
    pub fn with_hasher(replicas: usize, hasher: H) -> Result<Self> {
        if replicas == 0 {
            return Err(RingError::InvalidReplicaCount(replicas));
        }
        Ok(HashRing {
            hasher,
            replicas,
            positions: BTreeMap::new(),
        })
    }

    pub fn replicas(&self) -> usize {
        self.replicas
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Number of occupied positions, not servers.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn hash(&self, input: &[u8]) -> u64 {
        self.hasher.hash(input)
    }

    /// Places all replicas of `name`. A position already held by another
    /// server is taken over.
    pub fn add_server(&mut self, name: &str) {
        let server: Arc<str> = Arc::from(name);
        for i in 0..self.replicas {
            let position = self.replica_position(name, i);
            if let Some(prev) = self.positions.insert(position, Arc::clone(&server)) {
                if &*prev != name {
                    debug!(
                        "Replica {}:{} collides at [{}], replacing {:?}",
                        name, i, position, prev
                    );
                }
            }
        }
        debug!(
            "Server added: {:?} replicas = {} len = {}",
            name,
            self.replicas,
            self.positions.len()
        );
    }

    pub fn add_servers<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.add_server(name.as_ref());
        }
    }

    /// Drops the replicas of `name`, leaving positions that a collision
    /// handed to another server untouched. Unknown names are ignored.
    pub fn remove_server(&mut self, name: &str) {
        let mut removed = 0;
        for i in 0..self.replicas {
            let position = self.replica_position(name, i);
            let owned = self
                .positions
                .get(&position)
                .is_some_and(|owner| owner.as_ref() == name);
            if owned {
                self.positions.remove(&position);
                removed += 1;
            }
        }
        debug!(
            "Server removed: {:?} positions = {} len = {}",
            name,
            removed,
            self.positions.len()
        );
    }

    pub fn resolve(&self, key: &str) -> Option<&str> {
        self.resolve_bytes(key.as_bytes())
    }

    pub fn resolve_bytes(&self, key: &[u8]) -> Option<&str> {
        let hash = self.hasher.hash(key);
        let server = self.resolve_hash(hash);
        trace!("Resolved [{}] -> {:?}", hash, server);
        server
    }

    /// Owner of an already-hashed position; `None` only when the ring is empty.
    pub fn resolve_hash(&self, hash: u64) -> Option<&str> {
        self.positions
            .range(hash..)
            .next()
            .or_else(|| self.positions.iter().next())
            .map(|(_, server)| server.as_ref())
    }

    pub fn contains_server(&self, name: &str) -> bool {
        self.positions.values().any(|server| server.as_ref() == name)
    }

    /// Distinct server names, sorted.
    pub fn servers(&self) -> BTreeSet<&str> {
        self.positions.values().map(|server| server.as_ref()).collect()
    }

    /// Occupied positions in ascending hash order.
    pub fn positions(&self) -> impl Iterator<Item = (u64, &str)> + '_ {
        self.positions
            .iter()
            .map(|(position, server)| (*position, server.as_ref()))
    }

    fn replica_position(&self, name: &str, index: usize) -> u64 {
        self.hasher.hash(replica_label(name, index).as_bytes())
    }
}

impl<H: RingHasher> fmt::Display for HashRing<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (position, server)) in self.positions().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", position, server)?;
        }
        write!(f, "}}")
    }
}
