use std::env;

use crate::error::{Result, RingError};

pub const REPLICAS_ENV: &str = "RING_REPLICAS";
pub const DEFAULT_REPLICAS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingConfig {
    /// Positions placed on the ring per server.
    pub replicas: usize,
}

impl Default for RingConfig {
    fn default() -> Self {
        RingConfig {
            replicas: DEFAULT_REPLICAS,
        }
    }
}

impl RingConfig {
    pub fn new(replicas: usize) -> Result<Self> {
        let config = RingConfig { replicas };
        config.validate()?;
        Ok(config)
    }

    /// Reads `RING_REPLICAS`, falling back to the default when unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        match lookup(REPLICAS_ENV) {
            None => Ok(Self::default()),
            Some(raw) => {
                let replicas = raw.trim().parse::<usize>().map_err(|_| RingError::InvalidEnv {
                    var: REPLICAS_ENV,
                    value: raw.clone(),
                })?;
                Self::new(replicas)
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.replicas == 0 {
            return Err(RingError::InvalidReplicaCount(self.replicas));
        }
        Ok(())
    }
}
