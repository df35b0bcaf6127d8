use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RingError {
    #[error("replica count must be positive, got {0}")]
    InvalidReplicaCount(usize),

    #[error("invalid value {value:?} for environment variable {var}")]
    InvalidEnv { var: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, RingError>;
