// src/risk/error.rs
use thiserror::Error;

/// Errors raised by the risk score calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RiskError {
    /// The attenuation duration sequence does not cover all three buckets.
    #[error("attenuation duration index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
