// src/risk/mod.rs
//! Exposure risk scoring: attenuation weights, exposure summaries and the
//! score formula that combines them.

pub mod calculation;
pub mod error;
pub mod summary;
pub mod trace;
pub mod weights;

// Re-export convenient types.
pub use crate::risk::calculation::{
    calculate_breakdown, calculate_risk_score, calculate_risk_score_traced, cap, round_to_cents,
    RiskScoreCalculator,
};
pub use crate::risk::error::RiskError;
pub use crate::risk::summary::{ExposureSummary, BUCKET_COUNT};
pub use crate::risk::trace::{NoopSink, ScoreBreakdown, TraceSink, TracingSink};
pub use crate::risk::weights::AttenuationWeights;
