// src/lib.rs
//! Exposure risk score: weights attenuation bucket durations and normalizes
//! them into a single score rounded to two decimals.

pub mod config;
pub mod logging;
pub mod risk;

// ---- Re-exports for stable public API ----
pub use crate::config::RiskConfig;
pub use crate::risk::{
    calculate_risk_score, cap, AttenuationWeights, ExposureSummary, RiskError,
    RiskScoreCalculator, ScoreBreakdown, TraceSink,
};
