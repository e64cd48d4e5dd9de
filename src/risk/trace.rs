// src/risk/trace.rs
//! Diagnostics hook for the risk score formula.
//!
//! The calculation hands every intermediate value to a [`TraceSink`]. The
//! default sink writes two TRACE events under target `risk`; tests can plug a
//! closure in instead and inspect the [`ScoreBreakdown`] directly.

use serde::Serialize;
use tracing::trace;

/// All intermediate values of one risk score calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Durations after capping, `[low, mid, high]`.
    pub capped: [u32; 3],
    pub weighted_low: f64,
    pub weighted_mid: f64,
    pub weighted_high: f64,
    pub default_bucket_offset: f64,
    pub weighted_duration: f64,
    pub maximum_risk_score: f64,
    pub normalization_divisor: f64,
    /// Score before rounding.
    pub raw_score: f64,
    /// Score rounded to two decimals.
    pub score: f64,
}

pub trait TraceSink: Send + Sync {
    fn record(&self, breakdown: &ScoreBreakdown);
}

impl<F> TraceSink for F
where
    F: Fn(&ScoreBreakdown) + Send + Sync,
{
    fn record(&self, breakdown: &ScoreBreakdown) {
        self(breakdown)
    }
}

/// Emits the weighted attenuation and the substituted formula at TRACE level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn record(&self, b: &ScoreBreakdown) {
        trace!(
            target: "risk",
            low = b.weighted_low,
            mid = b.weighted_mid,
            high = b.weighted_high,
            offset = b.default_bucket_offset,
            "Weighted Attenuation: ({} + {} + {} + {})",
            b.weighted_low,
            b.weighted_mid,
            b.weighted_high,
            b.default_bucket_offset
        );
        trace!(
            target: "risk",
            raw_score = b.raw_score,
            score = b.score,
            "Formula used: ({} / {}) * {}",
            b.maximum_risk_score,
            b.normalization_divisor,
            b.weighted_duration
        );
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {
    fn record(&self, _breakdown: &ScoreBreakdown) {}
}
