// src/risk/calculation.rs
//! Risk score formula.
//!
//! ```text
//! weighted = low*cap(d0) + mid*cap(d1) + high*cap(d2) + offset
//! score    = round2((maximumRiskScore / divisor) * weighted)
//! ```
//!
//! All arithmetic is `f64` and the sum is accumulated left to right, so the
//! result is bit-identical to the server-side reference values. A zero
//! divisor is not guarded: the NaN or infinity is returned as is.

use std::fmt;

use super::trace::{ScoreBreakdown, TraceSink, TracingSink};
use super::{AttenuationWeights, ExposureSummary, RiskError};

const DECIMAL_MULTIPLIER: f64 = 100.0;

/// Caps a bucket duration to the configured ceiling.
#[inline]
pub fn cap(duration: u32, max_attenuation_duration: u32) -> u32 {
    if duration > max_attenuation_duration {
        max_attenuation_duration
    } else {
        duration
    }
}

/// Rounds to two decimals. Exact ties go to the even cent (0.125 -> 0.12).
#[inline]
pub fn round_to_cents(x: f64) -> f64 {
    (x * DECIMAL_MULTIPLIER).round_ties_even() / DECIMAL_MULTIPLIER
}

/// Runs the formula and returns every intermediate value.
pub fn calculate_breakdown(
    weights: &AttenuationWeights,
    summary: &ExposureSummary,
    max_attenuation_duration: u32,
) -> Result<ScoreBreakdown, RiskError> {
    let [low, mid, high] = summary.buckets()?;
    let capped = [
        cap(low, max_attenuation_duration),
        cap(mid, max_attenuation_duration),
        cap(high, max_attenuation_duration),
    ];

    let weighted_low = weights.low * f64::from(capped[0]);
    let weighted_mid = weights.mid * f64::from(capped[1]);
    let weighted_high = weights.high * f64::from(capped[2]);

    let maximum_risk_score = f64::from(summary.maximum_risk_score);
    let default_bucket_offset = weights.default_bucket_offset;
    let normalization_divisor = weights.risk_score_normalization_divisor;

    let weighted_duration = weighted_low + weighted_mid + weighted_high + default_bucket_offset;
    let raw_score = (maximum_risk_score / normalization_divisor) * weighted_duration;

    Ok(ScoreBreakdown {
        capped,
        weighted_low,
        weighted_mid,
        weighted_high,
        default_bucket_offset,
        weighted_duration,
        maximum_risk_score,
        normalization_divisor,
        raw_score,
        score: round_to_cents(raw_score),
    })
}

/// Same as [`calculate_risk_score`], reporting intermediates to `sink`.
pub fn calculate_risk_score_traced(
    weights: &AttenuationWeights,
    summary: &ExposureSummary,
    max_attenuation_duration: u32,
    sink: &dyn TraceSink,
) -> Result<f64, RiskError> {
    let breakdown = calculate_breakdown(weights, summary, max_attenuation_duration)?;
    sink.record(&breakdown);
    Ok(breakdown.score)
}

/// Computes the rounded risk score for one exposure summary.
///
/// Fails with [`RiskError::IndexOutOfRange`] when fewer than three
/// attenuation durations are present.
pub fn calculate_risk_score(
    weights: &AttenuationWeights,
    summary: &ExposureSummary,
    max_attenuation_duration: u32,
) -> Result<f64, RiskError> {
    calculate_risk_score_traced(weights, summary, max_attenuation_duration, &TracingSink)
}

/// Weights and ceiling bundled together, plus the sink diagnostics go to.
pub struct RiskScoreCalculator {
    max_attenuation_duration: u32,
    weights: AttenuationWeights,
    sink: Box<dyn TraceSink>,
}

impl RiskScoreCalculator {
    pub fn new(weights: AttenuationWeights, max_attenuation_duration: u32) -> Self {
        Self {
            max_attenuation_duration,
            weights,
            sink: Box::new(TracingSink),
        }
    }

    /// Replace the default tracing sink.
    pub fn with_sink(mut self, sink: impl TraceSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn weights(&self) -> &AttenuationWeights {
        &self.weights
    }

    pub fn max_attenuation_duration(&self) -> u32 {
        self.max_attenuation_duration
    }

    pub fn score(&self, summary: &ExposureSummary) -> Result<f64, RiskError> {
        calculate_risk_score_traced(
            &self.weights,
            summary,
            self.max_attenuation_duration,
            self.sink.as_ref(),
        )
    }

    pub fn breakdown(&self, summary: &ExposureSummary) -> Result<ScoreBreakdown, RiskError> {
        calculate_breakdown(&self.weights, summary, self.max_attenuation_duration)
    }
}

impl fmt::Debug for RiskScoreCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RiskScoreCalculator")
            .field("max_attenuation_duration", &self.max_attenuation_duration)
            .field("weights", &self.weights)
            .finish_non_exhaustive()
    }
}
