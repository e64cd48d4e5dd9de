// src/risk/summary.rs
//! Exposure summary as handed over by the exposure-detection subsystem.

use serde::{Deserialize, Serialize};

use super::RiskError;

/// Number of attenuation buckets the formula consumes (low, mid, high).
pub const BUCKET_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposureSummary {
    /// Minutes per attenuation bucket, ordered `[low, mid, high]`.
    #[serde(alias = "attenuationDurations")]
    pub attenuation_durations: Vec<u32>,
    #[serde(alias = "maximumRiskScore")]
    pub maximum_risk_score: u32,
}

impl ExposureSummary {
    pub fn new(attenuation_durations: Vec<u32>, maximum_risk_score: u32) -> Self {
        Self {
            attenuation_durations,
            maximum_risk_score,
        }
    }

    /// Returns the `[low, mid, high]` durations. Anything past index 2 is ignored.
    pub fn buckets(&self) -> Result<[u32; BUCKET_COUNT], RiskError> {
        let d = &self.attenuation_durations;
        let at = |index: usize| {
            d.get(index).copied().ok_or(RiskError::IndexOutOfRange {
                index,
                len: d.len(),
            })
        };
        Ok([at(0)?, at(1)?, at(2)?])
    }
}
