//! Attenuation weights distributed with the server-side application config.
//!
//! JSON shape (camelCase keys are accepted as well):
//! {
//!   "low": 1.0,
//!   "mid": 0.5,
//!   "high": 0.0,
//!   "default_bucket_offset": 0,
//!   "risk_score_normalization_divisor": 25
//! }
//!
//! Every field is required. The divisor is not validated here; a zero
//! divisor makes the score non-finite.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttenuationWeights {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
    #[serde(alias = "defaultBucketOffset")]
    pub default_bucket_offset: f64,
    #[serde(alias = "riskScoreNormalizationDivisor")]
    pub risk_score_normalization_divisor: f64,
}

impl AttenuationWeights {
    /// Weights as shipped with the default application configuration.
    pub fn default_seed() -> Self {
        Self {
            low: 1.0,
            mid: 0.5,
            high: 0.0,
            default_bucket_offset: 0.0,
            risk_score_normalization_divisor: 25.0,
        }
    }

    /// Per-bucket multipliers ordered `[low, mid, high]`.
    pub fn buckets(&self) -> [f64; 3] {
        [self.low, self.mid, self.high]
    }

    /// True when the score would come out as NaN or infinity.
    pub fn has_zero_divisor(&self) -> bool {
        self.risk_score_normalization_divisor == 0.0
    }
}
