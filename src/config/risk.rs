// src/config/risk.rs
//! Risk scoring configuration: the attenuation weights plus the ceiling every
//! bucket duration is capped to.
//!
//! TOML shape:
//! ```toml
//! max_attenuation_duration = 30
//!
//! [attenuation]
//! low = 1.0
//! mid = 0.5
//! high = 0.0
//! default_bucket_offset = 0
//! risk_score_normalization_divisor = 25
//! ```
//! The JSON form mirrors it; server-side camelCase keys are accepted too.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::risk::{AttenuationWeights, RiskScoreCalculator};

// --- env defaults & names ---
pub const DEFAULT_RISK_CONFIG_TOML: &str = "config/risk.toml";
pub const DEFAULT_RISK_CONFIG_JSON: &str = "config/risk.json";
pub const DEFAULT_MAX_ATTENUATION_DURATION: u32 = 30;

pub const ENV_RISK_CONFIG_PATH: &str = "RISK_CONFIG_PATH";
pub const ENV_MAX_ATTENUATION_DURATION: &str = "RISK_MAX_ATTENUATION_DURATION";

fn default_max_attenuation_duration() -> u32 {
    DEFAULT_MAX_ATTENUATION_DURATION
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Minutes; each bucket duration is capped to this before weighting.
    #[serde(
        default = "default_max_attenuation_duration",
        alias = "maxAttenuationDuration"
    )]
    pub max_attenuation_duration: u32,
    #[serde(alias = "attenuationDuration")]
    pub attenuation: AttenuationWeights,
}

impl RiskConfig {
    /// Built-in fallback matching the default application configuration.
    pub fn default_seed() -> Self {
        Self {
            max_attenuation_duration: DEFAULT_MAX_ATTENUATION_DURATION,
            attenuation: AttenuationWeights::default_seed(),
        }
    }

    /// Load from an explicit path. Supports TOML or JSON.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading risk config from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let mut cfg = parse_config(&content, ext.as_str())
            .with_context(|| format!("parsing risk config {}", path.display()))?;
        cfg.apply_env_overrides();
        cfg.warn_if_degenerate();
        info!(target: "risk", path = %path.display(), "risk config loaded");
        Ok(cfg)
    }

    /// Load using env var + fallbacks:
    /// 1) $RISK_CONFIG_PATH
    /// 2) config/risk.toml
    /// 3) config/risk.json
    /// 4) built-in seed
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_RISK_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from(&pb);
            } else {
                return Err(anyhow!("RISK_CONFIG_PATH points to non-existent path"));
            }
        }
        for candidate in [DEFAULT_RISK_CONFIG_TOML, DEFAULT_RISK_CONFIG_JSON] {
            let p = PathBuf::from(candidate);
            if p.exists() {
                return Self::load_from(&p);
            }
        }
        warn!(target: "risk", "no risk config found, using built-in defaults");
        let mut cfg = Self::default_seed();
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    /// Apply $RISK_MAX_ATTENUATION_DURATION if set and parsable.
    pub fn apply_env_overrides(&mut self) {
        let raw = std::env::var(ENV_MAX_ATTENUATION_DURATION).ok();
        if let Some(raw) = raw {
            match parse_duration_env(&raw) {
                Some(v) => self.max_attenuation_duration = v,
                None => warn!(
                    target: "risk",
                    value = %raw,
                    "ignoring unparsable RISK_MAX_ATTENUATION_DURATION"
                ),
            }
        }
    }

    pub fn calculator(&self) -> RiskScoreCalculator {
        RiskScoreCalculator::new(self.attenuation, self.max_attenuation_duration)
    }

    fn warn_if_degenerate(&self) {
        if self.attenuation.has_zero_divisor() {
            warn!(
                target: "risk",
                "risk_score_normalization_divisor is 0; scores will be non-finite"
            );
        }
    }
}

fn parse_duration_env(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

fn parse_config(s: &str, hint_ext: &str) -> Result<RiskConfig> {
    match hint_ext {
        "toml" => return Ok(toml::from_str(s)?),
        "json" => return Ok(serde_json::from_str(s)?),
        _ => {}
    }
    // No usable extension: TOML first, then JSON.
    if let Ok(cfg) = toml::from_str::<RiskConfig>(s) {
        return Ok(cfg);
    }
    serde_json::from_str(s).map_err(|_| anyhow!("unsupported risk config format"))
}
