//! Demo: score an exposure summary JSON file with the configured weights.
//!
//! Usage: `risk_score <summary.json> [config.toml|config.json]`
//! Without a config path the default resolution applies ($RISK_CONFIG_PATH,
//! config/risk.toml, config/risk.json, built-in defaults).

use anyhow::{bail, Context, Result};
use std::{fs, path::PathBuf};
use tracing::info;

use exposure_risk_score::{logging, ExposureSummary, RiskConfig};

fn main() -> Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    logging::init_tracing();

    let mut args = std::env::args().skip(1);
    let Some(summary_path) = args.next().map(PathBuf::from) else {
        bail!("usage: risk_score <summary.json> [config-path]");
    };

    let cfg = match args.next() {
        Some(p) => RiskConfig::load_from(&PathBuf::from(p))?,
        None => RiskConfig::load_default()?,
    };

    let raw = fs::read_to_string(&summary_path)
        .with_context(|| format!("reading exposure summary from {}", summary_path.display()))?;
    let summary: ExposureSummary = serde_json::from_str(&raw)
        .with_context(|| format!("parsing exposure summary {}", summary_path.display()))?;

    let calc = cfg.calculator();
    let score = calc.score(&summary)?;
    info!(
        target: "risk",
        max_attenuation_duration = calc.max_attenuation_duration(),
        score,
        "scored exposure summary"
    );

    println!("{score}");
    Ok(())
}
