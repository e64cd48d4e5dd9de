// tests/config_loading.rs
use exposure_risk_score::config::risk::{
    DEFAULT_MAX_ATTENUATION_DURATION, ENV_MAX_ATTENUATION_DURATION, ENV_RISK_CONFIG_PATH,
};
use exposure_risk_score::{ExposureSummary, RiskConfig};
use serial_test::serial;
use std::{env, fs};

const NORMALIZED_TOML: &str = r#"
max_attenuation_duration = 30

[attenuation]
low = 0.5
mid = 0.5
high = 0.5
default_bucket_offset = 1
risk_score_normalization_divisor = 30000
"#;

fn clear_env() {
    env::remove_var(ENV_RISK_CONFIG_PATH);
    env::remove_var(ENV_MAX_ATTENUATION_DURATION);
}

#[serial]
#[test]
fn load_from_toml_and_json_paths() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();

    let p_toml = dir.path().join("risk.toml");
    fs::write(&p_toml, NORMALIZED_TOML).unwrap();
    let t = RiskConfig::load_from(&p_toml).unwrap();

    let p_json = dir.path().join("risk.json");
    fs::write(
        &p_json,
        r#"{"maxAttenuationDuration":30,"attenuationDuration":{"low":0.5,"mid":0.5,"high":0.5,"defaultBucketOffset":1,"riskScoreNormalizationDivisor":30000}}"#,
    )
    .unwrap();
    let j = RiskConfig::load_from(&p_json).unwrap();

    assert_eq!(t, j);
    let score = t
        .calculator()
        .score(&ExposureSummary::new(vec![10, 0, 0], 4000))
        .unwrap();
    assert_eq!(score, 0.8);
}

#[serial]
#[test]
fn broken_file_reports_path() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("risk.json");
    fs::write(&p, r#"{"attenuation":{"low":1.0}}"#).unwrap();
    let err = RiskConfig::load_from(&p).unwrap_err();
    assert!(format!("{err:#}").contains("risk.json"));
}

#[serial]
#[test]
fn default_uses_env_then_fallbacks() {
    // Isolate CWD so the repo's own config/ is not picked up.
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    env::set_current_dir(tmp.path()).unwrap();
    clear_env();

    // 1) Nothing on disk -> built-in seed
    let seed = RiskConfig::load_default().unwrap();
    assert_eq!(seed, RiskConfig::default_seed());
    assert_eq!(seed.max_attenuation_duration, DEFAULT_MAX_ATTENUATION_DURATION);

    // 2) config/risk.toml fallback
    let cfg_dir = tmp.path().join("config");
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(cfg_dir.join("risk.toml"), NORMALIZED_TOML).unwrap();
    let from_toml = RiskConfig::load_default().unwrap();
    assert!((from_toml.attenuation.risk_score_normalization_divisor - 30000.0).abs() < 1e-9);

    // 3) Env path wins
    let p_env = tmp.path().join("override.json");
    fs::write(
        &p_env,
        r#"{"max_attenuation_duration":12,"attenuation":{"low":1,"mid":1,"high":1,"default_bucket_offset":0,"risk_score_normalization_divisor":1}}"#,
    )
    .unwrap();
    env::set_var(ENV_RISK_CONFIG_PATH, p_env.display().to_string());
    let from_env = RiskConfig::load_default().unwrap();
    assert_eq!(from_env.max_attenuation_duration, 12);

    // 4) Env path to nowhere is an error, not a silent fallback
    env::set_var(ENV_RISK_CONFIG_PATH, tmp.path().join("missing.toml"));
    assert!(RiskConfig::load_default().is_err());

    clear_env();
    env::set_current_dir(&old).unwrap();
}

#[serial]
#[test]
fn ceiling_env_override() {
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    env::set_current_dir(tmp.path()).unwrap();
    clear_env();

    env::set_var(ENV_MAX_ATTENUATION_DURATION, "10");
    let cfg = RiskConfig::load_default().unwrap();
    assert_eq!(cfg.max_attenuation_duration, 10);

    // seed weights: low 1.0, mid 0.5, high 0.0, divisor 25
    let score = cfg
        .calculator()
        .score(&ExposureSummary::new(vec![30, 30, 30], 25))
        .unwrap();
    assert_eq!(score, 15.0);

    env::set_var(ENV_MAX_ATTENUATION_DURATION, "not-a-number");
    let cfg = RiskConfig::load_default().unwrap();
    assert_eq!(cfg.max_attenuation_duration, DEFAULT_MAX_ATTENUATION_DURATION);

    clear_env();
    env::set_current_dir(&old).unwrap();
}
