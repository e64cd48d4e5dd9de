// src/config/mod.rs
pub mod risk;

pub use risk::RiskConfig;
