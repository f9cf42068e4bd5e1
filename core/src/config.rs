use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub edges_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DerivationConfig {
    pub pivot: String,
    pub cluster_policy: String,
}

/// Resolved application configuration for the outer layers. The derivation
/// core never reads this (or the environment) itself; callers resolve the
/// pivot and policy here and pass plain values in.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub data: DataConfig,
    pub derivation: DerivationConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(Environment::with_prefix("SIGNET"));

        builder.build()?.try_deserialize()
    }
}
