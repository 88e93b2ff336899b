use std::path::Path;

use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use crate::api::ApiConfig;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "./config.yaml";

/// Prefix of environment variables that override file values,
/// e.g. `HAVENAUTH_API__BASE_URL`.
pub const ENV_PREFIX: &str = "HAVENAUTH_";

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// Main config for v1.0.0: where the API lives and how to log.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct ConfigV1 {
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl From<Config> for ConfigV1 {
    fn from(config: Config) -> Self {
        // handle configuration migration between versions here when necessary
        match config {
            Config::ConfigV1(c) => c,
        }
    }
}

/// Load config from a YAML file, with `HAVENAUTH_*` environment overrides.
pub fn load_config(path: impl AsRef<Path>) -> Result<ConfigV1, figment::Error> {
    let figment = Figment::new()
        .merge(Yaml::file(path.as_ref()))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));
    figment.extract::<Config>().map(ConfigV1::from)
}

/// Parse config from an in-memory YAML document (no environment overrides).
pub fn parse_config(yaml: &str) -> Result<ConfigV1, figment::Error> {
    Figment::new()
        .merge(Yaml::string(yaml))
        .extract::<Config>()
        .map(ConfigV1::from)
}

/// The JSON schema of the configuration, pretty printed.
pub fn config_schema() -> String {
    let schema = schema_for!(Config);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
