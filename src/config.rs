//! [`Config`]-related definitions.

use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

use ::config::{builder::DefaultState, ConfigBuilder, Environment, Map};
use serde::{Deserialize, Deserializer};
use smart_default::SmartDefault;
use tracing::Level;

/// Site configuration, read from `SITE_*` environment variables.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Config {
    /// Address the HTTP server binds to.
    #[default(SocketAddr::from(([127, 0, 0, 1], 3000)))]
    pub addr: SocketAddr,

    /// Size of astra's blocking worker pool.
    #[default(8)]
    pub max_workers: usize,

    /// Directory served under `/static/`.
    #[default(PathBuf::from("static"))]
    pub static_dir: PathBuf,

    /// Most verbose level the log subscriber lets through.
    #[default(Level::INFO)]
    #[serde(deserialize_with = "deserialize_level")]
    pub log_level: Level,
}

#[derive(Debug)]
pub enum ConfigError {
    Load(::config::ConfigError),
    Invalid { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Load(e) => write!(f, "failed to load configuration: {e}"),
            ConfigError::Invalid { var, value } => {
                write!(f, "invalid value for {var}: {value:?}")
            }
        }
    }
}

impl Error for ConfigError {}

impl From<::config::ConfigError> for ConfigError {
    fn from(e: ::config::ConfigError) -> Self {
        ConfigError::Load(e)
    }
}

impl Config {
    /// Creates a new [`Config`] from defaults, overridden by `SITE_ADDR`,
    /// `SITE_MAX_WORKERS`, `SITE_STATIC_DIR` and `SITE_LOG_LEVEL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(None)
    }

    /// Same as [`Config::from_env`], but reads the variables from `vars`
    /// instead of the process environment when given.
    pub fn from_vars(vars: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let cfg: Self = ConfigBuilder::<DefaultState>::default()
            .add_source(
                Environment::with_prefix("SITE")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?
            .try_deserialize()?;

        if cfg.max_workers == 0 {
            return Err(ConfigError::Invalid {
                var: "SITE_MAX_WORKERS",
                value: cfg.max_workers.to_string(),
            });
        }

        Ok(cfg)
    }
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<Level, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim().parse().map_err(serde::de::Error::custom)
}
