use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 8080)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".into() }
    }
}

/// The two third-party APIs a lookup talks to.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Player stats endpoint, queried with `?uid=&region=`.
    pub player_api: String,
    /// Item icon endpoint, queried with `?item_id=`.
    pub icon_api: String,
    pub user_agent: String,
    pub player_timeout_secs: u64,
    pub icon_timeout_secs: u64,
    /// Send a HEAD request per item before handing its icon URL to the page.
    /// With this off every item gets the icon URL unconditionally.
    pub probe_icons: bool,
}

impl UpstreamConfig {
    pub fn player_timeout(&self) -> Duration {
        Duration::from_secs(self.player_timeout_secs)
    }

    pub fn icon_timeout(&self) -> Duration {
        Duration::from_secs(self.icon_timeout_secs)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            player_api: "https://freefireinfo.nepcoderapis.workers.dev/".into(),
            icon_api: "https://ff-itmes-api.vercel.app/".into(),
            user_agent: DEFAULT_USER_AGENT.into(),
            player_timeout_secs: 10,
            icon_timeout_secs: 5,
            probe_icons: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub upstream: UpstreamConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let environment = env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        let config_file = match environment.as_str() {
            "production" => "prod",
            _ => "dev",
        };

        let s = config::Config::builder()
            .add_source(File::with_name("config/default.yaml").required(false))
            .add_source(File::with_name(&format!("config/{}.yaml", config_file)).required(false))
            .add_source(File::with_name("config/local.yaml").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
