use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

pub mod defaults;
pub mod duration_serde;

use defaults::*;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_request_timeout", with = "duration_serde::duration")]
    pub request_timeout: Duration,
}

/// Icon resolution settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Responses at or below this many bytes fail validation
    #[serde(default = "default_min_icon_bytes")]
    pub min_icon_bytes: u64,
    /// Per-source attempt timeout; a hung provider must not stall the chain
    #[serde(default = "default_source_timeout", with = "duration_serde::duration")]
    pub source_timeout: Duration,
    /// User-Agent sent on all outbound provider requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Remote placeholder image URL; when unset the embedded asset is served
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder_url: Option<String>,
    /// Source names in priority order; unknown names fail startup
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            min_icon_bytes: default_min_icon_bytes(),
            source_timeout: default_source_timeout(),
            user_agent: default_user_agent(),
            placeholder_url: None,
            sources: default_sources(),
        }
    }
}

// Web defaults
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_request_timeout() -> Duration {
    humantime::parse_duration(DEFAULT_REQUEST_TIMEOUT).expect("invalid default request timeout")
}

// Resolver defaults
fn default_min_icon_bytes() -> u64 {
    DEFAULT_MIN_ICON_BYTES
}

fn default_source_timeout() -> Duration {
    humantime::parse_duration(DEFAULT_SOURCE_TIMEOUT).expect("invalid default source timeout")
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_sources() -> Vec<String> {
    DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect()
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_file =
            std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from_file(&config_file)
    }

    pub fn load_from_file(config_file: &str) -> Result<Self> {
        if std::path::Path::new(&config_file).exists() {
            let contents = std::fs::read_to_string(config_file)?;
            Ok(toml::from_str(&contents)?)
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config)?;
            std::fs::write(config_file, contents)?;
            info!("Created default config file: {}", config_file);
            Ok(default_config)
        }
    }
}
