//! Environment configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub debug: bool,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?} is not an IP address")]
    InvalidHost { key: &'static str, value: String },
    #[error("invalid {key}: {value:?} is not a port number")]
    InvalidPort { key: &'static str, value: String },
    #[error("invalid {key}: {value:?} is not a boolean")]
    InvalidFlag { key: &'static str, value: String },
}

impl Default for Config {
    fn default() -> Self {
        Self { host: IpAddr::V4(Ipv4Addr::LOCALHOST), port: DEFAULT_PORT, debug: false }
    }
}

impl Config {
    /// Reads `APP_HOST`, `APP_PORT` (or `PORT`) and `APP_DEBUG` from the process
    /// environment after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup("APP_HOST") {
            config.host = value.trim().parse().map_err(|_| ConfigError::InvalidHost { key: "APP_HOST", value })?;
        }
        let port = lookup("APP_PORT").map(|v| ("APP_PORT", v)).or_else(|| lookup("PORT").map(|v| ("PORT", v)));
        if let Some((key, value)) = port {
            config.port = value.trim().parse().map_err(|_| ConfigError::InvalidPort { key, value })?;
        }
        if let Some(value) = lookup("APP_DEBUG") {
            config.debug = parse_flag(&value).ok_or(ConfigError::InvalidFlag { key: "APP_DEBUG", value })?;
        }
        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr { SocketAddr::new(self.host, self.port) }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug { "opensase_cart=debug,tower_http=debug,info" } else { "info" }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
