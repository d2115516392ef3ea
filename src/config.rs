//! Host configuration from the process environment.
//!
//! - `HOST`: bind address, default `0.0.0.0`
//! - `PORT`: bind port, default `3000`
//! - `SITE_ROOT`: directory holding the built `pkg/` bundle; overrides the
//!   Leptos configuration's `site-root`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Errors produced while reading host configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid HOST {0:?}: expected an IP address")]
    InvalidHost(String),

    #[error("invalid PORT {0:?}: expected 1-65535")]
    InvalidPort(String),

    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build the config from `HOST`, `PORT` and `SITE_ROOT`.
    ///
    /// # Errors
    ///
    /// Returns an error when `HOST` or `PORT` is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("HOST").ok().as_deref(),
            std::env::var("PORT").ok().as_deref(),
            std::env::var("SITE_ROOT").ok().as_deref(),
        )
    }

    /// Build the config from raw values; `None` or blank means "use the default".
    ///
    /// # Errors
    ///
    /// Returns an error when `host` or `port` is malformed.
    pub fn from_values(host: Option<&str>, port: Option<&str>, site_root: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: parse_host(host)?,
            port: parse_port(port)?,
            site_root: non_blank(site_root).map(PathBuf::from),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    match non_blank(raw) {
        None => Ok(DEFAULT_HOST),
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidHost(v.to_owned())),
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match non_blank(raw) {
        None => Ok(DEFAULT_PORT),
        Some(v) => v
            .parse::<u16>()
            .ok()
            .filter(|p| *p != 0)
            .ok_or_else(|| ConfigError::InvalidPort(v.to_owned())),
    }
}
