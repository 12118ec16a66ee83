//! Edge server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_DIR: &str = "site";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT `{0}`")]
    InvalidPort(String),
    #[error("SITE_DIR `{0}` is not a directory")]
    MissingSiteDir(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeConfig {
    pub port: u16,
    /// Built console site; `index.html` at its root is served for every
    /// console route that is not a file.
    pub site_dir: PathBuf,
}

impl EdgeConfig {
    /// Build config from environment variables (after `.env` is loaded).
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_DIR`: default `site`, must exist
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unparsable port or a missing site
    /// directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let site_dir = std::env::var("SITE_DIR").map_or_else(|_| PathBuf::from(DEFAULT_SITE_DIR), PathBuf::from);
        if !site_dir.is_dir() {
            return Err(ConfigError::MissingSiteDir(site_dir));
        }
        Ok(Self { port, site_dir })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
