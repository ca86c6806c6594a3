//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

pub const BIND_ADDR_VAR: &str = "VENUE_BIND_ADDR";
pub const DATA_PATH_VAR: &str = "VENUE_DATA_PATH";
pub const STATIC_DIR_VAR: &str = "VENUE_STATIC_DIR";
pub const SITE_ID_VAR: &str = "VENUE_SITE_ID";

/// Errors building the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a socket address")]
    InvalidBindAddr { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// Configuration for the venue explorer server.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,

    /// Venue JSON served by the mock SDK.
    pub data_path: PathBuf,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Site identifier passed to the SDK on load.
    pub site_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            data_path: PathBuf::from("data/venue.json"),
            static_dir: PathBuf::from("static"),
            site_id: "demo-site".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `VENUE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr {
                    var: BIND_ADDR_VAR,
                    value: value.clone(),
                })?;
        }
        if let Some(value) = lookup(DATA_PATH_VAR) {
            config.data_path = PathBuf::from(non_empty(DATA_PATH_VAR, value)?);
        }
        if let Some(value) = lookup(STATIC_DIR_VAR) {
            config.static_dir = PathBuf::from(non_empty(STATIC_DIR_VAR, value)?);
        }
        if let Some(value) = lookup(SITE_ID_VAR) {
            config.site_id = non_empty(SITE_ID_VAR, value)?;
        }

        Ok(config)
    }
}

fn non_empty(var: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ConfigError::Empty { var })
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.data_path, PathBuf::from("data/venue.json"));
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.site_id, "demo-site");
    }

    #[test]
    fn no_overrides_gives_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn overrides_apply() {
        let config = AppConfig::from_lookup(lookup(&[
            (BIND_ADDR_VAR, "0.0.0.0:8080"),
            (DATA_PATH_VAR, "/srv/mall.json"),
            (SITE_ID_VAR, " mall "),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.data_path, PathBuf::from("/srv/mall.json"));
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.site_id, "mall");
    }

    #[test]
    fn invalid_bind_addr() {
        let err = AppConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "localhost")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid VENUE_BIND_ADDR: \"localhost\" is not a socket address"
        );
    }

    #[test]
    fn empty_site_id() {
        let err = AppConfig::from_lookup(lookup(&[(SITE_ID_VAR, "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Empty { var: SITE_ID_VAR });
    }
}
