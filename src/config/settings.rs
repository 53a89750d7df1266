//! Process configuration read from the environment (after `.env` is loaded).

use crate::error::ConfigError;
use axum::http::HeaderValue;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/products";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:4000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    /// Single origin allowed to make cross-origin requests. `None` rejects every cross-origin request.
    pub frontend_url: Option<HeaderValue>,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let frontend_url = get("FRONTEND_URL")
            .map(|v| {
                HeaderValue::from_str(v.trim_end_matches('/')).map_err(|e| ConfigError::Invalid {
                    key: "FRONTEND_URL",
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.into())
            .parse::<SocketAddr>()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                key: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v.parse::<u32>().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                reason: e.to_string(),
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(AppConfig {
            database_url,
            frontend_url,
            bind_addr,
            max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let c = config(&[]).unwrap();
        assert_eq!(c.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(c.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(c.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert!(c.frontend_url.is_none());
    }

    #[test]
    fn frontend_url_drops_trailing_slash() {
        let c = config(&[("FRONTEND_URL", "http://localhost:5173/")]).unwrap();
        assert_eq!(c.frontend_url.unwrap(), "http://localhost:5173");
    }

    #[test]
    fn blank_values_count_as_unset() {
        let c = config(&[("FRONTEND_URL", "  "), ("DATABASE_URL", "")]).unwrap();
        assert!(c.frontend_url.is_none());
        assert_eq!(c.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn bad_numbers_are_reported_with_their_key() {
        let err = config(&[("DATABASE_MAX_CONNECTIONS", "many")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DATABASE_MAX_CONNECTIONS", .. }));
        assert!(config(&[("BIND_ADDR", "nowhere")]).is_err());
    }
}
