//! Startup configuration, read once from the environment.

use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_USER: &str = "myuser";
const DEFAULT_DB_PASSWORD: &str = "12345";
const DEFAULT_DB_NAME: &str = "user_api_db";
const DEFAULT_ADDR: &str = "0.0.0.0:8081";

/// Errors produced while reading configuration values
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("{key} is not a valid port: {value:?}")]
    InvalidPort { key: &'static str, value: String },

    #[error("{key} is not a valid socket address: {value:?}")]
    InvalidAddr { key: &'static str, value: String },
}

/// Connection parameters for the users database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DatabaseConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) user: String,
    pub(crate) password: String,
    pub(crate) name: String,
}

/// Everything the process needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) database: DatabaseConfig,
    /// Address the HTTP listener binds to.
    pub(crate) addr: SocketAddr,
}

impl Config {
    /// Read the configuration from the process environment.
    ///
    /// Call `dotenv::dotenv()` beforehand if values should also come from a `.env` file.
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup. Unset or empty keys take their
    /// defaults.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let port = match get("DB_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort {
                key: "DB_PORT",
                value,
            })?,
            None => DEFAULT_DB_PORT,
        };

        let addr = get("ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_owned());
        let addr: SocketAddr = addr
            .parse()
            .map_err(|_| ConfigError::InvalidAddr { key: "ADDR", value: addr })?;

        Ok(Self {
            database: DatabaseConfig {
                host: get("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_owned()),
                port,
                user: get("DB_USER").unwrap_or_else(|| DEFAULT_DB_USER.to_owned()),
                password: get("DB_PASSWORD").unwrap_or_else(|| DEFAULT_DB_PASSWORD.to_owned()),
                name: get("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_owned()),
            },
            addr,
        })
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
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.user, "myuser");
        assert_eq!(config.database.password, "12345");
        assert_eq!(config.database.name, "user_api_db");
        assert_eq!(config.addr.port(), 8081);
    }

    #[test]
    fn overrides_from_lookup() {
        let config = Config::from_lookup(lookup(&[
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "6543"),
            ("DB_NAME", "users"),
            ("ADDR", "127.0.0.1:9000"),
        ]))
        .unwrap();
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 6543);
        assert_eq!(config.database.name, "users");
        assert_eq!(config.database.user, "myuser");
        assert_eq!(config.addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup(&[("DB_HOST", ""), ("DB_PORT", "")])).unwrap();
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 5432);
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_lookup(lookup(&[("DB_PORT", "postgres")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { key: "DB_PORT", .. }));
    }

    #[test]
    fn rejects_bad_addr() {
        let err = Config::from_lookup(lookup(&[("ADDR", ":8081")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr { .. }));
    }
}
