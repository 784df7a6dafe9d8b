//! Server configuration read from the environment.
//!
//! | Variable      | Default        |
//! |---------------|----------------|
//! | `TODO_HOST`   | `0.0.0.0`      |
//! | `TODO_PORT`   | `7540`         |
//! | `TODO_DBFILE` | `scheduler.db` |
//!
//! Unset and empty variables both fall back to the default.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding the listen address.
pub const HOST_ENV: &str = "TODO_HOST";
/// Environment variable holding the listen port.
pub const PORT_ENV: &str = "TODO_PORT";
/// Environment variable holding the database file path.
pub const DB_FILE_ENV: &str = "TODO_DBFILE";

/// Port used when none is configured.
pub const DEFAULT_PORT: u16 = 7540;
/// Database file used when none is configured.
pub const DEFAULT_DB_FILE: &str = "scheduler.db";

/// Errors returned while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set to a value that cannot be parsed.
    #[error("invalid value '{value}' for {key}")]
    InvalidValue {
        /// Name of the offending variable.
        key: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Runtime settings for the task server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    host: IpAddr,
    port: u16,
    db_file: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            db_file: PathBuf::from(DEFAULT_DB_FILE),
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let host = match read(HOST_ENV) {
            Some(value) => parse_value(HOST_ENV, &value)?,
            None => defaults.host,
        };
        let port = match read(PORT_ENV) {
            Some(value) => parse_value(PORT_ENV, &value)?,
            None => defaults.port,
        };
        let db_file = read(DB_FILE_ENV).map_or(defaults.db_file, PathBuf::from);

        Ok(Self {
            host,
            port,
            db_file,
        })
    }

    /// Returns the address the server listens on.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Returns the path of the `SQLite` database file.
    #[must_use]
    pub fn db_file(&self) -> &Path {
        &self.db_file
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_owned(),
    })
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |key| values.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).expect("defaults are valid");

        assert_eq!(config.socket_addr().port(), DEFAULT_PORT);
        assert!(config.socket_addr().ip().is_unspecified());
        assert_eq!(config.db_file(), Path::new(DEFAULT_DB_FILE));
    }

    #[test]
    fn values_are_read_from_lookup() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (HOST_ENV, "127.0.0.1"),
            (PORT_ENV, "8080"),
            (DB_FILE_ENV, "/var/lib/todo/tasks.db"),
        ]))
        .expect("configuration should parse");

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.db_file(), Path::new("/var/lib/todo/tasks.db"));
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[(PORT_ENV, ""), (DB_FILE_ENV, " ")]))
            .expect("empty values are ignored");

        assert_eq!(config, ServerConfig::default());
    }

    #[rstest]
    #[case(PORT_ENV, "not-a-port")]
    #[case(PORT_ENV, "70000")]
    #[case(HOST_ENV, "localhost:80")]
    fn invalid_values_are_rejected(#[case] key: &'static str, #[case] value: &str) {
        let result = ServerConfig::from_lookup(lookup_from(&[(key, value)]));

        assert_eq!(
            result,
            Err(ConfigError::InvalidValue {
                key,
                value: value.to_owned(),
            })
        );
    }
}
