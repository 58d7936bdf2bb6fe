use std::{env, net::SocketAddr, path::PathBuf};

use thiserror::Error;
use tracing::info;

use crate::database::CapacityPolicy;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key} value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub capacity_policy: CapacityPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
            capacity_policy: CapacityPolicy::Unenforced,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to defaults for
    /// unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                ConfigError::Invalid {
                    key: "PORT",
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => defaults.port,
        };

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let capacity_policy = match lookup("SIGNUP_CAPACITY_POLICY") {
            Some(raw) => raw.parse::<CapacityPolicy>().map_err(|reason| ConfigError::Invalid {
                key: "SIGNUP_CAPACITY_POLICY",
                value: raw.clone(),
                reason,
            })?,
            None => defaults.capacity_policy,
        };

        info!(
            %host,
            port,
            static_dir = %static_dir.display(),
            %capacity_policy,
            "Configuration loaded"
        );

        Ok(Self {
            host,
            port,
            static_dir,
            capacity_policy,
        })
    }

    pub fn addr(&self) -> Result<SocketAddr, ConfigError> {
        self.addr_with_port(self.port)
    }

    pub fn addr_with_port(&self, port: u16) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, port);
        raw.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
            key: "HOST",
            value: raw.clone(),
            reason: e.to_string(),
        })
    }
}
