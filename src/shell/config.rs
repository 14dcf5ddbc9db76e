use crate::shared::core::primitives::UserId;
use std::net::{AddrParseError, SocketAddr};
use thiserror::Error;

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_LOG: &str = "info";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("ATTENDANCE_ADDR `{value}` is not a socket address: {source}")]
    InvalidAddr {
        value: String,
        source: AddrParseError,
    },

    #[error("ATTENDANCE_TOKENS entry `{0}` must look like token=user_id")]
    InvalidToken(String),

    #[error("{name} `{value}` must be true or false")]
    InvalidFlag { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    pub log_filter: String,
    /// Bearer tokens seeding the in memory authenticator.
    pub tokens: Vec<(String, UserId)>,
    pub cors: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr_value = lookup("ATTENDANCE_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                value: addr_value.clone(),
                source,
            })?;

        let tokens = match lookup("ATTENDANCE_TOKENS") {
            Some(raw) => parse_tokens(&raw)?,
            None => Vec::new(),
        };

        let cors = match lookup("ATTENDANCE_CORS") {
            Some(value) => parse_flag("ATTENDANCE_CORS", value)?,
            None => false,
        };

        Ok(Self {
            addr,
            log_filter: lookup("ATTENDANCE_LOG").unwrap_or_else(|| DEFAULT_LOG.to_string()),
            tokens,
            cors,
        })
    }
}

fn parse_tokens(raw: &str) -> Result<Vec<(String, UserId)>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once('=') {
            Some((token, user_id)) if !token.trim().is_empty() && !user_id.trim().is_empty() => {
                Ok((token.trim().to_string(), UserId::new(user_id.trim())))
            }
            _ => Err(ConfigError::InvalidToken(entry.to_string())),
        })
        .collect()
}

fn parse_flag(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { name, value }),
    }
}
