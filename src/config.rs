//! Runtime configuration read from the environment (and `.env`).

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://catalog.db";
pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "https://countries.trevorblades.com/graphql";
const DEFAULT_COUNTRIES_TIMEOUT_SECS: u64 = 30;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub graphql_endpoint: String,
    pub countries_timeout: Duration,
    pub host: String,
    pub port: u16,
    /// Insert the default products when the table is empty.
    pub seed_products: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            graphql_endpoint: DEFAULT_GRAPHQL_ENDPOINT.to_string(),
            countries_timeout: Duration::from_secs(DEFAULT_COUNTRIES_TIMEOUT_SECS),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_products: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let timeout_secs = parse_or(&lookup, "COUNTRIES_TIMEOUT_SECS", DEFAULT_COUNTRIES_TIMEOUT_SECS)?;

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            graphql_endpoint: lookup("GRAPHQL_ENDPOINT").unwrap_or(defaults.graphql_endpoint),
            countries_timeout: Duration::from_secs(timeout_secs),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            seed_products: parse_or(&lookup, "SEED_PRODUCTS", defaults.seed_products)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}
