use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use std::{env, fs};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_POOL_SIZE: u32 = 10;

/// Where spans are exported to, when set.
#[derive(Deserialize, Debug, PartialEq)]
pub struct OtlpConfig {
    pub endpoint: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub database_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_timeout_secs")]
    pub read_timeout_secs: u64,
    #[serde(default = "default_timeout_secs")]
    pub write_timeout_secs: u64,
    #[serde(default = "default_max_pool_size")]
    pub max_pool_size: u32,
    pub otlp: Option<OtlpConfig>,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_pool_size() -> u32 {
    DEFAULT_MAX_POOL_SIZE
}

impl Config {
    pub fn from_file(path: PathBuf) -> Result<Config, anyhow::Error> {
        let config = fs::read_to_string(path).context("Unable to read config file")?;
        let config: Config =
            toml::from_str(config.as_str()).with_context(|| "Unable to parse config")?;
        Ok(config)
    }

    /// Reads the process environment only. A `.env` file is not loaded; use `config.toml` for
    /// file based settings.
    pub fn from_env() -> Result<Config, anyhow::Error> {
        let database_url = read_env("DB_URL")?;
        let port = read_env_or("PORT", DEFAULT_PORT)?;
        let read_timeout_secs = read_env_or("READ_TIMEOUT", DEFAULT_TIMEOUT_SECS)?;
        let write_timeout_secs = read_env_or("WRITE_TIMEOUT", DEFAULT_TIMEOUT_SECS)?;
        let max_pool_size = read_env_or("MAX_POOL_SIZE", DEFAULT_MAX_POOL_SIZE)?;

        let otlp = match env::var("OTLP_ENDPOINT") {
            Ok(endpoint) => {
                let headers = match env::var("OTLP_HEADERS") {
                    Ok(headers) => parse_headers(&headers)?,
                    Err(_) => HashMap::new(),
                };
                Some(OtlpConfig { endpoint, headers })
            }
            Err(_) => None,
        };

        let config = Config {
            database_url,
            port,
            read_timeout_secs,
            write_timeout_secs,
            max_pool_size,
            otlp,
        };
        Ok(config)
    }

    /// How long a client may take to send the request head.
    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    /// How long the server waits on a client while shutting a connection down after the response.
    ///
    /// This does not bound how long writing a response may take; actix has no per-response write
    /// deadline, so a slow reader is only cut off by the disconnect and keep-alive timers.
    pub fn write_timeout(&self) -> Duration {
        Duration::from_secs(self.write_timeout_secs)
    }
}

fn read_env(key: &str) -> Result<String, anyhow::Error> {
    env::var(key).with_context(|| format!("Unable to read env var: {}", key))
}

fn read_env_or<T>(key: &str, default: T) -> Result<T, anyhow::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("Unable to parse {} value", key)),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(e).with_context(|| format!("Unable to read env var: {}", key)),
    }
}

/// Parses `key1=value1,key2=value2`.
fn parse_headers(headers: &str) -> Result<HashMap<String, String>, anyhow::Error> {
    headers
        .split(',')
        .filter(|pair| !pair.trim().is_empty())
        .map(|pair| -> Result<(String, String), anyhow::Error> {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| anyhow!("Malformed header entry: {}", pair))?;
            Ok((key.trim().to_owned(), value.trim().to_owned()))
        })
        .collect()
}
