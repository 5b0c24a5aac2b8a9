use chrono::FixedOffset;
use std::path::PathBuf;
use std::time::Duration;

use crate::verification::application::domain::certificate::{
    display_offset_from_minutes, DEFAULT_DISPLAY_OFFSET_MINUTES,
};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOCAL_STORAGE_DIR: &str = "./data";
const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// One JSON file per key under `dir`
    Local { dir: PathBuf },
    /// Lost on restart
    Memory,
    Remote { base_url: String, timeout: Duration },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Prefix of every public certificate link
    pub public_base_url: String,
    pub storage: StorageConfig,
    pub display_offset: FixedOffset,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the
    /// process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_var(&var, "PORT")?.unwrap_or(DEFAULT_PORT);

        let public_base_url = var("PUBLIC_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("http://{host}:{port}"));

        let backend = var("STORAGE_BACKEND").unwrap_or_else(|| "local".to_string());
        let storage = match backend.trim().to_ascii_lowercase().as_str() {
            "local" => StorageConfig::Local {
                dir: PathBuf::from(
                    var("LOCAL_STORAGE_DIR").unwrap_or_else(|| DEFAULT_LOCAL_STORAGE_DIR.into()),
                ),
            },
            "memory" => StorageConfig::Memory,
            "remote" => StorageConfig::Remote {
                base_url: var("REMOTE_API_URL").ok_or(ConfigError::Missing("REMOTE_API_URL"))?,
                timeout: Duration::from_secs(
                    parse_var(&var, "REMOTE_TIMEOUT_SECS")?.unwrap_or(DEFAULT_REMOTE_TIMEOUT_SECS),
                ),
            },
            _ => {
                return Err(ConfigError::Invalid {
                    name: "STORAGE_BACKEND",
                    value: backend,
                    reason: "expected local, memory or remote".to_string(),
                })
            }
        };

        let offset_minutes: i32 =
            parse_var(&var, "DISPLAY_UTC_OFFSET_MINUTES")?.unwrap_or(DEFAULT_DISPLAY_OFFSET_MINUTES);
        let display_offset =
            display_offset_from_minutes(offset_minutes).ok_or_else(|| ConfigError::Invalid {
                name: "DISPLAY_UTC_OFFSET_MINUTES",
                value: offset_minutes.to_string(),
                reason: "must lie strictly within a day".to_string(),
            })?;

        Ok(Self {
            host,
            port,
            public_base_url,
            storage,
            display_offset,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T, V>(var: &V, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    V: Fn(&str) -> Option<String>,
{
    let Some(raw) = var(name) else {
        return Ok(None);
    };

    match raw.trim().parse::<T>() {
        Ok(value) => Ok(Some(value)),
        Err(e) => Err(ConfigError::Invalid {
            name,
            reason: e.to_string(),
            value: raw,
        }),
    }
}
