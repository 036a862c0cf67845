use anyhow::{Result, anyhow};
use std::{env, fmt};

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

/// Environment variable overriding the current-weather endpoint.
pub const BASE_URL_VAR: &str = "OPENWEATHER_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Process-wide configuration, built once at startup and never mutated.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// `None` when the variable is unset or blank.
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Config {
    /// Load `.env` from the working directory (if any), then read the environment.
    pub fn load() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::info!("Loaded .env from {}", path.display()),
            Err(e) if e.not_found() => tracing::debug!("No .env file found, using process environment"),
            Err(e) => tracing::warn!("Failed to parse .env file: {e}"),
        }

        Self::from_env()
    }

    /// Build config from the current process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let base_url = lookup(BASE_URL_VAR)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self { api_key, base_url }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Returns the API key, or an error explaining how to provide one.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow!(
                "{API_KEY_VAR} is not set.\n\
                 Hint: create a .env file containing `{API_KEY_VAR}=<your key>` or export it before starting."
            )
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .finish()
    }
}
