use async_trait::async_trait;
use reqwest::Client;

use crate::{Config, model::RawWeatherReading};

use super::{FetchError, WeatherProvider};

/// Current-weather lookups against OpenWeather.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    config: Config,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch(&self, city: &str) -> Result<RawWeatherReading, FetchError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(FetchError::Unconfigured);
        };

        tracing::debug!(city, "Requesting current weather");

        let res = self
            .http
            .get(&self.config.base_url)
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.without_url()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| FetchError::Network(e.without_url()))?;

        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| FetchError::Payload(e.to_string()))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
