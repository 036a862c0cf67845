use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt::Debug;
use thiserror::Error;

use crate::model::RawWeatherReading;

pub mod openweather;

/// Why a reading could not be produced.
///
/// Callers show the same message for every variant; the distinction exists for logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no API key configured")]
    Unconfigured,

    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("weather API responded with status {status}: {body}")]
    HttpStatus { status: StatusCode, body: String },

    #[error("unexpected weather API response: {0}")]
    Payload(String),
}

impl FetchError {
    /// Errors that point at the operator rather than the user's input.
    pub fn is_operator_issue(&self) -> bool {
        match self {
            FetchError::Unconfigured | FetchError::Network(_) | FetchError::Payload(_) => true,
            FetchError::HttpStatus { status, .. } => {
                status.is_server_error() || *status == StatusCode::UNAUTHORIZED
            }
        }
    }
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch the current reading for `city`.
    async fn fetch(&self, city: &str) -> Result<RawWeatherReading, FetchError>;
}
