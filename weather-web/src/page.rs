use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use weather_core::WeatherDisplay;

/// The single page of the site. At most one of `weather` and `error` is set.
#[derive(Debug, Default, Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub weather: Option<WeatherDisplay>,
    pub error: Option<String>,
}

impl IndexPage {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_weather(weather: WeatherDisplay) -> Self {
        Self { weather: Some(weather), error: None }
    }

    pub fn with_error(error: String) -> Self {
        Self { weather: None, error: Some(error) }
    }
}

impl IntoResponse for IndexPage {
    fn into_response(self) -> Response {
        match self.render() {
            Ok(html) => Html(html).into_response(),
            Err(e) => {
                tracing::error!("Failed to render index page: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
            }
        }
    }
}
