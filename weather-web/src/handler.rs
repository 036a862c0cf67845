//! The `/` route: an empty form on GET, a weather lookup on POST.

use axum::{
    Form, Router,
    extract::{State, rejection::FormRejection},
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;
use weather_core::{WeatherDisplay, WeatherProvider, WeatherQuery};

use crate::page::IndexPage;

#[derive(Debug, Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
}

impl AppState {
    pub fn new(provider: impl WeatherProvider + 'static) -> Self {
        Self { provider: Arc::new(provider) }
    }
}

#[derive(Debug, Deserialize)]
pub struct CityForm {
    pub city: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_city))
        .with_state(state)
}

async fn show_form() -> IndexPage {
    IndexPage::empty()
}

async fn submit_city(
    State(state): State<AppState>,
    form: Result<Form<CityForm>, FormRejection>,
) -> IndexPage {
    let city = match form {
        Ok(Form(form)) => form.city,
        Err(rejection) => {
            tracing::debug!("Ignoring unreadable form submission: {rejection}");
            None
        }
    };

    lookup(state.provider.as_ref(), city.as_deref()).await
}

/// Resolve a submitted city into the page to render.
///
/// A missing or empty city renders the bare form without feedback.
pub async fn lookup(provider: &dyn WeatherProvider, city: Option<&str>) -> IndexPage {
    let Some(query) = WeatherQuery::from_form(city) else {
        return IndexPage::empty();
    };

    let result = provider
        .fetch(&query.city)
        .await
        .and_then(WeatherDisplay::try_from);

    match result {
        Ok(display) => {
            let country = &display.country;
            tracing::info!(city = %query.city, country = %country, "Weather lookup succeeded");
            IndexPage::with_weather(display)
        }
        Err(err) => {
            if err.is_operator_issue() {
                tracing::error!(city = %query.city, "Weather lookup failed: {err}");
            } else {
                tracing::warn!(city = %query.city, "Weather lookup failed: {err}");
            }
            IndexPage::with_error(not_found_message(&query.city))
        }
    }
}

pub fn not_found_message(city: &str) -> String {
    format!("Weather for '{city}' not found or API error. Please check the spelling.")
}
