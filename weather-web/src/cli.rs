use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use weather_core::{Config, OpenWeatherProvider};

use crate::handler::{self, AppState};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-web", version, about = "Current weather for a city, in the browser")]
pub struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load();
        if let Err(e) = config.require_api_key() {
            tracing::error!("Refusing to start: {e}");
            return Err(e.context("Missing OpenWeather configuration"));
        }

        let provider = OpenWeatherProvider::new(config);
        tracing::info!(base_url = provider.base_url(), "Using OpenWeather endpoint");

        let app = handler::router(AppState::new(provider));

        let listener = TcpListener::bind(self.bind)
            .await
            .with_context(|| format!("Failed to bind {}", self.bind))?;
        let addr = listener.local_addr().context("Failed to read listener address")?;
        tracing::info!("Listening on http://{addr}");

        axum::serve(listener, app).await.context("HTTP server stopped")?;

        Ok(())
    }
}
