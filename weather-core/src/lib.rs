//! Core library for the weather web front-end.
//!
//! This crate defines:
//! - Configuration read from the environment (and an optional `.env` file)
//! - The OpenWeather current-weather fetcher and its error taxonomy
//! - The typed API reading and the flattened display record built from it
//!
//! It is used by `weather-web`, but can also be reused by other binaries or services.

pub mod config;
pub mod model;
pub mod provider;

pub use config::Config;
pub use model::{RawWeatherReading, WeatherDisplay, WeatherQuery};
pub use provider::{FetchError, WeatherProvider, openweather::OpenWeatherProvider};
