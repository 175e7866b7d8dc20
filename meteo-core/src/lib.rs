//! Core library for the `meteo` CLI.
//!
//! This crate defines:
//! - Configuration & credential handling
//! - The OpenWeather current-weather client
//! - Shared domain models (location queries, weather payloads)
//!
//! It is used by `meteo-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod query;

pub use client::WeatherClient;
pub use config::Config;
pub use error::WeatherError;
pub use model::{CurrentWeather, LocationQuery};
pub use query::{QueryParams, build_url};
