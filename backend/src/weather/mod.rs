//! Upstream weather forecast integration

mod client;
pub mod models;

pub use client::WeatherClient;
pub use models::{ForecastEntry, ForecastResponse};
