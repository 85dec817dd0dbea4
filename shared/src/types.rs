//! API request and response types
//!
//! Field names on the wire follow the public contract (`nome`, `senha`,
//! `jwt`, `detail`); Rust-side names are English.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

/// Session token response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub jwt: String,
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Flattened view of a single upstream forecast entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub city: Option<String>,
    pub country: Option<String>,
    pub forecast: ForecastDetails,
}

/// Forecast fields projected from one upstream list entry.
///
/// Every field is nullable: the upstream omits `rain`/`snow` when there is
/// no precipitation, and other fields are passed through as `null` when
/// missing instead of failing the request. Measurements are passed through
/// as the upstream's JSON numbers, so an integer stays an integer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastDetails {
    /// ISO-8601 UTC timestamp without offset, e.g. `2024-01-01T12:00:00`
    pub time: Option<String>,
    pub temperature: Option<Number>,
    pub feels_like: Option<Number>,
    pub temp_min: Option<Number>,
    pub temp_max: Option<Number>,
    pub pressure: Option<Number>,
    pub humidity: Option<Number>,
    pub weather: Option<String>,
    pub weather_icon: Option<String>,
    pub clouds: Option<Number>,
    pub wind_speed: Option<Number>,
    pub wind_deg: Option<Number>,
    pub visibility: Option<Number>,
    pub pop: Option<Number>,
    pub rain: Option<Number>,
    pub snow: Option<Number>,
}
