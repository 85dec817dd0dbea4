//! Upstream forecast API response types
//!
//! Only the fields the gateway projects are modelled. Everything is
//! optional so a sparse entry still parses; unknown fields are ignored.
//! Measurements stay as JSON numbers so `21` and `1012.5` reach the
//! client exactly as the upstream sent them.

use serde::Deserialize;
use serde_json::Number;

/// Top-level `/forecast` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastResponse {
    pub city: Option<City>,
    pub list: Option<Vec<ForecastEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct City {
    pub name: Option<String>,
    pub country: Option<String>,
}

/// One 3-hour forecast step
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastEntry {
    /// Forecast time, Unix seconds UTC
    pub dt: Option<i64>,
    pub main: Option<MainMeasurements>,
    pub weather: Option<Vec<WeatherCondition>>,
    pub clouds: Option<Clouds>,
    pub wind: Option<Wind>,
    pub visibility: Option<Number>,
    /// Probability of precipitation, 0.0..=1.0
    pub pop: Option<Number>,
    pub rain: Option<Precipitation>,
    pub snow: Option<Precipitation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MainMeasurements {
    pub temp: Option<Number>,
    pub feels_like: Option<Number>,
    pub temp_min: Option<Number>,
    pub temp_max: Option<Number>,
    pub pressure: Option<Number>,
    pub humidity: Option<Number>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherCondition {
    pub description: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Clouds {
    pub all: Option<Number>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Wind {
    pub speed: Option<Number>,
    pub deg: Option<Number>,
}

/// Rain or snow volume
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Precipitation {
    /// Volume over the last 3 hours, mm
    #[serde(rename = "3h")]
    pub three_hours: Option<Number>,
}
