//! Forecast service: fetch upstream data and flatten it for clients

use crate::error::ApiError;
use crate::weather::{ForecastEntry, ForecastResponse, WeatherClient};
use chrono::{DateTime, Utc};
use forecast_gateway_shared::{ForecastDetails, ForecastSummary};

/// Forecast service
pub struct ForecastService;

impl ForecastService {
    /// Fetch the upstream forecast and project its last entry
    pub async fn latest(client: &WeatherClient) -> Result<ForecastSummary, ApiError> {
        let response = client.fetch_forecast().await?;
        summarize(response)
    }
}

/// Project the **last** entry of the forecast list into a flat summary.
///
/// An absent or empty list is `NotFound`.
pub fn summarize(response: ForecastResponse) -> Result<ForecastSummary, ApiError> {
    let entry = response
        .list
        .unwrap_or_default()
        .pop()
        .ok_or_else(|| ApiError::NotFound("Nenhuma previsão encontrada".to_string()))?;

    let city = response.city.unwrap_or_default();

    Ok(ForecastSummary {
        city: city.name,
        country: city.country,
        forecast: details(entry),
    })
}

fn details(entry: ForecastEntry) -> ForecastDetails {
    let main = entry.main.unwrap_or_default();
    let condition = entry
        .weather
        .and_then(|conditions| conditions.into_iter().next())
        .unwrap_or_default();
    let clouds = entry.clouds.unwrap_or_default();
    let wind = entry.wind.unwrap_or_default();

    ForecastDetails {
        time: entry.dt.and_then(iso_timestamp),
        temperature: main.temp,
        feels_like: main.feels_like,
        temp_min: main.temp_min,
        temp_max: main.temp_max,
        pressure: main.pressure,
        humidity: main.humidity,
        weather: condition.description,
        weather_icon: condition.icon,
        clouds: clouds.all,
        wind_speed: wind.speed,
        wind_deg: wind.deg,
        visibility: entry.visibility,
        pop: entry.pop,
        rain: entry.rain.and_then(|r| r.three_hours),
        snow: entry.snow.and_then(|s| s.three_hours),
    }
}

/// Unix seconds to `YYYY-MM-DDTHH:MM:SS` (UTC, no offset)
fn iso_timestamp(secs: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S").to_string())
}
