//! HTTP client for the upstream forecast API

use super::models::ForecastResponse;
use crate::config::WeatherConfig;
use crate::error::ApiError;
use anyhow::Result;
use reqwest::StatusCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Forecast API client
///
/// Wraps a pooled `reqwest::Client` with a request timeout. Cloning is
/// cheap: the connection pool and settings are shared.
#[derive(Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    settings: Arc<WeatherConfig>,
}

impl WeatherClient {
    /// Build a client from configuration
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            settings: Arc::new(config.clone()),
        })
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.settings.base_url.trim_end_matches('/'))
    }

    /// Fetch the forecast for the configured coordinates
    ///
    /// Transport failures, non-200 responses and undecodable bodies all
    /// map to [`ApiError::Upstream`].
    pub async fn fetch_forecast(&self) -> Result<ForecastResponse, ApiError> {
        let settings = &self.settings;
        let response = self
            .http
            .get(self.forecast_url())
            .query(&[
                ("lat", settings.lat.to_string()),
                ("lon", settings.lon.to_string()),
                ("appid", settings.api_key.clone()),
                ("units", settings.units.clone()),
            ])
            .send()
            .await
            .map_err(|e| {
                // without_url keeps the API key out of the logs
                let e = e.without_url();
                warn!(error = %e, "Forecast request failed");
                ApiError::Upstream("Erro ao consultar a API de dados".to_string())
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(%status, "Forecast API returned non-success status");
            return Err(ApiError::Upstream(
                "Erro ao consultar a API de dados".to_string(),
            ));
        }

        let body = response.bytes().await.map_err(|e| {
            let e = e.without_url();
            warn!(error = %e, "Failed to read forecast response body");
            ApiError::Upstream("Erro ao consultar a API de dados".to_string())
        })?;

        let forecast = serde_json::from_slice::<ForecastResponse>(&body).map_err(|e| {
            warn!(error = %e, "Failed to decode forecast response");
            ApiError::Upstream("Erro ao decodificar a resposta JSON".to_string())
        })?;

        debug!(
            entries = forecast.list.as_ref().map_or(0, Vec::len),
            "Forecast fetched"
        );

        Ok(forecast)
    }
}
