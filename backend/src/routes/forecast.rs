//! Authenticated forecast proxy route

use crate::auth::AuthSession;
use crate::error::ApiResult;
use crate::services::ForecastService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use forecast_gateway_shared::ForecastSummary;
use tracing::debug;

/// Create forecast routes
pub fn forecast_routes() -> Router<AppState> {
    Router::new().route("/consultar", get(consultar))
}

/// Latest forecast for the configured location
///
/// GET /consultar
///
/// # Authentication
/// Requires valid Bearer token in Authorization header.
async fn consultar(
    State(state): State<AppState>,
    session: AuthSession,
) -> ApiResult<Json<ForecastSummary>> {
    debug!(email = %session.email, "Forecast requested");
    let summary = ForecastService::latest(state.weather()).await?;
    Ok(Json(summary))
}
