//! Registration and login routes
//!
//! Password hashing runs on the blocking thread pool and tokens are signed
//! with the pre-computed keys in AppState.

use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use forecast_gateway_shared::{LoginRequest, RegisterRequest, TokenResponse};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/registrar", post(register))
        .route("/login", post(login))
}

/// Register a new user
///
/// POST /registrar
async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    let Json(req) = payload?;
    let token = UserService::register(state.db(), state.jwt(), &req).await?;
    Ok((StatusCode::CREATED, Json(token)))
}

/// Login with email and password
///
/// POST /login
async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<TokenResponse>> {
    let Json(req) = payload?;
    let token = UserService::login(state.db(), state.jwt(), &req).await?;
    Ok(Json(token))
}
