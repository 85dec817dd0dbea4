//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to `{"detail": ...}` HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use forecast_gateway_shared::{AuthError, ErrorResponse};
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::TokenExpired => ApiError::ExpiredToken,
            AuthError::InvalidToken => ApiError::InvalidToken,
            AuthError::InvalidCredentials => ApiError::Unauthorized("Dados incorretos".to_string()),
            AuthError::MissingToken => ApiError::Unauthorized("Not authenticated".to_string()),
        }
    }
}

/// Malformed or incomplete request bodies keep the `{"detail"}` shape
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::ExpiredToken => (StatusCode::FORBIDDEN, "Token expirado".to_string()),
            ApiError::InvalidToken => (StatusCode::FORBIDDEN, "Token inválido".to_string()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            ApiError::Database(err) => {
                error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    async fn body_detail(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        value["detail"].as_str().unwrap().to_string()
    }

    #[rstest]
    #[case(ApiError::Validation("bad".into()), StatusCode::BAD_REQUEST)]
    #[case(ApiError::NotFound("none".into()), StatusCode::NOT_FOUND)]
    #[case(ApiError::Unauthorized("no".into()), StatusCode::UNAUTHORIZED)]
    #[case(ApiError::ExpiredToken, StatusCode::FORBIDDEN)]
    #[case(ApiError::InvalidToken, StatusCode::FORBIDDEN)]
    #[case(ApiError::Conflict("dup".into()), StatusCode::CONFLICT)]
    #[case(ApiError::Upstream("down".into()), StatusCode::INTERNAL_SERVER_ERROR)]
    fn test_error_status(#[case] error: ApiError, #[case] expected: StatusCode) {
        assert_eq!(error.into_response().status(), expected);
    }

    #[tokio::test]
    async fn test_conflict_body_uses_detail_field() {
        let response = ApiError::Conflict("Email já registrado".to_string()).into_response();
        assert_eq!(body_detail(response).await, "Email já registrado");
    }

    #[tokio::test]
    async fn test_token_errors_have_fixed_messages() {
        assert_eq!(body_detail(ApiError::ExpiredToken.into_response()).await, "Token expirado");
        assert_eq!(body_detail(ApiError::InvalidToken.into_response()).await, "Token inválido");
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response = ApiError::Internal(anyhow::anyhow!("connection refused")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_detail(response).await, "An internal error occurred");
    }

    #[test]
    fn test_auth_error_conversion() {
        assert!(matches!(ApiError::from(AuthError::TokenExpired), ApiError::ExpiredToken));
        assert!(matches!(ApiError::from(AuthError::InvalidToken), ApiError::InvalidToken));
        assert!(matches!(
            ApiError::from(AuthError::MissingToken),
            ApiError::Unauthorized(_)
        ));
    }

    #[tokio::test]
    async fn test_invalid_credentials_is_401_with_fixed_message() {
        let response = ApiError::from(AuthError::InvalidCredentials).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_detail(response).await, "Dados incorretos");
    }
}
