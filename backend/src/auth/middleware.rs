//! Bearer token extraction
//!
//! `AuthSession` is an Axum extractor that gates a handler behind a valid
//! session token. Verification uses the pre-computed keys in AppState and
//! never touches the database.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use forecast_gateway_shared::AuthError;
use tracing::debug;

/// Identity carried by a verified session token
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub email: String,
    pub name: String,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = bearer_token(parts).ok_or(AuthError::MissingToken)?;

        let claims = app_state.jwt().verify(token).map_err(|e| {
            debug!(reason = %e, "Rejected session token");
            e
        })?;

        Ok(AuthSession {
            email: claims.email,
            name: claims.name,
        })
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// The scheme is matched case-insensitively; anything else counts as
/// missing credentials.
fn bearer_token(parts: &Parts) -> Option<&str> {
    let header = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with(header: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/consultar");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_bearer_token_extracted() {
        let parts = parts_with(Some("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&parts), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_scheme_is_case_insensitive() {
        let parts = parts_with(Some("bearer abc"));
        assert_eq!(bearer_token(&parts), Some("abc"));
    }

    #[test]
    fn test_missing_or_foreign_scheme_yields_none() {
        assert_eq!(bearer_token(&parts_with(None)), None);
        assert_eq!(bearer_token(&parts_with(Some("Basic dXNlcjpwYXNz"))), None);
        assert_eq!(bearer_token(&parts_with(Some("Bearer"))), None);
        assert_eq!(bearer_token(&parts_with(Some("Bearer   "))), None);
    }
}
