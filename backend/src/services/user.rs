//! User service for registration and login
//!
//! # Performance Optimizations
//!
//! - Password hashing/verification runs on blocking thread pool
//! - JWT service is passed by reference (pre-computed keys)
//! - Database queries use connection pooling

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{CreateUserError, UserRepository};
use forecast_gateway_shared::{AuthError, LoginRequest, RegisterRequest, TokenResponse};
use sqlx::PgPool;
use tracing::{info, warn};
use validator::ValidateEmail;

/// Width of the `nome` and `email` columns
const MAX_FIELD_CHARS: usize = 50;

const EMAIL_TAKEN: &str = "Email já registrado";

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user and issue a session token for it
    pub async fn register(
        pool: &PgPool,
        jwt_service: &JwtService,
        req: &RegisterRequest,
    ) -> Result<TokenResponse, ApiError> {
        validate_registration(req)?;

        if UserRepository::email_exists(pool, &req.email)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict(EMAIL_TAKEN.to_string()));
        }

        let password_hash = PasswordService::hash_async(req.password.clone())
            .await
            .map_err(ApiError::Internal)?;

        // The UNIQUE constraint still catches a registration that raced the check above
        let user = UserRepository::create(pool, &req.name, &req.email, &password_hash)
            .await
            .map_err(|e| match e {
                CreateUserError::EmailTaken => ApiError::Conflict(EMAIL_TAKEN.to_string()),
                CreateUserError::Database(err) => ApiError::Database(err),
            })?;

        info!(user_id = user.id, "User registered");

        let jwt = jwt_service
            .issue(&user.email, &user.name)
            .map_err(ApiError::Internal)?;

        Ok(TokenResponse { jwt })
    }

    /// Login with email and password
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        req: &LoginRequest,
    ) -> Result<TokenResponse, ApiError> {
        let user = UserRepository::find_by_email(pool, &req.email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or(AuthError::InvalidCredentials)?;

        let valid = PasswordService::verify_async(req.password.clone(), user.hashed_password.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            warn!(user_id = user.id, "Login rejected: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let jwt = jwt_service
            .issue(&req.email, &user.name)
            .map_err(ApiError::Internal)?;

        Ok(TokenResponse { jwt })
    }
}

/// Reject registration input the `users` table cannot hold
fn validate_registration(req: &RegisterRequest) -> Result<(), ApiError> {
    if req.name.trim().is_empty() {
        return Err(ApiError::Validation("Nome é obrigatório".to_string()));
    }
    if req.name.chars().count() > MAX_FIELD_CHARS {
        return Err(ApiError::Validation(format!(
            "Nome deve ter no máximo {} caracteres",
            MAX_FIELD_CHARS
        )));
    }
    if !req.email.validate_email() {
        return Err(ApiError::Validation("Email inválido".to_string()));
    }
    if req.email.chars().count() > MAX_FIELD_CHARS {
        return Err(ApiError::Validation(format!(
            "Email deve ter no máximo {} caracteres",
            MAX_FIELD_CHARS
        )));
    }
    if req.password.is_empty() {
        return Err(ApiError::Validation("Senha é obrigatória".to_string()));
    }
    Ok(())
}
