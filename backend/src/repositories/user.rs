//! User repository for database operations

use anyhow::Result;
use sqlx::PgPool;
use thiserror::Error;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i32,
    #[sqlx(rename = "nome")]
    pub name: String,
    pub email: String,
    pub hashed_password: String,
}

/// Failure modes of [`UserRepository::create`]
#[derive(Error, Debug)]
pub enum CreateUserError {
    #[error("email already registered")]
    EmailTaken,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Insert a new user
    ///
    /// The `users.email` UNIQUE constraint is the authority on duplicates;
    /// a violation is reported as [`CreateUserError::EmailTaken`].
    pub async fn create(
        pool: &PgPool,
        name: &str,
        email: &str,
        hashed_password: &str,
    ) -> Result<UserRecord, CreateUserError> {
        let result = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (nome, email, hashed_password)
            VALUES ($1, $2, $3)
            RETURNING id, nome, email, hashed_password
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(hashed_password)
        .fetch_one(pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(CreateUserError::EmailTaken)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Find user by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, nome, email, hashed_password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Check if email exists
    pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
            "#,
        )
        .bind(email)
        .fetch_one(pool)
        .await?;

        Ok(result)
    }
}
