/**
 * User Model and Database Operations
 *
 * This module defines the persisted `User`, the `UserStore` seam the
 * registration handler talks to, and its PostgreSQL implementation.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use thiserror::Error;

/// User struct representing a row of the `users` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Database-assigned identifier, starting at 1
    pub id: i64,
    pub username: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user about to be inserted. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Outcome of a successful insert
#[derive(Debug, Clone)]
pub struct CreatedUser {
    pub user: User,
    pub rows_affected: u64,
}

/// Errors raised by a `UserStore`
#[derive(Debug, Error)]
pub enum StoreError {
    /// The unique constraint on `email` rejected the insert
    #[error("email already registered: {email}")]
    UniqueViolation {
        email: String,
    },

    /// Any other database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence operations needed by registration
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Whether any user has this email. Looks at one row at most.
    async fn email_exists(&self, email: &str) -> Result<bool, StoreError>;

    /// Insert a new user, returning the stored record.
    ///
    /// Fails with [`StoreError::UniqueViolation`] when the email is taken,
    /// even if an earlier [`UserStore::email_exists`] said otherwise.
    async fn insert(&self, user: NewUser) -> Result<CreatedUser, StoreError>;
}

const UNIQUE_EMAIL_CONSTRAINT: &str = "users_email_key";

/// `UserStore` backed by the PostgreSQL `users` table
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        let found = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE email = $1 LIMIT 1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }

    async fn insert(&self, user: NewUser) -> Result<CreatedUser, StoreError> {
        let now = Utc::now();

        let returned = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(now)
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(|err| classify_insert_error(err, &user.email))?;

        created_from_returned(returned)
    }
}

/// One row comes back per inserted row, so the count is the rows affected.
fn created_from_returned(rows: Vec<User>) -> Result<CreatedUser, StoreError> {
    let rows_affected = rows.len() as u64;
    let user = rows.into_iter().next().ok_or(sqlx::Error::RowNotFound)?;
    Ok(CreatedUser {
        user,
        rows_affected,
    })
}

fn classify_insert_error(err: sqlx::Error, email: &str) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        let on_email = db_err
            .constraint()
            .map_or(true, |constraint| constraint == UNIQUE_EMAIL_CONSTRAINT);
        if db_err.is_unique_violation() && on_email {
            return StoreError::UniqueViolation {
                email: email.to_string(),
            };
        }
    }
    StoreError::Database(err)
}
