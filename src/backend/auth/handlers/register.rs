/**
 * Register Handler
 *
 * This module implements the user registration handler for
 * `POST /api/users/register`.
 *
 * # Registration Process
 *
 * 1. Decode the JSON body into a `RegisterRequest`
 * 2. Check whether a user with this email already exists
 * 3. Hash the password with the configured `PasswordHasher`
 * 4. Insert the user with the hash in place of the plaintext
 * 5. Return the new user's id, username and email
 *
 * Every branch ends the request; nothing is retried.
 *
 * # Uniqueness
 *
 * The lookup in step 2 only short-circuits the common case. Two concurrent
 * requests can both pass it, so the store's unique constraint on `email` is
 * what actually decides, and a violation there is answered with 409 too.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::{RegisterRequest, RegisterResponse};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::users::{NewUser, StoreError, UserStore};
use crate::backend::error::BackendError;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - body is not JSON, lacks a JSON content type, or misses a field
/// * `409 Conflict` - a user with this email already exists
/// * `500 Internal Server Error` - password hashing or the insert failed
///
/// # Example Request
///
/// ```http
/// POST /api/users/register HTTP/1.1
/// Content-Type: application/json
///
/// {"username": "ana", "email": "ana@x.com", "password": "secret1"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"id": 1, "username": "ana", "email": "ana@x.com"}
/// ```
#[tracing::instrument(name = "register_user", skip_all)]
pub async fn register(
    State(users): State<Arc<dyn UserStore>>,
    State(hasher): State<Arc<dyn PasswordHasher>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), BackendError> {
    let Json(request) =
        payload.map_err(|rejection| BackendError::invalid_body(rejection.body_text()))?;

    tracing::info!(username = %request.username, email = %request.email, "Registration request");

    match users.email_exists(&request.email).await {
        Ok(true) => return Err(BackendError::UserExists),
        Ok(false) => {}
        Err(e) => {
            // The insert below still hits the unique constraint.
            tracing::warn!(error = %e, "Email lookup failed, continuing to insert");
        }
    }

    let password_hash = hasher
        .hash(&request.password)
        .await
        .map_err(BackendError::PasswordHash)?;

    let RegisterRequest { username, email, .. } = request;
    let created = users
        .insert(NewUser {
            username,
            email,
            password_hash,
        })
        .await
        .map_err(|e| match e {
            StoreError::UniqueViolation { .. } => BackendError::UserExists,
            other => BackendError::UserNotCreated(other),
        })?;

    tracing::info!(user_id = created.user.id, "Created user");
    tracing::info!(rows_affected = created.rows_affected, "Rows affected by insert");

    Ok((StatusCode::CREATED, Json(RegisterResponse::from(&created.user))))
}
