/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers can return it
 * directly. The response carries the error's status code and a JSON body
 * `{"error": "<message>"}`.
 *
 * Client errors are logged at `warn`, server errors at `error` together with
 * their source chain.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            match std::error::Error::source(&self) {
                Some(source) => tracing::error!(error = %self, cause = %source, "request failed"),
                None => tracing::error!(error = %self, "request failed"),
            }
        } else if status != StatusCode::NOT_FOUND {
            tracing::warn!(error = %self, "request rejected");
        }

        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn test_conflict_response() {
        let response = BackendError::UserExists.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
        assert_eq!(body_json(response).await, json!({ "error": "User already exists" }));
    }

    #[tokio::test]
    async fn test_invalid_body_response_hides_reason() {
        let response = BackendError::invalid_body("EOF while parsing").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "Invalid request body" }));
    }

    #[tokio::test]
    async fn test_server_error_uses_lowercase_key() {
        let error = BackendError::PasswordHash(crate::backend::auth::password::HashError::Bcrypt(
            bcrypt::BcryptError::CostNotAllowed(40),
        ));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Cannot save the password in the database" })
        );
    }
}
