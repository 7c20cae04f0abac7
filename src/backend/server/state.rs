/**
 * Application State Management
 *
 * `AppState` holds the collaborators the registration handler needs. The
 * `FromRef` implementations let handlers extract just the part they use,
 * following Axum's recommended pattern for state management.
 *
 * # Example
 *
 * ```rust
 * use std::sync::Arc;
 * use axum::extract::State;
 * use campusburn::backend::auth::UserStore;
 *
 * async fn handler(State(users): State<Arc<dyn UserStore>>) {
 *     let _ = users.email_exists("ana@x.com").await;
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::{PasswordHasher, UserStore};

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub hasher: Arc<dyn PasswordHasher>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }
}

impl FromRef<AppState> for Arc<dyn UserStore> {
    fn from_ref(state: &AppState) -> Self {
        state.users.clone()
    }
}

impl FromRef<AppState> for Arc<dyn PasswordHasher> {
    fn from_ref(state: &AppState) -> Self {
        state.hasher.clone()
    }
}
