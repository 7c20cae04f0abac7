//! Backend Module
//!
//! This module contains all server-side code for the registration service.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Registration handler, user storage, password hashing
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Registration, users, passwords
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! Handlers share an [`AppState`] holding the user store and the password
//! hasher behind `Arc<dyn ...>` handles. Each request runs on its own tokio
//! task; the handler keeps no state between requests.
//!
//! # Error Handling
//!
//! Every failure the handler can hit is a [`BackendError`] variant, which
//! converts into a JSON response of the form `{"error": "..."}`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Registration, user storage and password hashing
pub mod auth;

/// Re-export commonly used types
pub use auth::register;
pub use error::BackendError;
pub use server::{create_app, AppState};
