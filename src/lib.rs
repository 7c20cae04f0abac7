//! Campusburn - Registration Backend
//!
//! Campusburn's account service: an Axum HTTP server that registers users,
//! storing them in PostgreSQL with bcrypt-hashed passwords.
//!
//! # Module Structure
//!
//! - **`backend`** - Server-side code
//!   - `server` - configuration, application state, start-up
//!   - `routes` - router assembly
//!   - `auth` - the registration handler, user storage, password hashing
//!   - `error` - backend error type and its HTTP conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use campusburn::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Storage
//!
//! With `DATABASE_URL` set, users are persisted through [`backend::auth::PgUserStore`]
//! and the schema in `migrations/` is applied at start-up. The pool connects
//! lazily, so a database that is down only fails the requests that need it.
//! Without `DATABASE_URL` the server keeps users in memory
//! ([`backend::auth::MemoryUserStore`]), which is also what the test-suite
//! drives.

/// Backend server-side code
pub mod backend;
