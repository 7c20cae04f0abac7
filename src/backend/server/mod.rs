//! Server Module
//!
//! Server initialization and configuration.
//!
//! - **`state`** - `AppState` and `FromRef` implementations
//! - **`config`** - environment configuration, database connection
//! - **`init`** - app creation
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Store Selection**: PostgreSQL or in-memory
//! 3. **Router Creation**: routes, fallback, trace layer

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{ConfigError, ServerConfig};
pub use init::create_app;
pub use state::AppState;
