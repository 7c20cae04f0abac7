//! Route Configuration Module
//!
//! - **`router`** - main router creation, health check, fallback, trace layer
//! - **`api_routes`** - API endpoints (registration)
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API endpoint handlers
//! ```

/// Main router creation
pub mod router;

/// API route configuration
pub mod api_routes;

pub use api_routes::REGISTER_PATH;
pub use router::create_router;
