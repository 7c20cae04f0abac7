//! Authentication HTTP Handlers
//!
//! - **`register`** - `POST /api/users/register`
//! - **`types`** - request and response bodies

/// Registration handler
pub mod register;

/// Request/response types
pub mod types;

pub use register::register;
