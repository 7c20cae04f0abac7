/**
 * API Route Handlers
 *
 * # Routes
 *
 * - `POST /api/users/register` - User registration
 */

use axum::{routing::post, Router};

use crate::backend::auth::register;
use crate::backend::server::state::AppState;

/// Path of the registration endpoint
pub const REGISTER_PATH: &str = "/api/users/register";

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router.route(REGISTER_PATH, post(register))
}
