//! Common test utilities and helpers
//!
//! - Test doubles for the user store and the password hasher
//! - A `TestServer` wired to the real router
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
pub mod doubles;

use std::sync::Arc;

use axum_test::TestServer;
use campusburn::backend::auth::{BcryptHasher, PasswordHasher, UserStore};
use campusburn::backend::routes::create_router;
use campusburn::backend::server::AppState;

pub use doubles::{FailingHasher, RecordingStore, StoreBehaviour};

/// Lowest cost bcrypt accepts, so tests stay fast
pub const TEST_BCRYPT_COST: u32 = 4;

/// Build a test server around the real router
pub fn test_server(users: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasher>) -> TestServer {
    let app = create_router(AppState::new(users, hasher));
    TestServer::new(app).expect("Failed to create test server")
}

/// Test server over a recording in-memory store and a cheap bcrypt hasher
pub fn default_server() -> (TestServer, Arc<RecordingStore>) {
    let store = Arc::new(RecordingStore::new(StoreBehaviour::Normal));
    let server = test_server(store.clone(), Arc::new(BcryptHasher::new(TEST_BCRYPT_COST)));
    (server, store)
}
