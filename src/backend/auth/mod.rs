/**
 * Authentication Module
 *
 * This module owns everything behind `POST /api/users/register`:
 *
 * - `handlers` - the registration handler and its request/response types
 * - `users` - the `User` entity, the `UserStore` trait, the PostgreSQL store
 * - `memory` - an in-memory `UserStore` for database-less runs and tests
 * - `password` - the `PasswordHasher` trait and its bcrypt implementation
 */

pub mod handlers;
pub mod memory;
pub mod password;
pub mod users;

pub use handlers::register;
pub use handlers::types::{RegisterRequest, RegisterResponse};
pub use memory::MemoryUserStore;
pub use password::{BcryptHasher, HashError, PasswordHasher};
pub use users::{CreatedUser, NewUser, PgUserStore, StoreError, User, UserStore};
