/**
 * Password Hashing
 *
 * Passwords are hashed with bcrypt before they reach the store. Hashing is
 * CPU-bound, so it runs on tokio's blocking pool rather than the request task.
 *
 * bcrypt only reads the first 72 bytes of its input (the trailing NUL
 * included). Longer passwords are rejected with `BcryptError::Truncation`
 * instead of being cut short.
 */

use async_trait::async_trait;
use thiserror::Error;
use tokio::task;

/// Errors raised while hashing or verifying a password
#[derive(Debug, Error)]
pub enum HashError {
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Task(#[from] task::JoinError),
}

/// One-way password hashing
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password
    async fn hash(&self, password: &str) -> Result<String, HashError>;

    /// Check a plaintext password against a stored hash
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}

/// bcrypt-backed `PasswordHasher`
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Create a hasher with the given work factor.
    ///
    /// bcrypt accepts costs from 4 to 31; anything else fails at hash time.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_owned();
        let cost = self.cost;
        let hashed =
            task::spawn_blocking(move || bcrypt::non_truncating_hash(password, cost)).await??;
        Ok(hashed)
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        let matches =
            task::spawn_blocking(move || bcrypt::non_truncating_verify(password, &hash)).await??;
        Ok(matches)
    }
}
