//! Test doubles for the registration collaborators

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use campusburn::backend::auth::{
    CreatedUser, HashError, MemoryUserStore, NewUser, PasswordHasher, StoreError, User, UserStore,
};

/// How a `RecordingStore` misbehaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBehaviour {
    /// Plain in-memory store
    Normal,
    /// The existence lookup errors; inserts work
    LookupFails,
    /// The existence lookup always answers "no", as in a check-then-insert race
    LookupMisses,
    /// Inserts fail with a database error
    InsertFails,
}

/// `MemoryUserStore` wrapper counting calls and injecting failures
pub struct RecordingStore {
    inner: MemoryUserStore,
    behaviour: StoreBehaviour,
    lookups: AtomicUsize,
    inserts: AtomicUsize,
}

impl RecordingStore {
    pub fn new(behaviour: StoreBehaviour) -> Self {
        Self {
            inner: MemoryUserStore::new(),
            behaviour,
            lookups: AtomicUsize::new(0),
            inserts: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub async fn stored(&self, email: &str) -> Option<User> {
        self.inner.find_by_email(email).await
    }

    pub async fn len(&self) -> usize {
        self.inner.len().await
    }

    /// Seed a user directly, bypassing the counters
    pub async fn seed(&self, username: &str, email: &str) {
        self.inner
            .insert(NewUser {
                username: username.to_string(),
                email: email.to_string(),
                password_hash: "seeded".to_string(),
            })
            .await
            .expect("Failed to seed user");
    }
}

#[async_trait]
impl UserStore for RecordingStore {
    async fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        match self.behaviour {
            StoreBehaviour::LookupFails => Err(StoreError::Database(sqlx::Error::PoolTimedOut)),
            StoreBehaviour::LookupMisses => Ok(false),
            _ => self.inner.email_exists(email).await,
        }
    }

    async fn insert(&self, user: NewUser) -> Result<CreatedUser, StoreError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        match self.behaviour {
            StoreBehaviour::InsertFails => Err(StoreError::Database(sqlx::Error::PoolClosed)),
            _ => self.inner.insert(user).await,
        }
    }
}

/// Hasher that always fails
pub struct FailingHasher;

#[async_trait]
impl PasswordHasher for FailingHasher {
    async fn hash(&self, _password: &str) -> Result<String, HashError> {
        Err(HashError::Bcrypt(bcrypt::BcryptError::CostNotAllowed(0)))
    }

    async fn verify(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
        Err(HashError::Bcrypt(bcrypt::BcryptError::CostNotAllowed(0)))
    }
}
