//! In-memory user store.
//!
//! Used when the server starts without `DATABASE_URL`, and by the tests.
//! It mirrors the database's unique constraint on `email`, so duplicate
//! inserts fail the same way they would against PostgreSQL.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::backend::auth::users::{CreatedUser, NewUser, StoreError, User, UserStore};

#[derive(Debug, Default)]
struct Table {
    rows: Vec<User>,
    next_id: i64,
}

#[derive(Debug, Default)]
pub struct MemoryUserStore {
    table: RwLock<Table>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        let table = self.table.read().await;
        table.rows.iter().find(|user| user.email == email).cloned()
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().any(|user| user.email == email))
    }

    async fn insert(&self, user: NewUser) -> Result<CreatedUser, StoreError> {
        let mut table = self.table.write().await;

        if table.rows.iter().any(|existing| existing.email == user.email) {
            return Err(StoreError::UniqueViolation { email: user.email });
        }

        table.next_id += 1;
        let now = Utc::now();
        let created = User {
            id: table.next_id,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(created.clone());

        Ok(CreatedUser {
            user: created,
            rows_affected: 1,
        })
    }
}
