//! In-process `UserRepository` used when no database is configured.
//!
//! Records live in a `BTreeMap` keyed by id, so listing yields ascending id
//! order just like the Diesel adapter. Ids start at 1 and are never reused.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDraft, UserId};

#[derive(Debug)]
struct Table {
    next_id: i64,
    rows: BTreeMap<UserId, User>,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

/// Volatile user storage; contents vanish with the process.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: Mutex<Table>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Table>, UserPersistenceError> {
        self.table
            .lock()
            .map_err(|_| UserPersistenceError::query("in-memory user table lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock()?.rows.get(id).cloned())
    }

    async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut table = self.lock()?;
        let id = UserId::new(table.next_id);
        table.next_id += 1;
        let user = User::new(id, draft.clone());
        table.rows.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<bool, UserPersistenceError> {
        let mut table = self.lock()?;
        match table.rows.get_mut(&user.id()) {
            Some(stored) => {
                *stored = user.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
