//! User store service implementing the user driving ports.
//!
//! The store sits between the HTTP handlers and whichever
//! [`UserRepository`] adapter the server was built with. Updates follow a
//! fetch-modify-save sequence: read the record, replace its names, write it
//! back. There is no revision check, so concurrent updates to the same id
//! resolve as last write wins.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{Error, User, UserDraft, UserId};

/// Service implementing [`UsersQuery`] and [`UsersCommand`] over a repository.
#[derive(Clone)]
pub struct UserStore<R> {
    repository: Arc<R>,
}

impl<R> UserStore<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> UsersQuery for UserStore<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        let users = self
            .repository
            .list_all()
            .await
            .map_err(map_persistence_error)?;
        debug!(count = users.len(), "listed users");
        Ok(users)
    }

    async fn fetch_user(&self, id: &UserId) -> Result<Option<User>, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)
    }
}

#[async_trait]
impl<R> UsersCommand for UserStore<R>
where
    R: UserRepository,
{
    async fn add_user(&self, draft: UserDraft) -> Result<User, Error> {
        let user = self
            .repository
            .insert(&draft)
            .await
            .map_err(map_persistence_error)?;
        info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn update_user(&self, id: &UserId, draft: UserDraft) -> Result<bool, Error> {
        let Some(mut user) = self
            .repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
        else {
            debug!(user_id = %id, "update skipped; user not found");
            return Ok(false);
        };

        user.rename(draft);
        let written = self
            .repository
            .update(&user)
            .await
            .map_err(map_persistence_error)?;
        if written {
            info!(user_id = %id, "user updated");
        }
        Ok(written)
    }
}

#[cfg(test)]
#[path = "user_store_tests.rs"]
mod tests;
