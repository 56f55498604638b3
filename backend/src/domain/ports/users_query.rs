//! Driving port for reading users.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Read-side use cases exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// All users, possibly empty.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// A single user, or `None` when the id was never assigned.
    async fn fetch_user(&self, id: &UserId) -> Result<Option<User>, Error>;
}
