//! Driving port for creating and renaming users.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDraft, UserId};

/// Write-side use cases exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Persist a new user and return it with its assigned id.
    async fn add_user(&self, draft: UserDraft) -> Result<User, Error>;

    /// Replace both names of an existing user.
    ///
    /// Returns `false` when the user does not exist.
    async fn update_user(&self, id: &UserId, draft: UserDraft) -> Result<bool, Error>;
}
