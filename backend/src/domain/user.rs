//! User entity.
//!
//! A user is an integer identifier assigned by storage plus two free-form
//! name fields. The identifier never changes once assigned; only the names
//! are mutable. Either name may be absent: clients can omit or null them and
//! the record is still stored.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Storage-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Name fields supplied by clients on create and update.
///
/// There is no identifier here: ids are only ever produced by storage.
/// Missing fields deserialise as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserDraft {
    /// Build a draft from the two name fields.
    ///
    /// # Examples
    /// ```
    /// use user_service::domain::UserDraft;
    ///
    /// let draft = UserDraft::new("Ada", "Lovelace");
    /// assert_eq!(draft.first_name.as_deref(), Some("Ada"));
    /// ```
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self::from_parts(Some(first_name.into()), Some(last_name.into()))
    }

    /// Build a draft where either name may be absent.
    pub fn from_parts(first_name: Option<String>, last_name: Option<String>) -> Self {
        Self {
            first_name,
            last_name,
        }
    }
}

/// Stored user record.
///
/// Serialises as `{"id": 1, "firstName": "Ada", "lastName": "Lovelace"}`;
/// an absent name is written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl User {
    /// Combine a storage-assigned id with client-supplied names.
    pub fn new(id: UserId, draft: UserDraft) -> Self {
        let UserDraft {
            first_name,
            last_name,
        } = draft;
        Self {
            id,
            first_name,
            last_name,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Overwrite both name fields, leaving the id untouched.
    ///
    /// An absent name in the draft clears the stored one.
    ///
    /// # Examples
    /// ```
    /// use user_service::domain::{User, UserDraft, UserId};
    ///
    /// let mut user = User::new(UserId::new(7), UserDraft::new("Ada", "Lovelace"));
    /// user.rename(UserDraft::new("Grace", "Hopper"));
    /// assert_eq!(user.id(), UserId::new(7));
    /// assert_eq!(user.first_name(), Some("Grace"));
    /// ```
    pub fn rename(&mut self, draft: UserDraft) {
        self.first_name = draft.first_name;
        self.last_name = draft.last_name;
    }
}
