//! Internal Diesel row structs.
//!
//! These never leave the persistence module; repositories convert them into
//! domain types before returning.

use diesel::prelude::*;

use crate::domain::{User, UserDraft, UserId};

use super::schema::user_table;

/// Row read from `user_table`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = user_table)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(
            UserId::new(row.id),
            UserDraft::from_parts(row.first_name, row.last_name),
        )
    }
}

/// Insertable row; `id` is omitted so the identity column fills it.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = user_table)]
pub(crate) struct NewUserRow<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
}

impl<'a> From<&'a UserDraft> for NewUserRow<'a> {
    fn from(draft: &'a UserDraft) -> Self {
        Self {
            first_name: draft.first_name.as_deref(),
            last_name: draft.last_name.as_deref(),
        }
    }
}

/// Changeset overwriting both name columns; `None` writes `NULL`.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = user_table)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct UserNamesUpdate<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
}

impl<'a> From<&'a User> for UserNamesUpdate<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            first_name: user.first_name(),
            last_name: user.last_name(),
        }
    }
}
