//! Diesel table definitions for the PostgreSQL schema.
//!
//! Keep in step with `backend/migrations`; `diesel print-schema` regenerates
//! this file from a live database.

diesel::table! {
    /// User records.
    ///
    /// `id` is a `BIGINT` identity column, so PostgreSQL assigns it on insert.
    /// Both name columns accept `NULL`.
    user_table (id) {
        id -> Int8,
        first_name -> Nullable<Text>,
        last_name -> Nullable<Text>,
    }
}
