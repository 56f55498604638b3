//! Outbound adapters implementing the domain's `UserRepository` port.
//!
//! - **persistence**: PostgreSQL via Diesel, `diesel-async` and `bb8`.
//! - **memory**: process-local storage for development and tests.
//!
//! Adapters translate between storage representations and domain types and
//! hold no business logic.

pub mod memory;
pub mod persistence;
