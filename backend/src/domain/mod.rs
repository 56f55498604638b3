//! Domain primitives, ports and services.
//!
//! Purpose: Define the user entity, the transport-agnostic error payload and
//! the ports adapters plug into. Nothing here depends on actix-web or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: error payload and its stable category.
//! - TraceId: per-request correlation identifier.
//! - User / UserDraft / UserId: the user record and its parts.
//! - UserStore: service implementing the driving ports.

pub mod error;
pub mod ports;
mod trace_id;
pub mod user;
mod user_store;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDraft, UserId};
pub use self::user_store::UserStore;
