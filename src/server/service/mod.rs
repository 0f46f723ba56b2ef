//! Business rules for each resource.
//!
//! Services validate request payloads, resolve referenced rows and run every write inside its
//! own transaction. A failed write drops the transaction, rolling it back, and is surfaced as
//! [`Error::Storage`](crate::server::error::Error::Storage).

pub mod character;
pub mod favorite;
pub mod film;
pub mod planet;
pub mod user;
