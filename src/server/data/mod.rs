//! Data access layer repositories.
//!
//! One repository per table. Repositories are generic over [`sea_orm::ConnectionTrait`] so the
//! same calls run against the connection pool or inside a transaction opened by a service.

pub mod character;
pub mod favorite;
pub mod film;
pub mod planet;
pub mod user;
