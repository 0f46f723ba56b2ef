//! Test fixture modules for database row creation.
//!
//! - `galaxy` - planets, characters, films and favorites
//! - `user` - user accounts
//! - `factory` - in-memory models that never touch the database

pub mod factory;
pub mod galaxy;
pub mod user;
