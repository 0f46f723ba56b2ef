//! JSON request and response types exposed by the HTTP API.

pub mod api;
pub mod character;
pub mod favorite;
pub mod film;
pub mod planet;
pub mod user;
