//! HTTP controller endpoints for the holocron API.
//!
//! Controllers extract path parameters, request bodies and the acting user, call into a
//! service and serialize the outcome. Every handler is annotated for utoipa so it appears in
//! the generated OpenAPI document.

pub mod character;
pub mod favorite;
pub mod film;
pub mod planet;
pub mod sitemap;
pub mod user;
pub mod util;
