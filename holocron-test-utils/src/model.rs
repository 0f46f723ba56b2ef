//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main holocron crate to keep fixture signatures consistent
//! across tests.

pub type UserModel = entity::user::Model;

pub type PlanetModel = entity::planet::Model;

pub type CharacterModel = entity::character::Model;

pub type FilmModel = entity::film::Model;

pub type FavoriteModel = entity::favorite::Model;
