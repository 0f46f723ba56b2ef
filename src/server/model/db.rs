//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM models generated in the `entity` crate.

/// User account.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `username` - Optional display name
/// - `password` - Required, never serialized
pub type UserModel = entity::user::Model;

/// Planet.
///
/// # Fields (from `entity::planet::Model`)
/// - `planet_id` - Primary key
/// - `climate` - Free-form climate description (nullable)
/// - `name` - Planet name
/// - `resident_id` - ID of a resident, not a foreign key
/// - `film_id` - ID of a film, not a foreign key
pub type PlanetModel = entity::planet::Model;

/// Character.
///
/// # Fields (from `entity::character::Model`)
/// - `character_id` - Primary key
/// - `gender` - Nullable
/// - `name` - Unique character name
/// - `film_id` - ID of a film, not a foreign key
/// - `homeworld_id` - Foreign key to the character's planet
pub type CharacterModel = entity::character::Model;

/// Film, referencing exactly one character and one planet.
pub type FilmModel = entity::film::Model;

/// Favorite linking a user to a character or a planet.
///
/// # Fields (from `entity::favorite::Model`)
/// - `id` - Primary key
/// - `user_id` - Foreign key to the owning user
/// - `character_id` - Foreign key to a character (nullable)
/// - `planet_id` - Foreign key to a planet (nullable)
pub type FavoriteModel = entity::favorite::Model;
