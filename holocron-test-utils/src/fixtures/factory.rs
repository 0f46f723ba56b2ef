//! Factory functions for generating mock database models.
//!
//! These are in-memory model instances that don't require database interaction, suitable for
//! unit tests of serialization and mapping code.

use crate::model::{CharacterModel, FavoriteModel, FilmModel, PlanetModel, UserModel};

pub fn mock_user_model(id: i32, username: Option<&str>) -> UserModel {
    UserModel {
        id,
        username: username.map(str::to_string),
        password: "password".to_string(),
    }
}

pub fn mock_planet_model(planet_id: i32) -> PlanetModel {
    PlanetModel {
        planet_id,
        climate: Some("arid".to_string()),
        name: "Tatooine".to_string(),
        resident_id: 1,
        film_id: 1,
    }
}

pub fn mock_character_model(character_id: i32, homeworld_id: i32) -> CharacterModel {
    CharacterModel {
        character_id,
        gender: Some("male".to_string()),
        name: "Luke Skywalker".to_string(),
        film_id: 1,
        homeworld_id,
    }
}

pub fn mock_film_model(film_id: i32, character_id: i32, planet_id: i32) -> FilmModel {
    FilmModel {
        film_id,
        character_id,
        planet_id,
        director: "George Lucas".to_string(),
        title: "A New Hope".to_string(),
    }
}

/// Create a favorite model, with `character_id` and `planet_id` exactly as given.
pub fn mock_favorite_model(
    id: i32,
    user_id: i32,
    character_id: Option<i32>,
    planet_id: Option<i32>,
) -> FavoriteModel {
    FavoriteModel {
        id,
        user_id,
        character_id,
        planet_id,
    }
}
