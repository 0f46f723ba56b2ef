use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterDto {
    pub character_id: i32,
    pub name: String,
    pub gender: Option<String>,
    pub film_id: i32,
    pub homeworld_id: i32,
}

impl From<entity::character::Model> for CharacterDto {
    fn from(character: entity::character::Model) -> Self {
        Self {
            character_id: character.character_id,
            name: character.name,
            gender: character.gender,
            film_id: character.film_id,
            homeworld_id: character.homeworld_id,
        }
    }
}

/// Request body for creating a character
///
/// Every field is required, they are optional here so a missing or null field reaches
/// validation instead of failing deserialization.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateCharacterDto {
    pub gender: Option<String>,
    pub name: Option<String>,
    pub homeworld_id: Option<i32>,
    pub film_id: Option<i32>,
}
