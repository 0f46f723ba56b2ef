use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    pub planet_id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub film_id: i32,
    pub resident_id: i32,
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(planet: entity::planet::Model) -> Self {
        Self {
            planet_id: planet.planet_id,
            name: planet.name,
            climate: planet.climate,
            film_id: planet.film_id,
            resident_id: planet.resident_id,
        }
    }
}

/// Request body for creating a planet
///
/// Every field is required, they are optional here so a missing or null field reaches
/// validation instead of failing deserialization.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatePlanetDto {
    pub climate: Option<String>,
    pub name: Option<String>,
    pub resident_id: Option<i32>,
    pub film_id: Option<i32>,
}
