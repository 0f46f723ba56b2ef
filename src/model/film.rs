use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FilmDto {
    pub film_id: i32,
    pub title: String,
    pub director: String,
    pub character_id: i32,
    pub planet_id: i32,
}

impl From<entity::film::Model> for FilmDto {
    fn from(film: entity::film::Model) -> Self {
        Self {
            film_id: film.film_id,
            title: film.title,
            director: film.director,
            character_id: film.character_id,
            planet_id: film.planet_id,
        }
    }
}
