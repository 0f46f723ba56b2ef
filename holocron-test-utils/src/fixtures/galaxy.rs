use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{CharacterModel, FavoriteModel, FilmModel, PlanetModel},
    TestContext,
};

impl TestContext {
    pub fn galaxy<'a>(&'a self) -> GalaxyFixtures<'a> {
        GalaxyFixtures { setup: self }
    }
}

pub struct GalaxyFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> GalaxyFixtures<'a> {
    /// Insert a planet with an arid climate and resident/film IDs of 1.
    pub async fn insert_mock_planet(&self, name: &str) -> Result<PlanetModel, TestError> {
        Ok(entity::prelude::Planet::insert(entity::planet::ActiveModel {
            climate: ActiveValue::Set(Some("arid".to_string())),
            name: ActiveValue::Set(name.to_string()),
            resident_id: ActiveValue::Set(1),
            film_id: ActiveValue::Set(1),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a character living on the provided homeworld.
    ///
    /// The homeworld must already exist or the foreign key constraint will fail.
    pub async fn insert_mock_character(
        &self,
        name: &str,
        homeworld_id: i32,
    ) -> Result<CharacterModel, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                gender: ActiveValue::Set(Some("male".to_string())),
                name: ActiveValue::Set(name.to_string()),
                film_id: ActiveValue::Set(1),
                homeworld_id: ActiveValue::Set(homeworld_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a character along with a freshly created homeworld of the same name suffixed
    /// with " Prime".
    pub async fn insert_mock_character_with_homeworld(
        &self,
        name: &str,
    ) -> Result<(CharacterModel, PlanetModel), TestError> {
        let planet = self
            .insert_mock_planet(&format!("{} Prime", name))
            .await?;
        let character = self.insert_mock_character(name, planet.planet_id).await?;

        Ok((character, planet))
    }

    pub async fn insert_mock_film(
        &self,
        title: &str,
        character_id: i32,
        planet_id: i32,
    ) -> Result<FilmModel, TestError> {
        Ok(entity::prelude::Film::insert(entity::film::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            planet_id: ActiveValue::Set(planet_id),
            director: ActiveValue::Set("George Lucas".to_string()),
            title: ActiveValue::Set(title.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_favorite(
        &self,
        user_id: i32,
        character_id: Option<i32>,
        planet_id: Option<i32>,
    ) -> Result<FavoriteModel, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                character_id: ActiveValue::Set(character_id),
                planet_id: ActiveValue::Set(planet_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
