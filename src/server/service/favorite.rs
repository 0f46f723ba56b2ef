use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::favorite::CreateFavoriteDto,
    server::{
        data::{
            character::CharacterRepository, favorite::FavoriteRepository,
            planet::PlanetRepository, user::UserRepository,
        },
        error::{request::RequestError, Error},
        model::db::FavoriteModel,
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the favorites of every user
    pub async fn get_favorites(&self) -> Result<Vec<FavoriteModel>, Error> {
        let favorite_repo = FavoriteRepository::new(self.db);

        Ok(favorite_repo.get_all().await?)
    }

    /// Gets the favorites of the provided user
    ///
    /// # Returns
    /// - `Ok(Vec<FavoriteModel>)`: The user's favorites, possibly empty
    /// - `Err(Error::RequestError(RequestError::UserNotFound))`: The user does not exist
    /// - `Err(Error::DbErr(_))`: A lookup failed
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<Vec<FavoriteModel>, Error> {
        let user_repo = UserRepository::new(self.db);
        let favorite_repo = FavoriteRepository::new(self.db);

        if user_repo.get(user_id).await?.is_none() {
            return Err(RequestError::UserNotFound(user_id).into());
        }

        Ok(favorite_repo.get_by_user_id(user_id).await?)
    }

    /// Creates a favorite from a payload referencing a character, a planet, or both
    ///
    /// The references are not looked up beforehand, an unknown ID is rejected by the foreign
    /// key constraint and returned as [`Error::Storage`].
    pub async fn add_favorite(
        &self,
        user_id: i32,
        payload: CreateFavoriteDto,
    ) -> Result<FavoriteModel, Error> {
        if payload.character_id.is_none() && payload.planet_id.is_none() {
            return Err(RequestError::MissingFavoriteTarget.into());
        }

        self.insert(user_id, payload.character_id, payload.planet_id)
            .await
    }

    /// Favorites an existing planet for the provided user
    pub async fn add_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoriteModel, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let planet = planet_repo
            .get(planet_id)
            .await?
            .ok_or(RequestError::FavoritePlanetMissing(planet_id))?;

        self.insert(user_id, None, Some(planet.planet_id)).await
    }

    /// Favorites an existing character for the provided user
    pub async fn add_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteModel, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let character = character_repo
            .get(character_id)
            .await?
            .ok_or(RequestError::FavoriteCharacterMissing(character_id))?;

        self.insert(user_id, Some(character.character_id), None)
            .await
    }

    /// Removes the user's first favorite for the provided planet
    pub async fn remove_favorite_planet(&self, user_id: i32, planet_id: i32) -> Result<(), Error> {
        let favorite_repo = FavoriteRepository::new(self.db);

        let favorite = favorite_repo
            .get_by_user_and_planet(user_id, planet_id)
            .await?
            .ok_or(RequestError::PlanetFavoriteNotFound { user_id, planet_id })?;

        self.delete(favorite).await
    }

    /// Removes the user's first favorite for the provided character
    pub async fn remove_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<(), Error> {
        let favorite_repo = FavoriteRepository::new(self.db);

        let favorite = favorite_repo
            .get_by_user_and_character(user_id, character_id)
            .await?
            .ok_or(RequestError::CharacterFavoriteNotFound {
                user_id,
                character_id,
            })?;

        self.delete(favorite).await
    }

    async fn insert(
        &self,
        user_id: i32,
        character_id: Option<i32>,
        planet_id: Option<i32>,
    ) -> Result<FavoriteModel, Error> {
        let txn = self.db.begin().await.map_err(Error::Storage)?;

        let favorite = FavoriteRepository::new(&txn)
            .create(user_id, character_id, planet_id)
            .await
            .map_err(Error::Storage)?;

        txn.commit().await.map_err(Error::Storage)?;

        tracing::debug!(
            favorite_id = %favorite.id,
            user_id = %user_id,
            "Added favorite"
        );

        Ok(favorite)
    }

    async fn delete(&self, favorite: FavoriteModel) -> Result<(), Error> {
        let txn = self.db.begin().await.map_err(Error::Storage)?;

        FavoriteRepository::new(&txn)
            .delete(favorite.id)
            .await
            .map_err(Error::Storage)?;

        txn.commit().await.map_err(Error::Storage)?;

        tracing::debug!(
            favorite_id = %favorite.id,
            user_id = %favorite.user_id,
            "Removed favorite"
        );

        Ok(())
    }
}
