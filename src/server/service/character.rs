use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::character::CreateCharacterDto,
    server::{
        data::character::CharacterRepository,
        error::{request::RequestError, Error},
        model::db::CharacterModel,
    },
};

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of [`CharacterService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_characters(&self) -> Result<Vec<CharacterModel>, Error> {
        let character_repo = CharacterRepository::new(self.db);

        Ok(character_repo.get_all().await?)
    }

    pub async fn get_character(&self, character_id: i32) -> Result<CharacterModel, Error> {
        let character_repo = CharacterRepository::new(self.db);

        character_repo
            .get(character_id)
            .await?
            .ok_or_else(|| RequestError::CharacterNotFound(character_id).into())
    }

    /// Validates the payload and inserts a new character
    ///
    /// Name uniqueness and the homeworld reference are enforced by the database, a violation
    /// rolls the transaction back and returns [`Error::Storage`].
    pub async fn create_character(
        &self,
        payload: CreateCharacterDto,
    ) -> Result<CharacterModel, Error> {
        let (Some(gender), Some(name), Some(homeworld_id), Some(film_id)) = (
            payload.gender,
            payload.name,
            payload.homeworld_id,
            payload.film_id,
        ) else {
            return Err(RequestError::IncompleteCharacter.into());
        };

        let txn = self.db.begin().await.map_err(Error::Storage)?;

        let character = CharacterRepository::new(&txn)
            .create(name, Some(gender), film_id, homeworld_id)
            .await
            .map_err(Error::Storage)?;

        txn.commit().await.map_err(Error::Storage)?;

        tracing::info!(
            character_id = %character.character_id,
            "Created character {}",
            character.name
        );

        Ok(character)
    }
}
