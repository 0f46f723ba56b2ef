use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new character
    ///
    /// Fails with a database error if the name is already taken or the homeworld does not
    /// exist.
    pub async fn create(
        &self,
        name: String,
        gender: Option<String>,
        film_id: i32,
        homeworld_id: i32,
    ) -> Result<entity::character::Model, DbErr> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(name),
            gender: ActiveValue::Set(gender),
            film_id: ActiveValue::Set(film_id),
            homeworld_id: ActiveValue::Set(homeworld_id),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::CharacterId)
            .all(self.db)
            .await
    }

    pub async fn get(
        &self,
        character_id: i32,
    ) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }
}
