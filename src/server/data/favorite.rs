use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a favorite for the provided user
    ///
    /// Both references are stored as given, neither is required at this layer.
    pub async fn create(
        &self,
        user_id: i32,
        character_id: Option<i32>,
        planet_id: Option<i32>,
    ) -> Result<entity::favorite::Model, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Gets every favorite of every user
    pub async fn get_all(&self) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the first favorite the user holds for the provided planet
    pub async fn get_by_user_and_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::PlanetId.eq(planet_id))
            .order_by_asc(entity::favorite::Column::Id)
            .one(self.db)
            .await
    }

    /// Gets the first favorite the user holds for the provided character
    pub async fn get_by_user_and_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::CharacterId.eq(character_id))
            .order_by_asc(entity::favorite::Column::Id)
            .one(self.db)
            .await
    }

    /// Deletes a favorite
    ///
    /// Returns OK regardless of the favorite existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}
