use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct FilmRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FilmRepository<'a, C> {
    /// Creates a new instance of [`FilmRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::film::Model>, DbErr> {
        entity::prelude::Film::find()
            .order_by_asc(entity::film::Column::FilmId)
            .all(self.db)
            .await
    }

    pub async fn get(&self, film_id: i32) -> Result<Option<entity::film::Model>, DbErr> {
        entity::prelude::Film::find_by_id(film_id).one(self.db).await
    }
}
