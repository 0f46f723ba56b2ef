use sea_orm::DatabaseConnection;

use crate::server::{data::film::FilmRepository, error::Error, model::db::FilmModel};

pub struct FilmService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FilmService<'a> {
    /// Creates a new instance of [`FilmService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_films(&self) -> Result<Vec<FilmModel>, Error> {
        let film_repo = FilmRepository::new(self.db);

        Ok(film_repo.get_all().await?)
    }
}
