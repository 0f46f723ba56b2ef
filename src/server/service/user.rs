use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::Error, model::db::UserModel};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_users(&self) -> Result<Vec<UserModel>, Error> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.get_all().await?)
    }
}
