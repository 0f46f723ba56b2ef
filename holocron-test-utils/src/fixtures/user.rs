use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with a placeholder password.
    ///
    /// The first user inserted into a fresh context receives ID 1, the identity used by the
    /// favorite endpoints.
    pub async fn insert_user(&self, username: Option<&str>) -> Result<UserModel, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(username.map(str::to_string)),
            password: ActiveValue::Set("password".to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
