use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251019_000001_user::User, m20251019_000002_planet::Planet,
    m20251019_000003_character::Character,
};

static IDX_FAVORITE_USER_ID: &str = "idx-favorite-user_id";
static FK_FAVORITE_USER_ID: &str = "fk-favorite-user_id";
static FK_FAVORITE_CHARACTER_ID: &str = "fk-favorite-character_id";
static FK_FAVORITE_PLANET_ID: &str = "fk-favorite-planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorite::Id))
                    .col(integer(Favorite::UserId))
                    .col(integer_null(Favorite::CharacterId))
                    .col(integer_null(Favorite::PlanetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_USER_ID)
                            .from(Favorite::Table, Favorite::UserId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_CHARACTER_ID)
                            .from(Favorite::Table, Favorite::CharacterId)
                            .to(Character::Table, Character::CharacterId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_PLANET_ID)
                            .from(Favorite::Table, Favorite::PlanetId)
                            .to(Planet::Table, Planet::PlanetId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_USER_ID)
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_USER_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorite {
    Table,
    Id,
    UserId,
    CharacterId,
    PlanetId,
}
