use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251019_000002_planet::Planet;

static IDX_CHARACTER_HOMEWORLD_ID: &str = "idx-character-homeworld_id";
static FK_CHARACTER_HOMEWORLD_ID: &str = "fk-character-homeworld_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline as SQLite cannot add them afterwards
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::CharacterId))
                    .col(string_len_null(Character::Gender, 40))
                    .col(string_len_uniq(Character::Name, 40))
                    .col(integer(Character::FilmId))
                    .col(integer(Character::HomeworldId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CHARACTER_HOMEWORLD_ID)
                            .from(Character::Table, Character::HomeworldId)
                            .to(Planet::Table, Planet::PlanetId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_HOMEWORLD_ID)
                    .table(Character::Table)
                    .col(Character::HomeworldId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTER_HOMEWORLD_ID)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    CharacterId,
    Gender,
    Name,
    FilmId,
    HomeworldId,
}
