use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251019_000002_planet::Planet, m20251019_000003_character::Character};

static FK_FILM_CHARACTER_ID: &str = "fk-film-character_id";
static FK_FILM_PLANET_ID: &str = "fk-film-planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Film::Table)
                    .if_not_exists()
                    .col(pk_auto(Film::FilmId))
                    .col(integer(Film::CharacterId))
                    .col(integer(Film::PlanetId))
                    .col(string_len(Film::Director, 40))
                    .col(string_len(Film::Title, 200))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FILM_CHARACTER_ID)
                            .from(Film::Table, Film::CharacterId)
                            .to(Character::Table, Character::CharacterId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FILM_PLANET_ID)
                            .from(Film::Table, Film::PlanetId)
                            .to(Planet::Table, Planet::PlanetId),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Film::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Film {
    Table,
    FilmId,
    CharacterId,
    PlanetId,
    Director,
    Title,
}
