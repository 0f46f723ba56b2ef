pub use sea_orm_migration::prelude::*;

mod m20251019_000001_user;
mod m20251019_000002_planet;
mod m20251019_000003_character;
mod m20251019_000004_film;
mod m20251019_000005_favorite;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251019_000001_user::Migration),
            Box::new(m20251019_000002_planet::Migration),
            Box::new(m20251019_000003_character::Migration),
            Box::new(m20251019_000004_film::Migration),
            Box::new(m20251019_000005_favorite::Migration),
        ]
    }
}
