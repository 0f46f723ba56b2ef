//! Declarative test builder.
//!
//! The builder pattern allows chaining multiple configuration methods together, with all
//! operations queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, setup::galaxy_tables, TestContext};

/// Builder for declarative test initialization.
///
/// Fixture rows are inserted in dependency order during `build()`: users, planets,
/// characters, films, then favorites. Auto-incremented IDs therefore start at 1 within each
/// table in the order the fixtures were queued.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_galaxy_tables: bool,

    // Database fixtures to insert
    users: Vec<Option<String>>,
    planets: Vec<String>,
    characters: Vec<(String, i32)>, // (name, homeworld_id)
    films: Vec<(String, i32, i32)>, // (title, character_id, planet_id)
    favorites: Vec<(i32, Option<i32>, Option<i32>)>, // (user_id, character_id, planet_id)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_galaxy_tables: false,
            users: Vec::new(),
            planets: Vec::new(),
            characters: Vec::new(),
            films: Vec::new(),
            favorites: Vec::new(),
        }
    }

    /// Add every holocron table to the test database.
    ///
    /// Creates User, Planet, Character, Film and Favorite in foreign key order.
    pub fn with_galaxy_tables(mut self) -> Self {
        self.include_galaxy_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Planet)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user into the database.
    pub fn with_user(mut self, username: Option<&str>) -> Self {
        self.users.push(username.map(str::to_string));
        self
    }

    /// Insert a planet into the database.
    pub fn with_mock_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    /// Insert a character into the database.
    ///
    /// The homeworld must be queued with `with_mock_planet` or the insert fails on the
    /// foreign key constraint.
    pub fn with_mock_character(mut self, name: impl Into<String>, homeworld_id: i32) -> Self {
        self.characters.push((name.into(), homeworld_id));
        self
    }

    /// Insert a film referencing an existing character and planet.
    pub fn with_mock_film(
        mut self,
        title: impl Into<String>,
        character_id: i32,
        planet_id: i32,
    ) -> Self {
        self.films.push((title.into(), character_id, planet_id));
        self
    }

    /// Insert a favorite row as-is, including rows with neither reference set.
    pub fn with_favorite(
        mut self,
        user_id: i32,
        character_id: Option<i32>,
        planet_id: Option<i32>,
    ) -> Self {
        self.favorites.push((user_id, character_id, planet_id));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_galaxy_tables {
            all_tables.extend(galaxy_tables());
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for username in self.users {
            setup.user().insert_user(username.as_deref()).await?;
        }

        for name in self.planets {
            setup.galaxy().insert_mock_planet(&name).await?;
        }

        for (name, homeworld_id) in self.characters {
            setup
                .galaxy()
                .insert_mock_character(&name, homeworld_id)
                .await?;
        }

        for (title, character_id, planet_id) in self.films {
            setup
                .galaxy()
                .insert_mock_film(&title, character_id, planet_id)
                .await?;
        }

        for (user_id, character_id, planet_id) in self.favorites {
            setup
                .galaxy()
                .insert_favorite(user_id, character_id, planet_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
