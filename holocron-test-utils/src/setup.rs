use sea_orm::{sea_query::TableCreateStatement, DbBackend, Schema};

/// CREATE TABLE statements for every holocron table, ordered so each foreign key target
/// exists before the table referencing it.
pub fn galaxy_tables() -> Vec<TableCreateStatement> {
    let schema = Schema::new(DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::User),
        schema.create_table_from_entity(entity::prelude::Planet),
        schema.create_table_from_entity(entity::prelude::Character),
        schema.create_table_from_entity(entity::prelude::Film),
        schema.create_table_from_entity(entity::prelude::Favorite),
    ]
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestContext::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_galaxy_tables {
    () => {{
        async {
            let setup = $crate::TestContext::new().await?;
            setup.with_tables($crate::setup::galaxy_tables()).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
