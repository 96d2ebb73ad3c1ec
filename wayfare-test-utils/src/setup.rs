use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};

use crate::error::TestError;

/// In-memory SQLite test environment.
///
/// Tables are not created automatically; use the [`test_setup_with_tables!`]
/// or [`test_setup_with_travel_tables!`] macros to pick the schema a test
/// needs.
pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { db })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Entity-derived schemas carry no composite indexes; the pair-uniqueness
    /// indexes from the migrations have to be created separately.
    pub async fn with_indexes(&self, stmts: Vec<IndexCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates the full travel schema (reference tables, entities, link tables),
/// plus any extra entities passed in.
#[macro_export]
macro_rules! test_setup_with_travel_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::TourType),
                schema.create_table_from_entity(entity::prelude::TransportType),
                schema.create_table_from_entity(entity::prelude::MealType),
                schema.create_table_from_entity(entity::prelude::LocationType),
                schema.create_table_from_entity(entity::prelude::UserType),
                schema.create_table_from_entity(entity::prelude::Transport),
                schema.create_table_from_entity(entity::prelude::Meal),
                schema.create_table_from_entity(entity::prelude::Location),
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Tour),
                schema.create_table_from_entity(entity::prelude::TourLocation),
                schema.create_table_from_entity(entity::prelude::MealMealType),
                schema.create_table_from_entity(entity::prelude::UserTour),
            ];
            setup.with_tables(stmts).await?;

            // Same unique pair indexes the migrations create on the link
            // tables; without them duplicate links would slip through.
            let indexes = vec![
                sea_orm::sea_query::Index::create()
                    .name("idx-tour_locations-tour_id-location_id")
                    .table(entity::prelude::TourLocation)
                    .col(entity::tour_location::Column::TourId)
                    .col(entity::tour_location::Column::LocationId)
                    .unique()
                    .to_owned(),
                sea_orm::sea_query::Index::create()
                    .name("idx-meal_meal_types-meal_id-meal_type_id")
                    .table(entity::prelude::MealMealType)
                    .col(entity::meal_meal_type::Column::MealId)
                    .col(entity::meal_meal_type::Column::MealTypeId)
                    .unique()
                    .to_owned(),
                sea_orm::sea_query::Index::create()
                    .name("idx-user_tours-user_id-tour_id")
                    .table(entity::prelude::UserTour)
                    .col(entity::user_tour::Column::UserId)
                    .col(entity::user_tour::Column::TourId)
                    .unique()
                    .to_owned(),
            ];
            setup.with_indexes(indexes).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
