pub use sea_orm_migration::prelude::*;

mod m20250801_000001_tour_types;
mod m20250801_000002_transport_types;
mod m20250801_000003_meal_types;
mod m20250801_000004_location_types;
mod m20250801_000005_user_types;
mod m20250801_000006_transports;
mod m20250801_000007_meals;
mod m20250801_000008_locations;
mod m20250801_000009_users;
mod m20250801_000010_tours;
mod m20250801_000011_tour_locations;
mod m20250801_000012_meal_meal_types;
mod m20250801_000013_user_tours;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_tour_types::Migration),
            Box::new(m20250801_000002_transport_types::Migration),
            Box::new(m20250801_000003_meal_types::Migration),
            Box::new(m20250801_000004_location_types::Migration),
            Box::new(m20250801_000005_user_types::Migration),
            Box::new(m20250801_000006_transports::Migration),
            Box::new(m20250801_000007_meals::Migration),
            Box::new(m20250801_000008_locations::Migration),
            Box::new(m20250801_000009_users::Migration),
            Box::new(m20250801_000010_tours::Migration),
            Box::new(m20250801_000011_tour_locations::Migration),
            Box::new(m20250801_000012_meal_meal_types::Migration),
            Box::new(m20250801_000013_user_tours::Migration),
        ]
    }
}
