use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MealType::Table)
                    .if_not_exists()
                    .col(pk_auto(MealType::Id))
                    .col(string_uniq(MealType::Name))
                    .col(timestamp(MealType::CreatedAt))
                    .col(timestamp(MealType::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MealType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MealType {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}
