use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TourType::Table)
                    .if_not_exists()
                    .col(pk_auto(TourType::Id))
                    .col(string_uniq(TourType::Name))
                    .col(timestamp(TourType::CreatedAt))
                    .col(timestamp(TourType::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TourType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TourType {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}
