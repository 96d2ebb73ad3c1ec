use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LocationType::Table)
                    .if_not_exists()
                    .col(pk_auto(LocationType::Id))
                    .col(string_uniq(LocationType::Name))
                    .col(timestamp(LocationType::CreatedAt))
                    .col(timestamp(LocationType::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LocationType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LocationType {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}
