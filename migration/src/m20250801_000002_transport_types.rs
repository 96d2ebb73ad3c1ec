use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TransportType::Table)
                    .if_not_exists()
                    .col(pk_auto(TransportType::Id))
                    .col(string_uniq(TransportType::Name))
                    .col(timestamp(TransportType::CreatedAt))
                    .col(timestamp(TransportType::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TransportType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TransportType {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}
