use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250801_000002_transport_types::TransportType;

static FK_TRANSPORT_TRANSPORT_TYPE_ID: &str = "fk-transports-transport_type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transport::Table)
                    .if_not_exists()
                    .col(pk_auto(Transport::Id))
                    .col(string(Transport::Name))
                    .col(double(Transport::PricePerPerson))
                    .col(integer(Transport::TransportTypeId))
                    .col(timestamp(Transport::CreatedAt))
                    .col(timestamp(Transport::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TRANSPORT_TRANSPORT_TYPE_ID)
                    .from_tbl(Transport::Table)
                    .from_col(Transport::TransportTypeId)
                    .to_tbl(TransportType::Table)
                    .to_col(TransportType::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TRANSPORT_TRANSPORT_TYPE_ID)
                    .table(Transport::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Transport::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Transport {
    Table,
    Id,
    Name,
    PricePerPerson,
    TransportTypeId,
    CreatedAt,
    UpdatedAt,
}
