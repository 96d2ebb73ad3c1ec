use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250801_000004_location_types::LocationType;

static FK_LOCATION_LOCATION_TYPE_ID: &str = "fk-locations-location_type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Location::Table)
                    .if_not_exists()
                    .col(pk_auto(Location::Id))
                    .col(string(Location::Name))
                    .col(string(Location::Country))
                    .col(text_null(Location::Description))
                    .col(integer(Location::LocationTypeId))
                    .col(timestamp(Location::CreatedAt))
                    .col(timestamp(Location::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LOCATION_LOCATION_TYPE_ID)
                    .from_tbl(Location::Table)
                    .from_col(Location::LocationTypeId)
                    .to_tbl(LocationType::Table)
                    .to_col(LocationType::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LOCATION_LOCATION_TYPE_ID)
                    .table(Location::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Location::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Location {
    Table,
    Id,
    Name,
    Country,
    Description,
    LocationTypeId,
    CreatedAt,
    UpdatedAt,
}
