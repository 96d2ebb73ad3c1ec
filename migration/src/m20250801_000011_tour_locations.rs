use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250801_000008_locations::Location, m20250801_000010_tours::Tour};

static IDX_TOUR_LOCATION_PAIR: &str = "idx-tour_locations-tour_id-location_id";
static FK_TOUR_LOCATION_TOUR_ID: &str = "fk-tour_locations-tour_id";
static FK_TOUR_LOCATION_LOCATION_ID: &str = "fk-tour_locations-location_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TourLocation::Table)
                    .if_not_exists()
                    .col(pk_auto(TourLocation::Id))
                    .col(integer(TourLocation::TourId))
                    .col(integer(TourLocation::LocationId))
                    .col(timestamp(TourLocation::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TOUR_LOCATION_PAIR)
                    .table(TourLocation::Table)
                    .col(TourLocation::TourId)
                    .col(TourLocation::LocationId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TOUR_LOCATION_TOUR_ID)
                    .from_tbl(TourLocation::Table)
                    .from_col(TourLocation::TourId)
                    .to_tbl(Tour::Table)
                    .to_col(Tour::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TOUR_LOCATION_LOCATION_ID)
                    .from_tbl(TourLocation::Table)
                    .from_col(TourLocation::LocationId)
                    .to_tbl(Location::Table)
                    .to_col(Location::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TOUR_LOCATION_LOCATION_ID)
                    .table(TourLocation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TOUR_LOCATION_TOUR_ID)
                    .table(TourLocation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TOUR_LOCATION_PAIR)
                    .table(TourLocation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TourLocation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TourLocation {
    Table,
    Id,
    TourId,
    LocationId,
    CreatedAt,
}
