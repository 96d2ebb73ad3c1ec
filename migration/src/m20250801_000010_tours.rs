use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250801_000001_tour_types::TourType, m20250801_000006_transports::Transport,
    m20250801_000007_meals::Meal,
};

static IDX_TOUR_TOUR_TYPE_ID: &str = "idx-tours-tour_type_id";
static FK_TOUR_TOUR_TYPE_ID: &str = "fk-tours-tour_type_id";
static FK_TOUR_TRANSPORT_ID: &str = "fk-tours-transport_id";
static FK_TOUR_MEAL_ID: &str = "fk-tours-meal_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tour::Table)
                    .if_not_exists()
                    .col(pk_auto(Tour::Id))
                    .col(text(Tour::Description))
                    .col(integer(Tour::TourTypeId))
                    .col(integer_null(Tour::TransportId))
                    .col(integer_null(Tour::MealId))
                    .col(date_null(Tour::StartDate))
                    .col(date_null(Tour::EndDate))
                    .col(double(Tour::Price))
                    .col(boolean(Tour::Active))
                    .col(timestamp(Tour::CreatedAt))
                    .col(timestamp(Tour::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TOUR_TOUR_TYPE_ID)
                    .table(Tour::Table)
                    .col(Tour::TourTypeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TOUR_TOUR_TYPE_ID)
                    .from_tbl(Tour::Table)
                    .from_col(Tour::TourTypeId)
                    .to_tbl(TourType::Table)
                    .to_col(TourType::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TOUR_TRANSPORT_ID)
                    .from_tbl(Tour::Table)
                    .from_col(Tour::TransportId)
                    .to_tbl(Transport::Table)
                    .to_col(Transport::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TOUR_MEAL_ID)
                    .from_tbl(Tour::Table)
                    .from_col(Tour::MealId)
                    .to_tbl(Meal::Table)
                    .to_col(Meal::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TOUR_MEAL_ID)
                    .table(Tour::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TOUR_TRANSPORT_ID)
                    .table(Tour::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TOUR_TOUR_TYPE_ID)
                    .table(Tour::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TOUR_TOUR_TYPE_ID)
                    .table(Tour::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Tour::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Tour {
    Table,
    Id,
    Description,
    TourTypeId,
    TransportId,
    MealId,
    StartDate,
    EndDate,
    Price,
    Active,
    CreatedAt,
    UpdatedAt,
}
