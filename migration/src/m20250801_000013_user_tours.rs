use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250801_000009_users::User, m20250801_000010_tours::Tour};

static IDX_USER_TOUR_PAIR: &str = "idx-user_tours-user_id-tour_id";
static FK_USER_TOUR_USER_ID: &str = "fk-user_tours-user_id";
static FK_USER_TOUR_TOUR_ID: &str = "fk-user_tours-tour_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserTour::Table)
                    .if_not_exists()
                    .col(pk_auto(UserTour::Id))
                    .col(integer(UserTour::UserId))
                    .col(integer(UserTour::TourId))
                    .col(timestamp(UserTour::BookedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_TOUR_PAIR)
                    .table(UserTour::Table)
                    .col(UserTour::UserId)
                    .col(UserTour::TourId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_TOUR_USER_ID)
                    .from_tbl(UserTour::Table)
                    .from_col(UserTour::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_TOUR_TOUR_ID)
                    .from_tbl(UserTour::Table)
                    .from_col(UserTour::TourId)
                    .to_tbl(Tour::Table)
                    .to_col(Tour::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_TOUR_TOUR_ID)
                    .table(UserTour::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_TOUR_USER_ID)
                    .table(UserTour::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_TOUR_PAIR)
                    .table(UserTour::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserTour::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum UserTour {
    Table,
    Id,
    UserId,
    TourId,
    BookedAt,
}
