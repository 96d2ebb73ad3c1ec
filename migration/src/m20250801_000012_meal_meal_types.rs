use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250801_000003_meal_types::MealType, m20250801_000007_meals::Meal};

static IDX_MEAL_MEAL_TYPE_PAIR: &str = "idx-meal_meal_types-meal_id-meal_type_id";
static FK_MEAL_MEAL_TYPE_MEAL_ID: &str = "fk-meal_meal_types-meal_id";
static FK_MEAL_MEAL_TYPE_MEAL_TYPE_ID: &str = "fk-meal_meal_types-meal_type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MealMealType::Table)
                    .if_not_exists()
                    .col(pk_auto(MealMealType::Id))
                    .col(integer(MealMealType::MealId))
                    .col(integer(MealMealType::MealTypeId))
                    .col(timestamp(MealMealType::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MEAL_MEAL_TYPE_PAIR)
                    .table(MealMealType::Table)
                    .col(MealMealType::MealId)
                    .col(MealMealType::MealTypeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MEAL_MEAL_TYPE_MEAL_ID)
                    .from_tbl(MealMealType::Table)
                    .from_col(MealMealType::MealId)
                    .to_tbl(Meal::Table)
                    .to_col(Meal::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MEAL_MEAL_TYPE_MEAL_TYPE_ID)
                    .from_tbl(MealMealType::Table)
                    .from_col(MealMealType::MealTypeId)
                    .to_tbl(MealType::Table)
                    .to_col(MealType::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MEAL_MEAL_TYPE_MEAL_TYPE_ID)
                    .table(MealMealType::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MEAL_MEAL_TYPE_MEAL_ID)
                    .table(MealMealType::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MEAL_MEAL_TYPE_PAIR)
                    .table(MealMealType::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MealMealType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MealMealType {
    Table,
    Id,
    MealId,
    MealTypeId,
    CreatedAt,
}
