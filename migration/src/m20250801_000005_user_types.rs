use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserType::Table)
                    .if_not_exists()
                    .col(pk_auto(UserType::Id))
                    .col(string_uniq(UserType::Name))
                    .col(boolean(UserType::Admin))
                    .col(boolean(UserType::Manager))
                    .col(timestamp(UserType::CreatedAt))
                    .col(timestamp(UserType::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum UserType {
    Table,
    Id,
    Name,
    Admin,
    Manager,
    CreatedAt,
    UpdatedAt,
}
