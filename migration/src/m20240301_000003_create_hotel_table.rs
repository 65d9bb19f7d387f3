use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hotel::Table)
                    .if_not_exists()
                    .col(pk_auto(Hotel::Id))
                    .col(string_uniq(Hotel::Name))
                    .col(string(Hotel::Country))
                    .col(string(Hotel::City))
                    .col(integer(Hotel::NumberOfRooms))
                    .col(integer(Hotel::NumberOfAvailableRooms))
                    .col(double(Hotel::Rating))
                    .col(string(Hotel::Image).default(""))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hotel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Hotel {
    Table,
    Id,
    Name,
    Country,
    City,
    NumberOfRooms,
    NumberOfAvailableRooms,
    Rating,
    Image,
}
