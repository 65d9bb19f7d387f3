use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(string(Booking::CustomerName))
                    .col(string(Booking::CustomerEmail))
                    .col(string(Booking::CustomerContactNumber))
                    .col(string(Booking::HotelName))
                    .col(string(Booking::Country))
                    .col(string(Booking::City))
                    .col(string(Booking::ArrivalTime))
                    .col(string(Booking::RoomType))
                    .col(integer(Booking::RoomNumber))
                    .col(boolean(Booking::BookingStatus).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    CustomerName,
    CustomerEmail,
    CustomerContactNumber,
    HotelName,
    Country,
    City,
    ArrivalTime,
    RoomType,
    RoomNumber,
    BookingStatus,
}
