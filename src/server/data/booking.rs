//! Booking data repository for database operations

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::booking::{Booking, CreateBookingParam};

/// Repository providing database operations for room bookings.
pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new, unconfirmed booking
    ///
    /// # Arguments
    /// - `param` - Booking details
    ///
    /// # Returns
    /// - `Ok(Booking)` - The stored booking
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, param: CreateBookingParam) -> Result<Booking, DbErr> {
        let entity = entity::booking::ActiveModel {
            id: param.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            customer_name: ActiveValue::Set(param.customer_name),
            customer_email: ActiveValue::Set(param.customer_email),
            customer_contact_number: ActiveValue::Set(param.customer_contact_number),
            hotel_name: ActiveValue::Set(param.hotel_name),
            country: ActiveValue::Set(param.country),
            city: ActiveValue::Set(param.city),
            arrival_time: ActiveValue::Set(param.arrival_time),
            room_type: ActiveValue::Set(param.room_type),
            room_number: ActiveValue::Set(param.room_number),
            booking_status: ActiveValue::Set(false),
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let entity = entity::prelude::Booking::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Booking::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Booking>, DbErr> {
        let entities = entity::prelude::Booking::find()
            .order_by_asc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }

    /// Writes the confirmation flag of a booking
    ///
    /// The write happens even when the flag already holds `status`.
    ///
    /// # Arguments
    /// - `id` - ID of the booking
    /// - `status` - New confirmation flag
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows matched by the update
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn set_status(&self, id: i32, status: bool) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(entity::booking::Column::BookingStatus, Expr::value(status))
            .filter(entity::booking::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Booking::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
