//! Booking factory for creating test room reservations.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// Bookings start unconfirmed unless `confirmed(true)` is set.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    customer_name: String,
    customer_email: String,
    customer_contact_number: String,
    hotel_name: String,
    country: String,
    city: String,
    arrival_time: String,
    room_type: String,
    room_number: i32,
    booking_status: bool,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// The customer email is unique per factory, everything else is fixed.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            customer_name: format!("Guest {}", id),
            customer_email: format!("guest{}@example.com", id),
            customer_contact_number: "555-0100".to_string(),
            hotel_name: "Hotel California".to_string(),
            country: "USA".to_string(),
            city: "Los Angeles".to_string(),
            arrival_time: "2024-06-01T14:00".to_string(),
            room_type: "Deluxe".to_string(),
            room_number: 101,
            booking_status: false,
        }
    }

    pub fn customer_email(mut self, customer_email: impl Into<String>) -> Self {
        self.customer_email = customer_email.into();
        self
    }

    pub fn hotel_name(mut self, hotel_name: impl Into<String>) -> Self {
        self.hotel_name = hotel_name.into();
        self
    }

    pub fn room_number(mut self, room_number: i32) -> Self {
        self.room_number = room_number;
        self
    }

    pub fn confirmed(mut self, confirmed: bool) -> Self {
        self.booking_status = confirmed;
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            customer_name: ActiveValue::Set(self.customer_name),
            customer_email: ActiveValue::Set(self.customer_email),
            customer_contact_number: ActiveValue::Set(self.customer_contact_number),
            hotel_name: ActiveValue::Set(self.hotel_name),
            country: ActiveValue::Set(self.country),
            city: ActiveValue::Set(self.city),
            arrival_time: ActiveValue::Set(self.arrival_time),
            room_type: ActiveValue::Set(self.room_type),
            room_number: ActiveValue::Set(self.room_number),
            booking_status: ActiveValue::Set(self.booking_status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unconfirmed booking with default values.
pub async fn create_booking(db: &DatabaseConnection) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db).build().await
}
