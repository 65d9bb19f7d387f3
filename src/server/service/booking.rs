//! Booking service for business logic.
//!
//! Bookings have no uniqueness key besides a client-supplied id. Confirmation is a one-way status transition which
//! can be repeated without effect.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::booking::BookingRepository,
    error::AppError,
    model::{
        booking::{Booking, CreateBookingParam},
        envelope::Envelope,
    },
    util::db::is_unique_violation,
};

pub const BOOKING_CREATED: &str = "Room has been booked successfully!";
pub const BOOKING_ID_TAKEN: &str = "Booking id is already taken!";
pub const BOOKING_NOT_FOUND: &str = "Booking not found!";
pub const BOOKING_CONFIRMED: &str = "Booking confirmed successfully!";
pub const BOOKING_DELETED: &str = "Booking deleted successfully!";

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a room.
    ///
    /// # Returns
    /// - `Ok(Envelope)` - `status: true` with the id of the new booking, or
    ///   `status: false` when the supplied id is in use
    /// - `Err(AppError)` - Database failure
    pub async fn create(&self, param: CreateBookingParam) -> Result<Envelope<()>, AppError> {
        let booking_repo = BookingRepository::new(self.db);

        if let Some(id) = param.id {
            if booking_repo.find_by_id(id).await?.is_some() {
                return Ok(Envelope::failure(BOOKING_ID_TAKEN));
            }
        }

        match booking_repo.create(param).await {
            Ok(booking) => Ok(Envelope::success(BOOKING_CREATED).with_id(booking.id)),
            Err(err) if is_unique_violation(&err) => Ok(Envelope::failure(BOOKING_ID_TAKEN)),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn get_all(&self) -> Result<Envelope<Vec<Booking>>, AppError> {
        let bookings = BookingRepository::new(self.db).get_all().await?;

        Ok(Envelope::found(bookings))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Envelope<Booking>, AppError> {
        match BookingRepository::new(self.db).find_by_id(id).await? {
            Some(booking) => Ok(Envelope::found(booking)),
            None => Ok(Envelope::failure(BOOKING_NOT_FOUND)),
        }
    }

    /// Marks a booking as confirmed.
    ///
    /// The flag is written whatever its current value, and success is reported
    /// whether or not the write modified anything.
    ///
    /// # Returns
    /// - `Ok(Envelope)` - `status: true` once confirmed, `status: false` for unknown ids
    /// - `Err(AppError)` - Database failure
    pub async fn confirm(&self, id: i32) -> Result<Envelope<()>, AppError> {
        let booking_repo = BookingRepository::new(self.db);

        if booking_repo.find_by_id(id).await?.is_none() {
            return Ok(Envelope::failure(BOOKING_NOT_FOUND));
        }

        let rows = booking_repo.set_status(id, true).await?;
        tracing::debug!("Confirmed booking {} ({} rows written)", id, rows);

        Ok(Envelope::success(BOOKING_CONFIRMED))
    }

    pub async fn delete(&self, id: i32) -> Result<Envelope<()>, AppError> {
        BookingRepository::new(self.db).delete(id).await?;

        Ok(Envelope::success(BOOKING_DELETED))
    }
}
