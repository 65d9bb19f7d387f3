//! Domain & parameter models for room bookings
//!
//! A booking copies the hotel's name, city and country as plain strings; nothing ties
//! it to a hotel record.

use crate::model::booking::{BookingDto, CreateBookingDto};

/// A room booking awaiting or holding confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_contact_number: String,
    pub hotel_name: String,
    pub country: String,
    pub city: String,
    pub arrival_time: String,
    pub room_type: String,
    pub room_number: i32,
    /// Set once the booking has been confirmed
    pub booking_status: bool,
}

impl Booking {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            customer_name: entity.customer_name,
            customer_email: entity.customer_email,
            customer_contact_number: entity.customer_contact_number,
            hotel_name: entity.hotel_name,
            country: entity.country,
            city: entity.city,
            arrival_time: entity.arrival_time,
            room_type: entity.room_type,
            room_number: entity.room_number,
            booking_status: entity.booking_status,
        }
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            customer_contact_number: self.customer_contact_number,
            hotel_name: self.hotel_name,
            country: self.country,
            city: self.city,
            arrival_time: self.arrival_time,
            room_type: self.room_type,
            room_number: self.room_number,
            booking_status: self.booking_status,
        }
    }
}

/// Parameters for booking a room. New bookings always start unconfirmed.
#[derive(Debug, Clone)]
pub struct CreateBookingParam {
    pub id: Option<i32>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_contact_number: String,
    pub hotel_name: String,
    pub country: String,
    pub city: String,
    pub arrival_time: String,
    pub room_type: String,
    pub room_number: i32,
}

impl From<CreateBookingDto> for CreateBookingParam {
    fn from(dto: CreateBookingDto) -> Self {
        Self {
            id: dto.id,
            customer_name: dto.customer_name,
            customer_email: dto.customer_email,
            customer_contact_number: dto.customer_contact_number,
            hotel_name: dto.hotel_name,
            country: dto.country,
            city: dto.city,
            arrival_time: dto.arrival_time,
            room_type: dto.room_type,
            room_number: dto.room_number,
        }
    }
}
