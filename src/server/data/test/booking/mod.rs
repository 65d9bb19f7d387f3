use crate::server::{data::booking::BookingRepository, model::booking::CreateBookingParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod set_status;

fn booking_param() -> CreateBookingParam {
    CreateBookingParam {
        id: None,
        customer_name: "Jane Doe".to_string(),
        customer_email: "jane@example.com".to_string(),
        customer_contact_number: "555-0100".to_string(),
        hotel_name: "Hotel California".to_string(),
        country: "USA".to_string(),
        city: "Los Angeles".to_string(),
        arrival_time: "2024-06-01T14:00".to_string(),
        room_type: "Deluxe".to_string(),
        room_number: 12,
    }
}
