use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
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
    pub booking_status: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    /// Optional client-chosen id, generated by the store when omitted.
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 1))]
    pub customer_name: String,
    #[validate(email)]
    pub customer_email: String,
    #[validate(length(min = 1))]
    pub customer_contact_number: String,
    #[validate(length(min = 1))]
    pub hotel_name: String,
    #[validate(length(min = 1))]
    pub country: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub arrival_time: String,
    #[validate(length(min = 1))]
    pub room_type: String,
    #[validate(range(min = 0))]
    pub room_number: i32,
}
