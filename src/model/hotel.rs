use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelDto {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub city: String,
    pub number_of_rooms: i32,
    pub number_of_available_rooms: i32,
    pub rating: f64,
    pub image: String,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateHotelDto {
    /// Optional client-chosen id, generated by the store when omitted.
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub country: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(range(min = 0))]
    pub number_of_rooms: i32,
    #[validate(range(min = 0))]
    pub number_of_available_rooms: i32,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[serde(default)]
    pub image: String,
}

/// Partial hotel update, only the provided fields are overwritten.
#[derive(Serialize, Deserialize, ToSchema, Validate, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct EditHotelDto {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub country: Option<String>,
    #[validate(length(min = 1))]
    pub city: Option<String>,
    #[validate(range(min = 0))]
    pub number_of_rooms: Option<i32>,
    #[validate(range(min = 0))]
    pub number_of_available_rooms: Option<i32>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,
    pub image: Option<String>,
}
