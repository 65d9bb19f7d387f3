use crate::server::{
    data::hotel::HotelRepository,
    model::hotel::{CreateHotelParam, UpdateHotelParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_name;
mod update;

fn hotel_param(name: &str) -> CreateHotelParam {
    CreateHotelParam {
        id: None,
        name: name.to_string(),
        country: "USA".to_string(),
        city: "Los Angeles".to_string(),
        number_of_rooms: 120,
        number_of_available_rooms: 45,
        rating: 4.5,
        image: String::new(),
    }
}
