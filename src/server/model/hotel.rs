//! Domain & parameter models for hotel operations
//!
//! Defines the hotel domain model, the create and partial update parameters, and
//! conversions from entity and into DTOs.

use crate::model::hotel::{CreateHotelDto, EditHotelDto, HotelDto};

/// A listed hotel, identified for duplicate detection by its name.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub city: String,
    pub number_of_rooms: i32,
    pub number_of_available_rooms: i32,
    pub rating: f64,
    pub image: String,
}

impl Hotel {
    pub fn from_entity(entity: entity::hotel::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            country: entity.country,
            city: entity.city,
            number_of_rooms: entity.number_of_rooms,
            number_of_available_rooms: entity.number_of_available_rooms,
            rating: entity.rating,
            image: entity.image,
        }
    }

    pub fn into_dto(self) -> HotelDto {
        HotelDto {
            id: self.id,
            name: self.name,
            country: self.country,
            city: self.city,
            number_of_rooms: self.number_of_rooms,
            number_of_available_rooms: self.number_of_available_rooms,
            rating: self.rating,
            image: self.image,
        }
    }
}

/// Parameters for listing a new hotel
#[derive(Debug, Clone)]
pub struct CreateHotelParam {
    pub id: Option<i32>,
    pub name: String,
    pub country: String,
    pub city: String,
    pub number_of_rooms: i32,
    pub number_of_available_rooms: i32,
    pub rating: f64,
    pub image: String,
}

impl From<CreateHotelDto> for CreateHotelParam {
    fn from(dto: CreateHotelDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            country: dto.country,
            city: dto.city,
            number_of_rooms: dto.number_of_rooms,
            number_of_available_rooms: dto.number_of_available_rooms,
            rating: dto.rating,
            image: dto.image,
        }
    }
}

/// Parameters for editing a hotel
///
/// Each `None` field keeps its stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateHotelParam {
    pub name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub number_of_rooms: Option<i32>,
    pub number_of_available_rooms: Option<i32>,
    pub rating: Option<f64>,
    pub image: Option<String>,
}

impl From<EditHotelDto> for UpdateHotelParam {
    fn from(dto: EditHotelDto) -> Self {
        Self {
            name: dto.name,
            country: dto.country,
            city: dto.city,
            number_of_rooms: dto.number_of_rooms,
            number_of_available_rooms: dto.number_of_available_rooms,
            rating: dto.rating,
            image: dto.image,
        }
    }
}
