//! Hotel service for business logic.
//!
//! Hotels are unique by name: creating or renaming onto a taken name is rejected.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::hotel::HotelRepository,
    error::AppError,
    model::{
        envelope::Envelope,
        hotel::{CreateHotelParam, Hotel, UpdateHotelParam},
    },
    util::db::is_unique_violation,
};

pub const HOTEL_CREATED: &str = "Hotel created successfully!";
pub const HOTEL_EXISTS: &str = "Hotel already exists!";
pub const HOTEL_ID_TAKEN: &str = "Hotel id is already taken!";
pub const HOTEL_NOT_FOUND: &str = "Hotel not found!";
pub const HOTEL_UPDATED: &str = "Hotel updated successfully!";
pub const HOTEL_DELETED: &str = "Hotel Deleted Successfully!";

/// Service providing business logic for hotel listings.
pub struct HotelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelService<'a> {
    /// Creates a new HotelService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `HotelService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a new hotel unless one with the same name exists.
    ///
    /// # Arguments
    /// - `param` - Hotel data
    ///
    /// # Returns
    /// - `Ok(Envelope)` - `status: true` with the new id, or `status: false` when the
    ///   name or the supplied id is taken
    /// - `Err(AppError)` - Database failure
    pub async fn create(&self, param: CreateHotelParam) -> Result<Envelope<()>, AppError> {
        let hotel_repo = HotelRepository::new(self.db);

        if hotel_repo.find_by_name(&param.name).await?.is_some() {
            return Ok(Envelope::failure(HOTEL_EXISTS));
        }
        if let Some(id) = param.id {
            if hotel_repo.find_by_id(id).await?.is_some() {
                return Ok(Envelope::failure(HOTEL_ID_TAKEN));
            }
        }

        match hotel_repo.create(param).await {
            Ok(hotel) => Ok(Envelope::success(HOTEL_CREATED).with_id(hotel.id)),
            Err(err) if is_unique_violation(&err) => Ok(Envelope::failure(HOTEL_EXISTS)),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn get_all(&self) -> Result<Envelope<Vec<Hotel>>, AppError> {
        let hotels = HotelRepository::new(self.db).get_all().await?;

        Ok(Envelope::found(hotels))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Envelope<Hotel>, AppError> {
        match HotelRepository::new(self.db).find_by_id(id).await? {
            Some(hotel) => Ok(Envelope::found(hotel)),
            None => Ok(Envelope::failure(HOTEL_NOT_FOUND)),
        }
    }

    /// Overwrites the provided fields of a hotel.
    ///
    /// # Arguments
    /// - `id` - ID of the hotel to edit
    /// - `param` - Fields to overwrite, `None` fields are kept
    ///
    /// # Returns
    /// - `Ok(Envelope)` - `status: true` once updated; `status: false` when the hotel
    ///   does not exist or the new name belongs to another hotel
    /// - `Err(AppError)` - Database failure
    pub async fn update(&self, id: i32, param: UpdateHotelParam) -> Result<Envelope<()>, AppError> {
        let hotel_repo = HotelRepository::new(self.db);

        if let Some(name) = param.name.as_deref() {
            if let Some(other) = hotel_repo.find_by_name(name).await? {
                if other.id != id {
                    return Ok(Envelope::failure(HOTEL_EXISTS));
                }
            }
        }

        match hotel_repo.update(id, param).await {
            Ok(Some(_)) => Ok(Envelope::success(HOTEL_UPDATED)),
            Ok(None) => Ok(Envelope::failure(HOTEL_NOT_FOUND)),
            Err(err) if is_unique_violation(&err) => Ok(Envelope::failure(HOTEL_EXISTS)),
            Err(err) => Err(err.into()),
        }
    }

    /// Deletes a hotel. Unknown ids are reported as deleted.
    pub async fn delete(&self, id: i32) -> Result<Envelope<()>, AppError> {
        HotelRepository::new(self.db).delete(id).await?;

        Ok(Envelope::success(HOTEL_DELETED))
    }
}
