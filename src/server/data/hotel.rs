//! Hotel data repository for database operations
//!
//! Provides the `HotelRepository` for managing hotels in the database. Provides methods
//! to create, get, update, and delete hotels as well as handles the conversion of
//! database entity models into domain models for usage within services & controllers.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::hotel::{CreateHotelParam, Hotel, UpdateHotelParam};

/// Repository providing database operations for hotel management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting hotel records.
pub struct HotelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelRepository<'a> {
    /// Creates a new HotelRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `HotelRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new hotel
    ///
    /// # Arguments
    /// - `param` - Create parameters containing the hotel data
    ///
    /// # Returns
    /// - `Ok(Hotel)` - The created hotel as a domain model
    /// - `Err(DbErr)` - Database error during insert operation, including duplicate names
    pub async fn create(&self, param: CreateHotelParam) -> Result<Hotel, DbErr> {
        let entity = entity::hotel::ActiveModel {
            id: param.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            name: ActiveValue::Set(param.name),
            country: ActiveValue::Set(param.country),
            city: ActiveValue::Set(param.city),
            number_of_rooms: ActiveValue::Set(param.number_of_rooms),
            number_of_available_rooms: ActiveValue::Set(param.number_of_available_rooms),
            rating: ActiveValue::Set(param.rating),
            image: ActiveValue::Set(param.image),
        }
        .insert(self.db)
        .await?;

        Ok(Hotel::from_entity(entity))
    }

    /// Finds a hotel by ID
    ///
    /// # Arguments
    /// - `id` - ID of the hotel to retrieve
    ///
    /// # Returns
    /// - `Ok(Some(Hotel))` - The requested hotel if found
    /// - `Ok(None)` - The requested hotel does not exist
    /// - `Err(DbErr)` - Database error during get operation
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Hotel>, DbErr> {
        let entity = entity::prelude::Hotel::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Hotel::from_entity))
    }

    /// Finds a hotel by its exact name
    ///
    /// # Arguments
    /// - `name` - Name of the hotel
    ///
    /// # Returns
    /// - `Ok(Some(Hotel))` - A hotel with that name exists
    /// - `Ok(None)` - No hotel uses that name
    /// - `Err(DbErr)` - Database error during get operation
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Hotel>, DbErr> {
        let entity = entity::prelude::Hotel::find()
            .filter(entity::hotel::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Hotel::from_entity))
    }

    /// Gets all hotels ordered by ID
    ///
    /// # Returns
    /// - `Ok(Vec<Hotel>)` - Every stored hotel
    /// - `Err(DbErr)` - Database error during get operation
    pub async fn get_all(&self) -> Result<Vec<Hotel>, DbErr> {
        let entities = entity::prelude::Hotel::find()
            .order_by_asc(entity::hotel::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Hotel::from_entity).collect())
    }

    /// Updates the hotel based upon provided ID & update parameters
    ///
    /// Only the fields present in `param` are written.
    ///
    /// # Arguments
    /// - `id` - ID of the hotel to update
    /// - `param` - Update parameters of the hotel fields to modify
    ///
    /// # Returns
    /// - `Ok(Some(Hotel))` - The updated hotel
    /// - `Ok(None)` - No hotel exists with the provided ID
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn update(&self, id: i32, param: UpdateHotelParam) -> Result<Option<Hotel>, DbErr> {
        let Some(existing) = entity::prelude::Hotel::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.clone().into_active_model();

        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(country) = param.country {
            active.country = ActiveValue::Set(country);
        }
        if let Some(city) = param.city {
            active.city = ActiveValue::Set(city);
        }
        if let Some(number_of_rooms) = param.number_of_rooms {
            active.number_of_rooms = ActiveValue::Set(number_of_rooms);
        }
        if let Some(number_of_available_rooms) = param.number_of_available_rooms {
            active.number_of_available_rooms = ActiveValue::Set(number_of_available_rooms);
        }
        if let Some(rating) = param.rating {
            active.rating = ActiveValue::Set(rating);
        }
        if let Some(image) = param.image {
            active.image = ActiveValue::Set(image);
        }

        // Nothing changed, an UPDATE without columns would fail
        if !active.is_changed() {
            return Ok(Some(Hotel::from_entity(existing)));
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Hotel::from_entity(updated)))
    }

    /// Deletes hotel of the provided ID
    ///
    /// # Arguments
    /// - `id` - The ID of the hotel to delete
    ///
    /// # Returns
    /// - `Ok(())` - The delete statement ran, whether or not a row matched
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Hotel::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
