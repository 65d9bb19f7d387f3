//! Hotel factory for creating test hotel listings.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test hotels with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::hotel::HotelFactory;
///
/// let hotel = HotelFactory::new(&db)
///     .name("Hotel California")
///     .rating(4.5)
///     .build()
///     .await?;
/// ```
pub struct HotelFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    country: String,
    city: String,
    number_of_rooms: i32,
    number_of_available_rooms: i32,
    rating: f64,
    image: String,
}

impl<'a> HotelFactory<'a> {
    /// Creates a new HotelFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Hotel {id}"` where id is auto-incremented
    /// - country / city: `"USA"` / `"Los Angeles"`
    /// - rooms: 50 total, 10 available
    /// - rating: 4.0
    /// - image: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Hotel {}", id),
            country: "USA".to_string(),
            city: "Los Angeles".to_string(),
            number_of_rooms: 50,
            number_of_available_rooms: 10,
            rating: 4.0,
            image: String::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Sets the total and available room counts.
    pub fn rooms(mut self, total: i32, available: i32) -> Self {
        self.number_of_rooms = total;
        self.number_of_available_rooms = available;
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Builds and inserts the hotel entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::hotel::Model)` - Created hotel entity
    /// - `Err(DbErr)` - Database error during insert, including a taken name
    pub async fn build(self) -> Result<entity::hotel::Model, DbErr> {
        entity::hotel::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            country: ActiveValue::Set(self.country),
            city: ActiveValue::Set(self.city),
            number_of_rooms: ActiveValue::Set(self.number_of_rooms),
            number_of_available_rooms: ActiveValue::Set(self.number_of_available_rooms),
            rating: ActiveValue::Set(self.rating),
            image: ActiveValue::Set(self.image),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hotel with default values.
///
/// Shorthand for `HotelFactory::new(db).build().await`.
pub async fn create_hotel(db: &DatabaseConnection) -> Result<entity::hotel::Model, DbErr> {
    HotelFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_hotel_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Hotel).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let hotel = create_hotel(db).await?;

        assert!(hotel.name.starts_with("Hotel "));
        assert_eq!(hotel.number_of_rooms, 50);
        assert_eq!(hotel.number_of_available_rooms, 10);

        Ok(())
    }

    #[tokio::test]
    async fn creates_hotel_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Hotel).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let hotel = HotelFactory::new(db)
            .name("Hotel California")
            .rooms(120, 45)
            .rating(4.5)
            .build()
            .await?;

        assert_eq!(hotel.name, "Hotel California");
        assert_eq!(hotel.number_of_rooms, 120);
        assert_eq!(hotel.number_of_available_rooms, 45);
        assert_eq!(hotel.rating, 4.5);

        Ok(())
    }
}
