//! User domain models and parameters.
//!
//! Provides the domain model for customer accounts along with the parameters used to
//! register and authenticate them.

use crate::model::user::{CreateUserDto, UserDto};

/// Customer account.
///
/// `password` holds the Argon2 PHC string, never the plaintext, and is not exposed
/// through the DTO.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            password: entity.password,
            first_name: entity.first_name,
            last_name: entity.last_name,
        }
    }

    /// Converts the user domain model to a DTO for API responses, dropping the hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

/// Parameters for registering a new user.
///
/// `password` is plaintext when built from a request and replaced by its hash in the
/// service before reaching the repository.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub id: Option<i32>,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<CreateUserDto> for CreateUserParam {
    fn from(dto: CreateUserDto) -> Self {
        Self {
            id: dto.id,
            email: dto.email,
            password: dto.password,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}
