//! Admin domain models and parameters.

use crate::model::admin::{AdminDto, CreateAdminDto};

/// Back-office account, stored separately from customer accounts.
#[derive(Debug, Clone, PartialEq)]
pub struct Admin {
    pub id: i32,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl Admin {
    pub fn from_entity(entity: entity::admin::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            password: entity.password,
            first_name: entity.first_name,
            last_name: entity.last_name,
        }
    }

    pub fn into_dto(self) -> AdminDto {
        AdminDto {
            id: self.id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

/// Parameters for registering a new admin.
#[derive(Debug, Clone)]
pub struct CreateAdminParam {
    pub id: Option<i32>,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<CreateAdminDto> for CreateAdminParam {
    fn from(dto: CreateAdminDto) -> Self {
        Self {
            id: dto.id,
            email: dto.email,
            password: dto.password,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}
