//! Domain & parameter models for "contact us" complaints

use crate::model::complaint::{ComplaintDto, CreateComplaintDto};

/// A customer complaint. The email, problem & description together identify a
/// submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Complaint {
    pub id: i32,
    pub email: String,
    pub problem: String,
    pub description: String,
    pub first_name: String,
    pub last_name: String,
    pub resolved: bool,
}

impl Complaint {
    pub fn from_entity(entity: entity::complaint::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            problem: entity.problem,
            description: entity.description,
            first_name: entity.first_name,
            last_name: entity.last_name,
            resolved: entity.resolved,
        }
    }

    pub fn into_dto(self) -> ComplaintDto {
        ComplaintDto {
            id: self.id,
            email: self.email,
            problem: self.problem,
            description: self.description,
            first_name: self.first_name,
            last_name: self.last_name,
            resolved: self.resolved,
        }
    }
}

/// Parameters for submitting a complaint. New complaints always start unresolved.
#[derive(Debug, Clone)]
pub struct CreateComplaintParam {
    pub id: Option<i32>,
    pub email: String,
    pub problem: String,
    pub description: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<CreateComplaintDto> for CreateComplaintParam {
    fn from(dto: CreateComplaintDto) -> Self {
        Self {
            id: dto.id,
            email: dto.email,
            problem: dto.problem,
            description: dto.description,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}
