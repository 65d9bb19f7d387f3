//! Complaint factory for creating test "contact us" submissions.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test complaints with customizable fields.
///
/// Complaints start unresolved unless `resolved(true)` is set.
pub struct ComplaintFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    problem: String,
    description: String,
    first_name: String,
    last_name: String,
    resolved: bool,
}

impl<'a> ComplaintFactory<'a> {
    /// Creates a new ComplaintFactory with default values.
    ///
    /// The email is unique per factory so default complaints never collide.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("guest{}@example.com", id),
            problem: "Room service".to_string(),
            description: "Breakfast arrived cold".to_string(),
            first_name: "Guest".to_string(),
            last_name: id.to_string(),
            resolved: false,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn problem(mut self, problem: impl Into<String>) -> Self {
        self.problem = problem.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn resolved(mut self, resolved: bool) -> Self {
        self.resolved = resolved;
        self
    }

    /// Builds and inserts the complaint entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::complaint::Model)` - Created complaint entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::complaint::Model, DbErr> {
        entity::complaint::ActiveModel {
            id: ActiveValue::NotSet,
            email: ActiveValue::Set(self.email),
            problem: ActiveValue::Set(self.problem),
            description: ActiveValue::Set(self.description),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            resolved: ActiveValue::Set(self.resolved),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unresolved complaint with default values.
pub async fn create_complaint(db: &DatabaseConnection) -> Result<entity::complaint::Model, DbErr> {
    ComplaintFactory::new(db).build().await
}
