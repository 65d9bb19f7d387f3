//! Complaint data repository for database operations
//!
//! Provides the `ComplaintRepository` for the "contact us" submissions. A submission is
//! looked up by the combination of email, problem and description when checking for
//! duplicates.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::complaint::{Complaint, CreateComplaintParam};

/// Repository providing database operations for complaints.
pub struct ComplaintRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComplaintRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new, unresolved complaint
    ///
    /// # Returns
    /// - `Ok(Complaint)` - The stored complaint
    /// - `Err(DbErr)` - Database error during insert operation, including duplicate
    ///   submissions rejected by the unique index
    pub async fn create(&self, param: CreateComplaintParam) -> Result<Complaint, DbErr> {
        let entity = entity::complaint::ActiveModel {
            id: param.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            email: ActiveValue::Set(param.email),
            problem: ActiveValue::Set(param.problem),
            description: ActiveValue::Set(param.description),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            resolved: ActiveValue::Set(false),
        }
        .insert(self.db)
        .await?;

        Ok(Complaint::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Complaint>, DbErr> {
        let entity = entity::prelude::Complaint::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Complaint::from_entity))
    }

    /// Finds complaints matching a submission's email, problem & description
    ///
    /// # Returns
    /// - `Ok(Vec<Complaint>)` - Matching complaints, empty when the submission is new
    /// - `Err(DbErr)` - Database error during get operation
    pub async fn find_submission(
        &self,
        email: &str,
        problem: &str,
        description: &str,
    ) -> Result<Vec<Complaint>, DbErr> {
        let entities = entity::prelude::Complaint::find()
            .filter(entity::complaint::Column::Email.eq(email))
            .filter(entity::complaint::Column::Problem.eq(problem))
            .filter(entity::complaint::Column::Description.eq(description))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Complaint::from_entity).collect())
    }

    pub async fn get_all(&self) -> Result<Vec<Complaint>, DbErr> {
        let entities = entity::prelude::Complaint::find()
            .order_by_asc(entity::complaint::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Complaint::from_entity).collect())
    }

    /// Writes the resolved flag of a complaint
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows matched by the update
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn set_resolved(&self, id: i32, resolved: bool) -> Result<u64, DbErr> {
        let result = entity::prelude::Complaint::update_many()
            .col_expr(entity::complaint::Column::Resolved, Expr::value(resolved))
            .filter(entity::complaint::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Complaint::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
