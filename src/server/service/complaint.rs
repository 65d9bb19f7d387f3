//! Complaint service for business logic.
//!
//! Handles "contact us" submissions. The same email, problem & description cannot be
//! submitted twice; a complaint can be marked resolved any number of times.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::complaint::ComplaintRepository,
    error::AppError,
    model::{
        complaint::{Complaint, CreateComplaintParam},
        envelope::Envelope,
    },
    util::db::is_unique_violation,
};

pub const COMPLAINT_SUBMITTED: &str = "Response submitted successfully!";
pub const COMPLAINT_EXISTS: &str = "This response is already submitted!";
pub const COMPLAINT_ID_TAKEN: &str = "Complaint id is already taken!";
pub const COMPLAINT_NOT_FOUND: &str = "Complaint not found!";
pub const COMPLAINT_RESOLVED: &str = "Complaint marked as resolved!";
pub const COMPLAINT_DELETED: &str = "Complaint deleted successfully!";

pub struct ComplaintService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComplaintService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a complaint unless the identical submission already exists.
    ///
    /// # Returns
    /// - `Ok(Envelope)` - `status: true` with the new id, or `status: false` for a
    ///   repeated submission
    /// - `Err(AppError)` - Database failure
    pub async fn create(&self, param: CreateComplaintParam) -> Result<Envelope<()>, AppError> {
        let complaint_repo = ComplaintRepository::new(self.db);

        let existing = complaint_repo
            .find_submission(&param.email, &param.problem, &param.description)
            .await?;
        if !existing.is_empty() {
            return Ok(Envelope::failure(COMPLAINT_EXISTS));
        }
        if let Some(id) = param.id {
            if complaint_repo.find_by_id(id).await?.is_some() {
                return Ok(Envelope::failure(COMPLAINT_ID_TAKEN));
            }
        }

        match complaint_repo.create(param).await {
            Ok(complaint) => Ok(Envelope::success(COMPLAINT_SUBMITTED).with_id(complaint.id)),
            Err(err) if is_unique_violation(&err) => Ok(Envelope::failure(COMPLAINT_EXISTS)),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn get_all(&self) -> Result<Envelope<Vec<Complaint>>, AppError> {
        let complaints = ComplaintRepository::new(self.db).get_all().await?;

        Ok(Envelope::found(complaints))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Envelope<Complaint>, AppError> {
        match ComplaintRepository::new(self.db).find_by_id(id).await? {
            Some(complaint) => Ok(Envelope::found(complaint)),
            None => Ok(Envelope::failure(COMPLAINT_NOT_FOUND)),
        }
    }

    /// Marks a complaint as resolved, repeating the write if already resolved.
    pub async fn mark_as_resolved(&self, id: i32) -> Result<Envelope<()>, AppError> {
        let complaint_repo = ComplaintRepository::new(self.db);

        if complaint_repo.find_by_id(id).await?.is_none() {
            return Ok(Envelope::failure(COMPLAINT_NOT_FOUND));
        }

        complaint_repo.set_resolved(id, true).await?;

        Ok(Envelope::success(COMPLAINT_RESOLVED))
    }

    pub async fn delete(&self, id: i32) -> Result<Envelope<()>, AppError> {
        ComplaintRepository::new(self.db).delete(id).await?;

        Ok(Envelope::success(COMPLAINT_DELETED))
    }
}
