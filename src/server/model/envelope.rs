//! Outcome of a service operation.
//!
//! Every service method answers with an `Envelope` rather than an error when a business
//! rule rejects the request. Only infrastructure failures travel as `AppError`.

use crate::model::api::{EnvelopeDto, StatusDto};

/// Status, optional message, optional result & optional id of an operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    /// Whether the operation was accepted under the business rules
    pub status: bool,
    /// Human readable outcome
    pub message: Option<String>,
    /// Payload of read operations
    pub result: Option<T>,
    /// Id of the record created by the operation
    pub id: Option<i32>,
}

impl<T> Envelope<T> {
    /// Successful outcome carrying only a message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: Some(message.into()),
            result: None,
            id: None,
        }
    }

    /// Rejected outcome carrying the reason.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: Some(message.into()),
            result: None,
            id: None,
        }
    }

    /// Successful outcome carrying a result without a message.
    pub fn found(result: T) -> Self {
        Self {
            status: true,
            message: None,
            result: Some(result),
            id: None,
        }
    }

    /// Attaches the id of the created record.
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    /// Converts the envelope into its DTO, mapping the result with `f`.
    ///
    /// # Arguments
    /// - `f` - Conversion applied to the result when present
    ///
    /// # Returns
    /// - `EnvelopeDto<U>` - The serializable envelope
    pub fn into_dto<U>(self, f: impl FnOnce(T) -> U) -> EnvelopeDto<U> {
        EnvelopeDto {
            status: self.status,
            message: self.message,
            result: self.result.map(f),
            id: self.id,
        }
    }
}

impl Envelope<()> {
    /// Converts a result-less envelope into its DTO.
    pub fn into_status_dto(self) -> StatusDto {
        StatusDto {
            status: self.status,
            message: self.message,
            id: self.id,
        }
    }
}
