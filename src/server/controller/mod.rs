//! HTTP request handlers.
//!
//! Controllers validate request bodies, hand them to a service as parameter models and
//! relay the returned envelope as JSON. They hold no business logic: the HTTP status
//! only distinguishes a successful creation (201) from everything else (200), while
//! infrastructure failures surface through `AppError`.

pub mod admin;
pub mod booking;
pub mod complaint;
pub mod hotel;
pub mod user;

#[cfg(test)]
mod test;

use axum::http::StatusCode;

use crate::server::model::envelope::Envelope;

/// Status code for the answer of a create endpoint.
///
/// # Returns
/// - `201 Created` - The record was stored
/// - `200 OK` - The envelope reports a business-rule rejection
pub fn creation_status<T>(envelope: &Envelope<T>) -> StatusCode {
    if envelope.status {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    }
}
