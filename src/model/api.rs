use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned for infrastructure and validation failures.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Uniform response body of every endpoint.
///
/// `status` reports whether the operation succeeded under the business rules. A
/// `false` status is not an HTTP error: duplicates, unknown ids and wrong passwords
/// are all reported this way with a 200 response. Absent fields are omitted.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct EnvelopeDto<T> {
    pub status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

/// Envelope of operations that report an outcome without a result.
///
/// Serializes exactly like an `EnvelopeDto` whose `result` is absent.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct StatusDto {
    pub status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

/// Email & password pair used by the user and admin authentication endpoints.
///
/// Only presence is required; a malformed email or empty password simply fails to
/// match.
#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct CredentialsDto {
    pub email: String,
    pub password: String,
}
