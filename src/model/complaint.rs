use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintDto {
    pub id: i32,
    pub email: String,
    pub problem: String,
    pub description: String,
    pub first_name: String,
    pub last_name: String,
    pub resolved: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateComplaintDto {
    /// Optional client-chosen id, generated by the store when omitted.
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub problem: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
}
