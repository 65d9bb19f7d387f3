use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::{EnvelopeDto, ErrorDto, StatusDto},
        complaint::{ComplaintDto, CreateComplaintDto},
    },
    server::{
        controller::creation_status,
        error::AppError,
        model::complaint::CreateComplaintParam,
        service::complaint::ComplaintService,
        state::AppState,
    },
};

/// Tag for grouping "contact us" endpoints in OpenAPI documentation
pub static COMPLAINT_TAG: &str = "contact_us";

/// Submit a complaint through the "contact us" form.
///
/// # Returns
/// - `201 Created` - Complaint stored, envelope carries the new id
/// - `200 OK` - The same email, problem & description were already submitted
/// - `400 Bad Request` - Invalid complaint data
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/contactUs/addNewComplaint",
    tag = COMPLAINT_TAG,
    request_body = CreateComplaintDto,
    responses(
        (status = 201, description = "Complaint submitted", body = StatusDto),
        (status = 200, description = "Complaint already submitted", body = StatusDto),
        (status = 400, description = "Invalid complaint data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_new_complaint(
    State(state): State<AppState>,
    Json(payload): Json<CreateComplaintDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let envelope = ComplaintService::new(&state.db)
        .create(CreateComplaintParam::from(payload))
        .await?;

    Ok((creation_status(&envelope), Json(envelope.into_status_dto())))
}

#[utoipa::path(
    get,
    path = "/contactUs/getAllComplaints",
    tag = COMPLAINT_TAG,
    responses(
        (status = 200, description = "All complaints", body = EnvelopeDto<Vec<ComplaintDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_complaints(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let envelope = ComplaintService::new(&state.db).get_all().await?;

    let dto = envelope.into_dto(|complaints| {
        complaints
            .into_iter()
            .map(|complaint| complaint.into_dto())
            .collect::<Vec<_>>()
    });

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/contactUs/getComplaintById/{id}",
    tag = COMPLAINT_TAG,
    params(
        ("id" = i32, Path, description = "Complaint ID")
    ),
    responses(
        (status = 200, description = "The complaint, or status false when unknown", body = EnvelopeDto<ComplaintDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_complaint_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let envelope = ComplaintService::new(&state.db).get_by_id(id).await?;

    Ok((
        StatusCode::OK,
        Json(envelope.into_dto(|complaint| complaint.into_dto())),
    ))
}

#[utoipa::path(
    post,
    path = "/contactUs/resolveComplaint/{id}",
    tag = COMPLAINT_TAG,
    params(
        ("id" = i32, Path, description = "Complaint ID")
    ),
    responses(
        (status = 200, description = "Resolution outcome", body = StatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resolve_complaint(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let envelope = ComplaintService::new(&state.db)
        .mark_as_resolved(id)
        .await?;

    Ok((StatusCode::OK, Json(envelope.into_status_dto())))
}

#[utoipa::path(
    post,
    path = "/contactUs/deleteComplaint/{id}",
    tag = COMPLAINT_TAG,
    params(
        ("id" = i32, Path, description = "Complaint ID")
    ),
    responses(
        (status = 200, description = "Complaint deleted", body = StatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_complaint(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let envelope = ComplaintService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(envelope.into_status_dto())))
}
