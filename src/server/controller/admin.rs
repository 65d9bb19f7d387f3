use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        admin::{AdminDto, CreateAdminDto},
        api::{CredentialsDto, EnvelopeDto, ErrorDto, StatusDto},
    },
    server::{
        controller::creation_status,
        error::AppError,
        model::{admin::CreateAdminParam, credentials::CredentialsParam},
        service::admin::AdminService,
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

#[utoipa::path(
    post,
    path = "/admin/addAdmin",
    tag = ADMIN_TAG,
    request_body = CreateAdminDto,
    responses(
        (status = 201, description = "Admin created", body = StatusDto),
        (status = 200, description = "Admin already exists", body = StatusDto),
        (status = 400, description = "Invalid admin data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_admin(
    State(state): State<AppState>,
    Json(payload): Json<CreateAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let envelope = AdminService::new(&state.db, &state.passwords)
        .create(CreateAdminParam::from(payload))
        .await?;

    Ok((creation_status(&envelope), Json(envelope.into_status_dto())))
}

#[utoipa::path(
    post,
    path = "/admin/authenticateAdmin",
    tag = ADMIN_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Verification outcome", body = StatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn authenticate_admin(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsDto>,
) -> Result<impl IntoResponse, AppError> {
    let envelope = AdminService::new(&state.db, &state.passwords)
        .authenticate(CredentialsParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(envelope.into_status_dto())))
}

#[utoipa::path(
    get,
    path = "/admin/getAllAdmins",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All admins", body = EnvelopeDto<Vec<AdminDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_admins(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let envelope = AdminService::new(&state.db, &state.passwords)
        .get_all()
        .await?;

    let dto = envelope.into_dto(|admins| admins.into_iter().map(|a| a.into_dto()).collect::<Vec<_>>());

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/admin/getAdminById/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Admin ID")
    ),
    responses(
        (status = 200, description = "The admin, or status false when unknown", body = EnvelopeDto<AdminDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let envelope = AdminService::new(&state.db, &state.passwords)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(envelope.into_dto(|admin| admin.into_dto()))))
}

#[utoipa::path(
    post,
    path = "/admin/deleteAdmin/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Admin ID")
    ),
    responses(
        (status = 200, description = "Admin deleted", body = StatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_admin(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let envelope = AdminService::new(&state.db, &state.passwords)
        .delete(id)
        .await?;

    Ok((StatusCode::OK, Json(envelope.into_status_dto())))
}
