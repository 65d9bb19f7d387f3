use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::{CredentialsDto, EnvelopeDto, ErrorDto, StatusDto},
        user::{CreateUserDto, UserDto},
    },
    server::{
        controller::creation_status,
        error::AppError,
        model::{credentials::CredentialsParam, user::CreateUserParam},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new customer account.
///
/// The password is hashed before storage. Registering an email that is already in use
/// answers `200 OK` with `status: false`.
///
/// # Returns
/// - `201 Created` - Account stored, envelope carries the new id
/// - `200 OK` - Email already registered
/// - `400 Bad Request` - Invalid account data
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/users/addUser",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = StatusDto),
        (status = 200, description = "User already exists", body = StatusDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let envelope = UserService::new(&state.db, &state.passwords)
        .create(CreateUserParam::from(payload))
        .await?;

    Ok((creation_status(&envelope), Json(envelope.into_status_dto())))
}

/// Check a customer's email & password.
///
/// No session or token is issued; the envelope only reports whether the credentials
/// match.
#[utoipa::path(
    post,
    path = "/users/authenticateUser",
    tag = USER_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Verification outcome", body = StatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn authenticate_user(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsDto>,
) -> Result<impl IntoResponse, AppError> {
    let envelope = UserService::new(&state.db, &state.passwords)
        .authenticate(CredentialsParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(envelope.into_status_dto())))
}

#[utoipa::path(
    get,
    path = "/users/getAllUsers",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = EnvelopeDto<Vec<UserDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let envelope = UserService::new(&state.db, &state.passwords)
        .get_all()
        .await?;

    let dto = envelope.into_dto(|users| users.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>());

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/users/getUserById/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user, or status false when unknown", body = EnvelopeDto<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let envelope = UserService::new(&state.db, &state.passwords)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(envelope.into_dto(|user| user.into_dto()))))
}

#[utoipa::path(
    post,
    path = "/users/deleteUser/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = StatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let envelope = UserService::new(&state.db, &state.passwords)
        .delete(id)
        .await?;

    Ok((StatusCode::OK, Json(envelope.into_status_dto())))
}
