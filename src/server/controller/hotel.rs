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
        hotel::{CreateHotelDto, EditHotelDto, HotelDto},
    },
    server::{
        controller::creation_status,
        error::AppError,
        model::hotel::{CreateHotelParam, UpdateHotelParam},
        service::hotel::HotelService,
        state::AppState,
    },
};

/// Tag for grouping hotel endpoints in OpenAPI documentation
pub static HOTEL_TAG: &str = "hotel";

/// List a new hotel.
///
/// Hotel names are unique; listing a taken name answers `200 OK` with
/// `status: false` and "Hotel already exists!".
///
/// # Returns
/// - `201 Created` - Hotel stored, envelope carries the new id
/// - `200 OK` - A hotel with that name already exists
/// - `400 Bad Request` - Invalid hotel data
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/hotels/addNewHotel",
    tag = HOTEL_TAG,
    request_body = CreateHotelDto,
    responses(
        (status = 201, description = "Hotel created", body = StatusDto),
        (status = 200, description = "Hotel already exists", body = StatusDto),
        (status = 400, description = "Invalid hotel data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_new_hotel(
    State(state): State<AppState>,
    Json(payload): Json<CreateHotelDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let envelope = HotelService::new(&state.db)
        .create(CreateHotelParam::from(payload))
        .await?;

    Ok((creation_status(&envelope), Json(envelope.into_status_dto())))
}

#[utoipa::path(
    get,
    path = "/hotels/getAllHotels",
    tag = HOTEL_TAG,
    responses(
        (status = 200, description = "All hotels", body = EnvelopeDto<Vec<HotelDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_hotels(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let envelope = HotelService::new(&state.db).get_all().await?;

    let dto = envelope.into_dto(|hotels| {
        hotels
            .into_iter()
            .map(|hotel| hotel.into_dto())
            .collect::<Vec<_>>()
    });

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/hotels/getHotelById/{id}",
    tag = HOTEL_TAG,
    params(
        ("id" = i32, Path, description = "Hotel ID")
    ),
    responses(
        (status = 200, description = "The hotel, or status false when unknown", body = EnvelopeDto<HotelDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotel_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let envelope = HotelService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(envelope.into_dto(|hotel| hotel.into_dto()))))
}

/// Edit a hotel.
///
/// Overwrites the fields present in the body and keeps the others.
///
/// # Returns
/// - `200 OK` - Envelope with `status: true` once updated, `status: false` when the
///   hotel does not exist or the new name is taken
/// - `400 Bad Request` - Invalid hotel data
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/hotels/editHotelById/{id}",
    tag = HOTEL_TAG,
    params(
        ("id" = i32, Path, description = "Hotel ID")
    ),
    request_body = EditHotelDto,
    responses(
        (status = 200, description = "Edit outcome", body = StatusDto),
        (status = 400, description = "Invalid hotel data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_hotel_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<EditHotelDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let envelope = HotelService::new(&state.db)
        .update(id, UpdateHotelParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(envelope.into_status_dto())))
}

/// Delete a hotel.
///
/// Served on both GET and POST, the browser client deletes through a plain link.
#[utoipa::path(
    method(get, post),
    path = "/hotels/deleteHotelById/{id}",
    tag = HOTEL_TAG,
    params(
        ("id" = i32, Path, description = "Hotel ID")
    ),
    responses(
        (status = 200, description = "Hotel deleted", body = StatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_hotel_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let envelope = HotelService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(envelope.into_status_dto())))
}
