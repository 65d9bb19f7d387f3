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
        booking::{BookingDto, CreateBookingDto},
    },
    server::{
        controller::creation_status,
        error::AppError,
        model::booking::CreateBookingParam,
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Book a room.
///
/// The hotel is referenced by name only and is not checked against the hotel listings.
#[utoipa::path(
    post,
    path = "/bookings/addNewBooking",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Room booked", body = StatusDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_new_booking(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let envelope = BookingService::new(&state.db)
        .create(CreateBookingParam::from(payload))
        .await?;

    Ok((creation_status(&envelope), Json(envelope.into_status_dto())))
}

#[utoipa::path(
    get,
    path = "/bookings/getAllBookings",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "All bookings", body = EnvelopeDto<Vec<BookingDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_bookings(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let envelope = BookingService::new(&state.db).get_all().await?;

    let dto = envelope.into_dto(|bookings| {
        bookings
            .into_iter()
            .map(|booking| booking.into_dto())
            .collect::<Vec<_>>()
    });

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/bookings/getBookingById/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "The booking, or status false when unknown", body = EnvelopeDto<BookingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let envelope = BookingService::new(&state.db).get_by_id(id).await?;

    Ok((
        StatusCode::OK,
        Json(envelope.into_dto(|booking| booking.into_dto())),
    ))
}

/// Confirm a booking.
///
/// Confirming an already confirmed booking succeeds again.
#[utoipa::path(
    post,
    path = "/bookings/confirmBooking/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Confirmation outcome", body = StatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let envelope = BookingService::new(&state.db).confirm(id).await?;

    Ok((StatusCode::OK, Json(envelope.into_status_dto())))
}

#[utoipa::path(
    post,
    path = "/bookings/deleteBooking/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking deleted", body = StatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let envelope = BookingService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(envelope.into_status_dto())))
}
