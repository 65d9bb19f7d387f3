use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{admin, booking, complaint, hotel, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Hotel Booking API"),
    tags(
        (name = "user", description = "Customer accounts"),
        (name = "admin", description = "Administrator accounts"),
        (name = "hotel", description = "Hotel listings"),
        (name = "booking", description = "Room bookings"),
        (name = "contact_us", description = "Contact us form"),
    )
)]
struct ApiDoc;

/// Builds every API route plus the Swagger UI served at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(user::add_user))
        .routes(routes!(user::authenticate_user))
        .routes(routes!(user::get_all_users))
        .routes(routes!(user::get_user_by_id))
        .routes(routes!(user::delete_user))
        .routes(routes!(admin::add_admin))
        .routes(routes!(admin::authenticate_admin))
        .routes(routes!(admin::get_all_admins))
        .routes(routes!(admin::get_admin_by_id))
        .routes(routes!(admin::delete_admin))
        .routes(routes!(hotel::add_new_hotel))
        .routes(routes!(hotel::get_all_hotels))
        .routes(routes!(hotel::get_hotel_by_id))
        .routes(routes!(hotel::edit_hotel_by_id))
        .routes(routes!(hotel::delete_hotel_by_id))
        .routes(routes!(booking::add_new_booking))
        .routes(routes!(booking::get_all_bookings))
        .routes(routes!(booking::get_booking_by_id))
        .routes(routes!(booking::confirm_booking))
        .routes(routes!(booking::delete_booking))
        .routes(routes!(complaint::add_new_complaint))
        .routes(routes!(complaint::get_all_complaints))
        .routes(routes!(complaint::get_complaint_by_id))
        .routes(routes!(complaint::resolve_complaint))
        .routes(routes!(complaint::delete_complaint))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
