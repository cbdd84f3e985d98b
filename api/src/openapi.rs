use utoipa::OpenApi;

use crate::{handler, model};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Booking Manager",
        description = "HTTP endpoints for listing, creating, approving and deleting bookings."
    ),
    paths(
        handler::health::health_check,
        handler::health::health_check_db,
        handler::booking::show_booking_list,
        handler::booking::show_booking,
        handler::booking::register_booking,
        handler::booking::delete_booking,
        handler::booking::approve_booking,
    ),
    components(schemas(
        model::booking::CreateBookingRequest,
        model::booking::BookingResponse,
        model::booking::BookingStatusName,
        model::booking::ApprovedBookingResponse,
    ))
)]
pub struct ApiDoc;
