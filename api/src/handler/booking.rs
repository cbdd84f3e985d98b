use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use kernel::model::{
    booking::event::{ApproveBooking, DeleteBooking},
    id::BookingId,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::booking::{ApprovedBookingResponse, BookingResponse, CreateBookingRequest};

const BOOKING_NOT_FOUND: &str = "Booking not found";

/// Logs a collaborator failure and replaces it with a 500 carrying `message`.
fn unexpected(context: &'static str, message: &'static str) -> impl FnOnce(AppError) -> AppError {
    move |e| {
        tracing::error!(
            error.cause_chain = ?e,
            error.message = %e,
            "{context}"
        );
        AppError::InternalError(message.to_string())
    }
}

#[cfg_attr(
    debug_assertions,
    utoipa::path(
        get,
        path = "/bookings",
        responses(
            (status = 200, description = "All bookings.", body = [BookingResponse]),
            (status = 500, description = "The bookings could not be retrieved.")
        )
    )
)]
pub async fn show_booking_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<BookingResponse>>> {
    registry
        .booking_repository()
        .find_all()
        .await
        .map(|v| v.into_iter().map(BookingResponse::from).collect::<Vec<_>>())
        .map(Json)
        .map_err(unexpected(
            "Error getting all bookings",
            "An error occurred while retrieving bookings",
        ))
}

#[cfg_attr(
    debug_assertions,
    utoipa::path(
        get,
        path = "/bookings/{id}",
        params(("id" = String, Path, description = "Booking id")),
        responses(
            (status = 200, description = "The booking.", body = BookingResponse),
            (status = 404, description = "No booking has the given id."),
            (status = 500, description = "The booking could not be retrieved.")
        )
    )
)]
pub async fn show_booking(
    State(registry): State<AppRegistry>,
    WithRejection(Path(booking_id), _): WithRejection<Path<BookingId>, AppError>,
) -> AppResult<Json<BookingResponse>> {
    registry
        .booking_repository()
        .find_by_id(booking_id)
        .await
        .map_err(unexpected(
            "Error getting booking by ID",
            "An error occurred while retrieving booking",
        ))
        .and_then(|b| match b {
            Some(b) => Ok(Json(BookingResponse::from(b))),
            None => Err(AppError::EntityNotFound(BOOKING_NOT_FOUND.into())),
        })
}

#[cfg_attr(
    debug_assertions,
    utoipa::path(
        delete,
        path = "/bookings/{id}",
        params(("id" = String, Path, description = "Booking id")),
        responses(
            (status = 200, description = "The deleted bookings.", body = [BookingResponse]),
            (status = 404, description = "Nothing was deleted."),
            (status = 500, description = "The booking could not be deleted.")
        )
    )
)]
pub async fn delete_booking(
    State(registry): State<AppRegistry>,
    WithRejection(Path(booking_id), _): WithRejection<Path<BookingId>, AppError>,
) -> AppResult<Json<Vec<BookingResponse>>> {
    let deleted = registry
        .booking_repository()
        .delete(DeleteBooking::new(booking_id))
        .await
        .map_err(unexpected(
            "Error deleting booking",
            "An error occurred while deleting booking",
        ))?;

    if deleted.is_empty() {
        return Err(AppError::EntityNotFound(BOOKING_NOT_FOUND.into()));
    }

    Ok(Json(
        deleted.into_iter().map(BookingResponse::from).collect(),
    ))
}

#[cfg_attr(
    debug_assertions,
    utoipa::path(
        post,
        path = "/bookings/{id}/approve",
        params(("id" = String, Path, description = "Booking id")),
        responses(
            (status = 200, description = "The booking was approved.", body = ApprovedBookingResponse),
            (status = 400, description = "The booking cannot be approved."),
            (status = 500, description = "The approval failed.")
        )
    )
)]
pub async fn approve_booking(
    State(registry): State<AppRegistry>,
    WithRejection(Path(booking_id), _): WithRejection<Path<BookingId>, AppError>,
) -> AppResult<Json<ApprovedBookingResponse>> {
    registry
        .booking_repository()
        .approve(ApproveBooking::new(booking_id))
        .await
        .map_err(|e| {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Error approving booking"
            );
            AppError::InternalError(e.to_string())
        })?
        .map(ApprovedBookingResponse::from)
        .map(Json)
        .ok_or_else(|| AppError::BadRequest("Cannot be approved".into()))
}

#[cfg_attr(
    debug_assertions,
    utoipa::path(
        post,
        path = "/bookings",
        request_body = CreateBookingRequest,
        responses(
            (status = 201, description = "The created booking.", body = BookingResponse),
            (status = 400, description = "The booking data was rejected.")
        )
    )
)]
pub async fn register_booking(
    State(registry): State<AppRegistry>,
    WithRejection(Json(req), _): WithRejection<Json<CreateBookingRequest>, AppError>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    registry
        .booking_repository()
        .create(req.into())
        .await
        .map(|b| (StatusCode::CREATED, Json(BookingResponse::from(b))))
        .map_err(|e| {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Error creating booking"
            );
            AppError::BadRequest(e.to_string())
        })
}
