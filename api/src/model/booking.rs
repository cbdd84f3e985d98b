use chrono::{DateTime, NaiveDate, Utc};
use kernel::model::booking::{event::CreateBooking, Booking, BookingStatus};
use serde::{Deserialize, Serialize};
#[cfg(debug_assertions)]
use utoipa::ToSchema;

#[derive(Debug, Deserialize)]
#[cfg_attr(debug_assertions, derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub room: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub note: Option<String>,
}

impl From<CreateBookingRequest> for CreateBooking {
    fn from(value: CreateBookingRequest) -> Self {
        let CreateBookingRequest { room, date, note } = value;
        CreateBooking::new(room, date, note)
    }
}

#[derive(Debug, Serialize)]
#[cfg_attr(debug_assertions, derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum BookingStatusName {
    Pending,
    Approved,
}

impl From<BookingStatus> for BookingStatusName {
    fn from(value: BookingStatus) -> Self {
        match value {
            BookingStatus::Pending => Self::Pending,
            BookingStatus::Approved => Self::Approved,
        }
    }
}

#[derive(Debug, Serialize)]
#[cfg_attr(debug_assertions, derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: String,
    pub room: String,
    pub date: NaiveDate,
    pub note: Option<String>,
    pub status: BookingStatusName,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            id,
            room,
            date,
            note,
            status,
            created_at,
        } = value;
        Self {
            id: id.into(),
            room,
            date,
            note,
            status: status.into(),
            created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[cfg_attr(debug_assertions, derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ApprovedBookingResponse {
    pub message: String,
    pub approved_booking: BookingResponse,
}

impl From<Booking> for ApprovedBookingResponse {
    fn from(value: Booking) -> Self {
        Self {
            message: "Booking approved!".into(),
            approved_booking: value.into(),
        }
    }
}
