use chrono::{DateTime, NaiveDate, Utc};
use kernel::model::{
    booking::{Booking, BookingStatus},
    id::BookingId,
};
use shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub room: String,
    pub booked_on: NaiveDate,
    pub note: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        let BookingRow {
            booking_id,
            room,
            booked_on,
            note,
            status,
            created_at,
        } = row;

        let status = status.parse::<BookingStatus>().map_err(|_| {
            AppError::ConversionEntityError(format!(
                "Unknown booking status: booking_id={booking_id}, status={status}"
            ))
        })?;

        Ok(Booking {
            id: booking_id,
            room,
            date: booked_on,
            note,
            status,
            created_at,
        })
    }
}
