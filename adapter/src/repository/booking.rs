use async_trait::async_trait;
use derive_new::new;
use garde::Validate;
use kernel::{
    model::{
        booking::{
            event::{ApproveBooking, CreateBooking, DeleteBooking},
            Booking, BookingStatus,
        },
        id::BookingId,
    },
    repository::booking::BookingRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{model::booking::BookingRow, ConnectionPool};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        event.validate()?;

        let booking_id = BookingId::new();
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
                INSERT INTO bookings (booking_id, room, booked_on, note, status)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING booking_id, room, booked_on, note, status, created_at;
            "#,
        )
        .bind(&booking_id)
        .bind(&event.room)
        .bind(event.date)
        .bind(&event.note)
        .bind(BookingStatus::Pending.to_string())
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        tracing::debug!(booking_id = %booking_id, "Booking created");

        Booking::try_from(row)
    }

    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, BookingRow>(
            r#"
                SELECT booking_id, room, booked_on, note, status, created_at
                FROM bookings
                ORDER BY created_at ASC;
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(Booking::try_from)
        .collect()
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, BookingRow>(
            r#"
                SELECT booking_id, room, booked_on, note, status, created_at
                FROM bookings
                WHERE booking_id = $1;
            "#,
        )
        .bind(&booking_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(Booking::try_from)
        .transpose()
    }

    async fn delete(&self, event: DeleteBooking) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, BookingRow>(
            r#"
                DELETE FROM bookings
                WHERE booking_id = $1
                RETURNING booking_id, room, booked_on, note, status, created_at;
            "#,
        )
        .bind(&event.booking_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(Booking::try_from)
        .collect()
    }

    async fn approve(&self, event: ApproveBooking) -> AppResult<Option<Booking>> {
        let mut tx = self.db.begin().await?;

        let status: Option<String> = sqlx::query_scalar(
            r#"
                SELECT status FROM bookings
                WHERE booking_id = $1
                FOR UPDATE;
            "#,
        )
        .bind(&event.booking_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        // Unknown ids and already approved bookings are both refused.
        let parsed = status.as_deref().map(str::parse::<BookingStatus>);
        match parsed {
            Some(Ok(BookingStatus::Pending)) => {}
            Some(Ok(BookingStatus::Approved)) | None => return Ok(None),
            Some(Err(_)) => {
                return Err(AppError::ConversionEntityError(format!(
                    "Unknown booking status: booking_id={}, status={}",
                    event.booking_id,
                    status.unwrap_or_default()
                )))
            }
        }

        let row = sqlx::query_as::<_, BookingRow>(
            r#"
                UPDATE bookings
                SET status = $2
                WHERE booking_id = $1
                RETURNING booking_id, room, booked_on, note, status, created_at;
            "#,
        )
        .bind(&event.booking_id)
        .bind(BookingStatus::Approved.to_string())
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| {
            AppError::NoRowsAffectedError(format!(
                "No booking has been approved: booking_id={}",
                event.booking_id
            ))
        })?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Booking::try_from(row).map(Some)
    }
}
