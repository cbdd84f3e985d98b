use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    booking::{
        event::{ApproveBooking, CreateBooking, DeleteBooking},
        Booking,
    },
    id::BookingId,
};

/// Business logic and persistence behind the booking endpoints.
#[mockall::automock]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Validates and stores a new pending booking.
    async fn create(&self, event: CreateBooking) -> AppResult<Booking>;
    async fn find_all(&self) -> AppResult<Vec<Booking>>;
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;
    /// Returns the deleted bookings; empty when nothing matched.
    async fn delete(&self, event: DeleteBooking) -> AppResult<Vec<Booking>>;
    /// Returns `None` when the booking cannot be approved.
    async fn approve(&self, event: ApproveBooking) -> AppResult<Option<Booking>>;
}
