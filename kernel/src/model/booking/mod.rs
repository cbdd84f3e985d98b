use chrono::{DateTime, NaiveDate, Utc};
use strum::{Display, EnumString};

use crate::model::id::BookingId;

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub room: String,
    pub date: NaiveDate,
    pub note: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Bookings start out pending and can be approved exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Approved,
}
