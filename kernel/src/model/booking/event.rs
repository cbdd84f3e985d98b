use chrono::NaiveDate;
use derive_new::new;
use garde::Validate;

use crate::model::id::BookingId;

#[derive(Debug, Clone, new, Validate)]
pub struct CreateBooking {
    #[garde(length(chars, min = 1, max = 64))]
    pub room: String,
    #[garde(skip)]
    pub date: NaiveDate,
    #[garde(length(chars, max = 500))]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DeleteBooking {
    pub booking_id: BookingId,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ApproveBooking {
    pub booking_id: BookingId,
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn accepts_minimal_booking() -> Result<()> {
        CreateBooking::new("A1".into(), date(), None).validate()?;
        Ok(())
    }

    #[test]
    fn rejects_empty_room() {
        let report = CreateBooking::new(String::new(), date(), None)
            .validate()
            .unwrap_err();
        assert!(report.to_string().contains("room"));
    }

    #[test]
    fn counts_room_and_note_length_in_chars() -> Result<()> {
        let room = "é".repeat(64);
        let note = "ü".repeat(500);
        CreateBooking::new(room, date(), Some(note)).validate()?;

        let report = CreateBooking::new("é".repeat(65), date(), None)
            .validate()
            .unwrap_err();
        assert!(report.to_string().contains("room"));
        Ok(())
    }

    #[test]
    fn rejects_overlong_note() {
        let note = "x".repeat(501);
        let report = CreateBooking::new("A1".into(), date(), Some(note))
            .validate()
            .unwrap_err();
        assert!(report.to_string().contains("note"));
    }
}
