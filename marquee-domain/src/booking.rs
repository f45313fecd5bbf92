use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{DomainError, DomainResult};

/// A confirmed reservation of seats for one screening of one movie.
///
/// Serialized field names match the wire contract the bookings view reads
/// (camelCase). Seat indices are zero-based; clients display them 1-based.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub movie_title: String,
    pub selected_date: String,
    pub selected_showtime: String,
    pub seats: Vec<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub user_id: Uuid,
    pub movie_title: String,
    pub selected_date: String,
    pub selected_showtime: String,
    pub seats: Vec<i32>,
}

impl CreateBookingRequest {
    /// Seat indices must be present and non-negative. Seat uniqueness across
    /// bookings for the same showtime is not checked here.
    pub fn validate(&self) -> DomainResult<()> {
        if self.seats.is_empty() {
            return Err(DomainError::ValidationError(
                "A booking must reserve at least one seat".to_string(),
            ));
        }
        if let Some(seat) = self.seats.iter().find(|&&s| s < 0) {
            return Err(DomainError::ValidationError(format!(
                "Seat index {} is negative",
                seat
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(seats: Vec<i32>) -> CreateBookingRequest {
        CreateBookingRequest {
            user_id: Uuid::new_v4(),
            movie_title: "Blade Runner".to_string(),
            selected_date: "2026-08-14".to_string(),
            selected_showtime: "19:30".to_string(),
            seats,
        }
    }

    #[test]
    fn test_validate_accepts_zero_based_seats() {
        assert!(request(vec![0, 4, 5]).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_seats() {
        let result = request(vec![]).validate();
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_negative_seat() {
        let result = request(vec![2, -1]).validate();
        assert!(result.is_err());
    }

    #[test]
    fn test_booking_serializes_camel_case() {
        let booking = Booking {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            movie_title: "Blade Runner".to_string(),
            selected_date: "2026-08-14".to_string(),
            selected_showtime: "19:30".to_string(),
            seats: vec![0, 1],
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&booking).unwrap();
        assert!(json.get("movieTitle").is_some());
        assert!(json.get("selectedDate").is_some());
        assert!(json.get("selectedShowtime").is_some());
        assert!(json.get("userId").is_some());
    }
}
