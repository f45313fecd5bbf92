use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A movie on the programme, with the dates and time slots it screens.
///
/// Show dates and showtimes are display strings; a booking records the pair
/// the customer picked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub genre: String,
    pub duration_minutes: i32,
    pub poster_url: Option<String>,
    pub show_dates: Vec<String>,
    pub showtimes: Vec<String>,
    pub created_at: DateTime<Utc>,
}
