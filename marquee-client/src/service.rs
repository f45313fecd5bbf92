use async_trait::async_trait;
use serde_json::Value;

/// Failures talking to the booking service. Both collapse to the same
/// user-facing message in the view; the distinction is kept for logs.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request to booking service failed: {0}")]
    Transport(String),
    #[error("booking service returned an unusable payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// The slice of the booking service the bookings view consumes.
#[async_trait]
pub trait BookingService: Send + Sync {
    /// Raw JSON payload of the user's bookings. The caller validates the
    /// shape; the service only promises valid JSON.
    async fn fetch_bookings(&self, user_id: &str) -> Result<Value, ClientError>;

    /// True when the service reports the deletion succeeded. A non-success
    /// status is a normal outcome here, not an error.
    async fn delete_booking(&self, booking_id: &str) -> Result<bool, ClientError>;
}

pub struct HttpBookingService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBookingService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl BookingService for HttpBookingService {
    async fn fetch_bookings(&self, user_id: &str) -> Result<Value, ClientError> {
        let url = format!("{}/api/bookings/user/{}", self.base_url, user_id);
        // The body is decoded whatever the status; an error body simply
        // fails the array-shape check downstream.
        let body = self.client.get(&url).send().await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn delete_booking(&self, booking_id: &str) -> Result<bool, ClientError> {
        let url = format!("{}/api/bookings/{}", self.base_url, booking_id);
        let response = self.client.delete(&url).send().await?;
        Ok(response.status().is_success())
    }
}
