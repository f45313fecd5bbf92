use std::collections::HashSet;
use std::sync::Arc;

use serde::Deserialize;
use tracing::warn;

use crate::service::BookingService;
use crate::session::Session;

/// A booking as served by the bookings API. Ids are treated as opaque
/// strings; fields the view does not render are ignored on decode.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub movie_title: String,
    pub selected_date: String,
    pub selected_showtime: String,
    pub seats: Vec<u32>,
}

/// Synchronous user notification (the web original used `alert`).
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Single affordance that takes the user back to the home view.
pub trait Navigator: Send + Sync {
    fn go_home(&self);
}

/// The "my bookings" view: loads the session user's bookings once, renders
/// them, and lets the user cancel one. All state is owned by the instance;
/// a remount is a fresh instance.
pub struct BookingsView {
    service: Arc<dyn BookingService>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    user_id: Option<String>,
    pub bookings: Vec<Booking>,
    pub loading: bool,
    pub error: Option<String>,
    cancelling: HashSet<String>,
}

impl BookingsView {
    pub fn new(
        service: Arc<dyn BookingService>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        session: &Session,
    ) -> Self {
        Self {
            service,
            notifier,
            navigator,
            user_id: session.user_id.clone(),
            bookings: Vec::new(),
            loading: true,
            error: None,
            cancelling: HashSet::new(),
        }
    }

    /// Initial fetch. Runs once per view instance; every outcome settles
    /// `loading`. There is no automatic retry.
    pub async fn load(&mut self) {
        if !self.loading {
            // Already settled; one attempt per instance.
            return;
        }

        let Some(user_id) = self.user_id.clone() else {
            self.error = Some("User not logged in".to_string());
            self.loading = false;
            return;
        };

        match self.service.fetch_bookings(&user_id).await {
            Ok(payload) => {
                if payload.is_array() {
                    match serde_json::from_value::<Vec<Booking>>(payload) {
                        Ok(bookings) => {
                            self.bookings = bookings;
                            self.error = None;
                        }
                        Err(e) => {
                            warn!("Failed to decode bookings: {}", e);
                            self.bookings = Vec::new();
                            self.error = Some("Failed to load bookings.".to_string());
                        }
                    }
                } else {
                    // The service answered, but not with a list.
                    self.bookings = Vec::new();
                    self.error = Some("Unexpected response from server.".to_string());
                }
            }
            Err(e) => {
                warn!("Failed to fetch bookings: {}", e);
                self.bookings = Vec::new();
                self.error = Some("Failed to load bookings.".to_string());
            }
        }

        self.loading = false;
    }

    /// Cancel one booking. On service-confirmed success the local list drops
    /// the record immediately; there is no reconciliation re-fetch. Failures
    /// leave local state untouched and only notify.
    pub async fn cancel(&mut self, booking_id: &str) {
        // A repeat submission while the first request is pending would
        // double-send; ids in flight are skipped.
        if !self.cancelling.insert(booking_id.to_string()) {
            return;
        }

        let outcome = self.service.delete_booking(booking_id).await;
        self.cancelling.remove(booking_id);

        match outcome {
            Ok(true) => {
                self.bookings.retain(|b| b.id != booking_id);
                self.notifier.notify("Booking cancelled!");
            }
            Ok(false) => {
                self.notifier.notify("Failed to cancel booking.");
            }
            Err(e) => {
                warn!("Error cancelling booking {}: {}", booking_id, e);
                self.notifier.notify("An error occurred while cancelling.");
            }
        }
    }

    pub fn go_home(&self) {
        self.navigator.go_home();
    }

    /// Text rendering of the view state: a loading line while the initial
    /// fetch is pending, the error if one is set, an empty-state line, or
    /// one row per booking with 1-based seat numbers.
    pub fn render(&self) -> String {
        let mut out = String::from("My Bookings\n");

        if self.loading {
            out.push_str("Loading...\n");
        }
        if let Some(error) = &self.error {
            out.push_str(error);
            out.push('\n');
        }
        if !self.loading && self.error.is_none() && self.bookings.is_empty() {
            out.push_str("No bookings yet.\n");
        }

        for (index, booking) in self.bookings.iter().enumerate() {
            let seats: Vec<String> = booking.seats.iter().map(|seat| (seat + 1).to_string()).collect();
            out.push_str(&format!(
                "{}. {} | {} {} | Seats: {} (c {} to cancel)\n",
                index + 1,
                booking.movie_title,
                booking.selected_date,
                booking.selected_showtime,
                seats.join(", "),
                index + 1,
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::ClientError;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct FakeService {
        fetch_response: Option<Value>, // None simulates a transport failure
        delete_response: Option<bool>, // None simulates a transport failure
        fetch_calls: AtomicUsize,
        delete_calls: Mutex<Vec<String>>,
    }

    impl FakeService {
        fn new(fetch_response: Option<Value>, delete_response: Option<bool>) -> Arc<Self> {
            Arc::new(Self {
                fetch_response,
                delete_response,
                fetch_calls: AtomicUsize::new(0),
                delete_calls: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl BookingService for FakeService {
        async fn fetch_bookings(&self, _user_id: &str) -> Result<Value, ClientError> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            self.fetch_response
                .clone()
                .ok_or(ClientError::Transport("connection refused".to_string()))
        }

        async fn delete_booking(&self, booking_id: &str) -> Result<bool, ClientError> {
            self.delete_calls.lock().unwrap().push(booking_id.to_string());
            self.delete_response
                .ok_or(ClientError::Transport("connection refused".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        visits: AtomicUsize,
    }

    impl Navigator for RecordingNavigator {
        fn go_home(&self) {
            self.visits.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn two_bookings() -> Value {
        json!([
            {
                "id": "b-1",
                "userId": "u-1",
                "movieTitle": "Blade Runner",
                "selectedDate": "2026-08-14",
                "selectedShowtime": "19:30",
                "seats": [0, 4, 5],
                "createdAt": "2026-08-01T10:00:00Z",
            },
            {
                "id": "b-2",
                "userId": "u-1",
                "movieTitle": "Stalker",
                "selectedDate": "2026-08-15",
                "selectedShowtime": "21:00",
                "seats": [2],
                "createdAt": "2026-08-02T10:00:00Z",
            },
        ])
    }

    fn view_for(
        service: Arc<FakeService>,
        notifier: Arc<RecordingNotifier>,
        user_id: Option<&str>,
    ) -> BookingsView {
        BookingsView::new(
            service,
            notifier,
            Arc::new(RecordingNavigator::default()),
            &Session::new(user_id.map(String::from)),
        )
    }

    #[tokio::test]
    async fn test_load_populates_bookings_in_order() {
        let service = FakeService::new(Some(two_bookings()), None);
        let mut view = view_for(service.clone(), Arc::new(RecordingNotifier::default()), Some("u-1"));

        view.load().await;

        assert_eq!(view.bookings.len(), 2);
        assert_eq!(view.bookings[0].id, "b-1");
        assert_eq!(view.bookings[1].id, "b-2");
        assert!(!view.loading);
        assert!(view.error.is_none());
        assert_eq!(service.fetch_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_load_without_user_makes_no_request() {
        let service = FakeService::new(Some(two_bookings()), None);
        let mut view = view_for(service.clone(), Arc::new(RecordingNotifier::default()), None);

        view.load().await;

        assert_eq!(view.error.as_deref(), Some("User not logged in"));
        assert!(!view.loading);
        assert_eq!(service.fetch_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_load_rejects_non_array_payload() {
        let service = FakeService::new(Some(json!({"error": "nope"})), None);
        let mut view = view_for(service, Arc::new(RecordingNotifier::default()), Some("u-1"));

        view.load().await;

        assert!(view.bookings.is_empty());
        assert_eq!(view.error.as_deref(), Some("Unexpected response from server."));
        assert!(!view.loading);
    }

    #[tokio::test]
    async fn test_load_transport_failure() {
        let service = FakeService::new(None, None);
        let mut view = view_for(service, Arc::new(RecordingNotifier::default()), Some("u-1"));

        view.load().await;

        assert!(view.bookings.is_empty());
        assert_eq!(view.error.as_deref(), Some("Failed to load bookings."));
        assert!(!view.loading);
    }

    #[tokio::test]
    async fn test_load_treats_undecodable_rows_as_failure() {
        // An array, but the rows are not bookings.
        let service = FakeService::new(Some(json!([{"id": 7}])), None);
        let mut view = view_for(service, Arc::new(RecordingNotifier::default()), Some("u-1"));

        view.load().await;

        assert!(view.bookings.is_empty());
        assert_eq!(view.error.as_deref(), Some("Failed to load bookings."));
    }

    #[tokio::test]
    async fn test_load_runs_once_per_instance() {
        let service = FakeService::new(Some(two_bookings()), None);
        let mut view = view_for(service.clone(), Arc::new(RecordingNotifier::default()), Some("u-1"));

        view.load().await;
        view.load().await;

        assert_eq!(service.fetch_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_render_shows_one_based_seat_numbers() {
        let service = FakeService::new(Some(two_bookings()), None);
        let mut view = view_for(service, Arc::new(RecordingNotifier::default()), Some("u-1"));

        view.load().await;
        let rendered = view.render();

        assert!(rendered.contains("Seats: 1, 5, 6"));
        assert!(rendered.contains("Seats: 3"));
    }

    #[tokio::test]
    async fn test_render_states() {
        let service = FakeService::new(Some(json!([])), None);
        let notifier = Arc::new(RecordingNotifier::default());
        let mut view = view_for(service, notifier, Some("u-1"));

        // Before the fetch settles
        assert!(view.render().contains("Loading..."));

        // Settled with an empty list
        view.load().await;
        assert!(view.render().contains("No bookings yet."));

        // Error state
        let failing = FakeService::new(None, None);
        let mut view = view_for(failing, Arc::new(RecordingNotifier::default()), Some("u-1"));
        view.load().await;
        assert!(view.render().contains("Failed to load bookings."));
    }

    #[tokio::test]
    async fn test_cancel_success_removes_only_that_booking() {
        let service = FakeService::new(Some(two_bookings()), Some(true));
        let notifier = Arc::new(RecordingNotifier::default());
        let mut view = view_for(service, notifier.clone(), Some("u-1"));

        view.load().await;
        view.cancel("b-1").await;

        assert_eq!(view.bookings.len(), 1);
        assert_eq!(view.bookings[0].id, "b-2");
        assert_eq!(notifier.messages.lock().unwrap().as_slice(), ["Booking cancelled!"]);
    }

    #[tokio::test]
    async fn test_cancel_reported_failure_keeps_list() {
        let service = FakeService::new(Some(two_bookings()), Some(false));
        let notifier = Arc::new(RecordingNotifier::default());
        let mut view = view_for(service, notifier.clone(), Some("u-1"));

        view.load().await;
        view.cancel("b-1").await;

        assert_eq!(view.bookings.len(), 2);
        assert_eq!(notifier.messages.lock().unwrap().as_slice(), ["Failed to cancel booking."]);
    }

    #[tokio::test]
    async fn test_cancel_transport_error_keeps_list() {
        let service = FakeService::new(Some(two_bookings()), None);
        let notifier = Arc::new(RecordingNotifier::default());
        let mut view = view_for(service, notifier.clone(), Some("u-1"));

        view.load().await;
        view.cancel("b-1").await;

        assert_eq!(view.bookings.len(), 2);
        assert_eq!(
            notifier.messages.lock().unwrap().as_slice(),
            ["An error occurred while cancelling."]
        );
    }

    #[tokio::test]
    async fn test_cancel_of_absent_id_is_a_noop_filter() {
        let service = FakeService::new(Some(two_bookings()), Some(true));
        let notifier = Arc::new(RecordingNotifier::default());
        let mut view = view_for(service, notifier.clone(), Some("u-1"));

        view.load().await;
        view.cancel("ghost").await;

        // Nothing removed, nothing corrupted
        assert_eq!(view.bookings.len(), 2);
        assert_eq!(notifier.messages.lock().unwrap().as_slice(), ["Booking cancelled!"]);
    }

    #[tokio::test]
    async fn test_cancel_skips_ids_already_in_flight() {
        let service = FakeService::new(Some(two_bookings()), Some(true));
        let mut view = view_for(service.clone(), Arc::new(RecordingNotifier::default()), Some("u-1"));

        view.load().await;
        view.cancelling.insert("b-1".to_string());
        view.cancel("b-1").await;

        assert!(service.delete_calls.lock().unwrap().is_empty());
        assert_eq!(view.bookings.len(), 2);
    }

    #[tokio::test]
    async fn test_go_home_delegates_to_navigator() {
        let navigator = Arc::new(RecordingNavigator::default());
        let view = BookingsView::new(
            FakeService::new(None, None),
            Arc::new(RecordingNotifier::default()),
            navigator.clone(),
            &Session::new(None),
        );

        view.go_home();

        assert_eq!(navigator.visits.load(Ordering::SeqCst), 1);
    }
}
