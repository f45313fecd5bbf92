//! Client side of the Marquee booking platform: the bookings view and the
//! HTTP service it talks to.

pub mod service;
pub mod session;
pub mod view;

pub use service::{BookingService, ClientError, HttpBookingService};
pub use session::Session;
pub use view::{BookingsView, Navigator, Notifier};
