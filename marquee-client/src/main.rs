use std::io::{self, Write};
use std::sync::Arc;

use marquee_client::{BookingsView, HttpBookingService, Navigator, Notifier, Session};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        println!("{}", message);
    }
}

struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn go_home(&self) {
        println!("Returning to the home screen.");
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marquee_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url = std::env::var("MARQUEE_API_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:5000".to_string());
    let session = Session::from_env();

    let service = Arc::new(HttpBookingService::new(base_url));
    let mut view = BookingsView::new(
        service,
        Arc::new(TerminalNotifier),
        Arc::new(TerminalNavigator),
        &session,
    );

    println!("{}", view.render());
    view.load().await;

    loop {
        println!("{}", view.render());
        print!("(c N to cancel, h for home, q to quit) > ");
        io::stdout().flush().ok();

        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let input = line.trim();

        if input == "q" {
            break;
        }
        if input == "h" {
            view.go_home();
            break;
        }
        if let Some(number) = input.strip_prefix('c').map(str::trim) {
            match number.parse::<usize>() {
                Ok(n) if n >= 1 && n <= view.bookings.len() => {
                    let booking_id = view.bookings[n - 1].id.clone();
                    view.cancel(&booking_id).await;
                }
                _ => println!("No booking number {}", number),
            }
        }
    }
}
