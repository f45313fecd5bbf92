use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use marquee_domain::booking::{Booking, CreateBookingRequest};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/bookings", post(create_booking))
        .route("/api/bookings/user/{user_id}", get(list_user_bookings))
        .route("/api/bookings/{booking_id}", delete(delete_booking))
}

async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    req.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;

    let booking = Booking {
        id: Uuid::new_v4(),
        user_id: req.user_id,
        movie_title: req.movie_title,
        selected_date: req.selected_date,
        selected_showtime: req.selected_showtime,
        seats: req.seats,
        created_at: Utc::now(),
    };

    state.bookings.create_booking(&booking).await.map_err(|e| {
        info!("Failed to create booking: {}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    info!("Booking created: {}", booking.id);

    Ok((StatusCode::CREATED, Json(booking)))
}

/// The bookings view consumes this as a plain JSON array, creation order.
async fn list_user_bookings(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state.bookings.list_for_user(user_id).await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    Ok(Json(bookings))
}

/// Success is signalled by status alone; clients do not read the body.
async fn delete_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let removed = state.bookings.delete_booking(booking_id).await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    if !removed {
        return Err(AppError::NotFoundError(format!("Booking {} not found", booking_id)));
    }

    info!("Booking cancelled: {}", booking_id);

    Ok(StatusCode::NO_CONTENT)
}
