use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

// Deployment platforms probe this route for liveness.
async fn health_check() -> Json<Value> {
    Json(json!({
        "message": "Marquee ticket booking API is running!",
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
