use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use marquee_domain::movie::Movie;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/movies", get(list_movies))
        .route("/api/movies/{id}", get(get_movie))
}

async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, AppError> {
    let movies = state.movies.list_movies().await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    Ok(Json(movies))
}

async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Movie>, AppError> {
    let movie = state.movies.get_movie(id).await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .ok_or(AppError::NotFoundError(format!("Movie {} not found", id)))?;

    Ok(Json(movie))
}
