use axum::{
    extract::{Json, State},
    routing::post,
    Router,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;
use uuid::Uuid;

use marquee_domain::user::{NewUser, User};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub exp: usize,
}

#[derive(Debug, Serialize)]
struct AuthResponse {
    token: String,
    user_id: Uuid,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/user/register", post(register))
        .route("/api/user/login", post(login))
}

/// Salted SHA-256 digest of the password; the email doubles as the salt.
pub fn password_digest(email: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(email.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

fn issue_token(state: &AppState, user: &User) -> Result<String, AppError> {
    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        exp: (Utc::now() + Duration::seconds(state.auth.expiration as i64)).timestamp() as usize,
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(state.auth.secret.as_bytes()))
        .map_err(|e| AppError::InternalServerError(format!("Token encoding failed: {}", e)))
}

async fn register(
    State(state): State<AppState>,
    Json(req): Json<NewUser>,
) -> Result<Json<AuthResponse>, AppError> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::ValidationError("Email and password are required".to_string()));
    }

    let existing = state.users.find_by_email(&req.email).await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    if existing.is_some() {
        return Err(AppError::ConflictError("Email already registered".to_string()));
    }

    let user = User {
        id: Uuid::new_v4(),
        email: req.email.clone(),
        password_digest: password_digest(&req.email, &req.password),
        created_at: Utc::now(),
    };

    state.users.create_user(&user).await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    info!("User registered: {}", user.id);

    let token = issue_token(&state, &user)?;
    Ok(Json(AuthResponse { token, user_id: user.id }))
}

async fn login(
    State(state): State<AppState>,
    Json(req): Json<NewUser>,
) -> Result<Json<AuthResponse>, AppError> {
    let user = state.users.find_by_email(&req.email).await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .ok_or(AppError::AuthenticationError("Invalid email or password".to_string()))?;

    if password_digest(&req.email, &req.password) != user.password_digest {
        return Err(AppError::AuthenticationError("Invalid email or password".to_string()));
    }

    let token = issue_token(&state, &user)?;
    Ok(Json(AuthResponse { token, user_id: user.id }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_digest_is_stable() {
        let a = password_digest("viewer@example.com", "hunter2");
        let b = password_digest("viewer@example.com", "hunter2");
        assert_eq!(a, b);
    }

    #[test]
    fn test_password_digest_salts_by_email() {
        // Same password, different accounts
        let a = password_digest("first@example.com", "hunter2");
        let b = password_digest("second@example.com", "hunter2");
        assert_ne!(a, b);
    }

    #[test]
    fn test_password_digest_differs_by_password() {
        let a = password_digest("viewer@example.com", "hunter2");
        let b = password_digest("viewer@example.com", "hunter3");
        assert_ne!(a, b);
    }
}
