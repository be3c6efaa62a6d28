//! Registration and login endpoints

use axum::{extract::State, http::StatusCode, routing::post, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{RegisterRequest, User, UserId};

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Login request
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// User response (safe to expose)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            name: user.name().to_string(),
            email: user.email().to_string(),
        }
    }
}

/// Register a new user
///
/// POST /auth/register
///
/// A `null` body is treated as a missing request.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<Option<RegisterRequest>>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state.user_service.register(request).inspect_err(|e| {
        info!(reason = %e, "Registration rejected");
    })?;

    info!(user_id = ?user.id(), "User registered");

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// Login with email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<Option<LoginRequest>>,
) -> Result<Json<UserResponse>, ApiError> {
    let request = request.unwrap_or_default();

    let user = state
        .user_service
        .login(request.email.as_deref(), request.password.as_deref())
        .inspect_err(|e| {
            warn!(reason = %e, "Login rejected");
        })?;

    info!(user_id = ?user.id(), "User logged in");

    Ok(Json(UserResponse::from(&user)))
}
