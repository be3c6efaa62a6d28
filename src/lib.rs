//! User registration and login service
//!
//! Validates registration and login input, enforces email uniqueness, and
//! delegates persistence and password hashing to pluggable collaborators.
//! An axum HTTP surface exposes both operations.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::user::{InMemoryUserStore, Sha256Hasher};
use tracing::info;

/// Create the application state with an in-memory store
pub fn create_app_state(config: &AppConfig) -> AppState {
    info!("Using in-memory user store");

    let store = Arc::new(InMemoryUserStore::new());
    let hasher = Arc::new(Sha256Hasher::with_pepper(
        config.security.password_pepper.clone(),
    ));

    AppState::new(store, hasher)
}
