//! Application state for shared services

use std::sync::Arc;

use crate::domain::{PasswordHasher, UserStore};
use crate::infrastructure::user::UserService;

/// Service type used by the HTTP layer, erased over its collaborators
pub type SharedUserService = UserService<dyn UserStore, dyn PasswordHasher>;

/// Application state shared by all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub user_service: SharedUserService,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            user_service: UserService::new(store, hasher),
        }
    }
}
