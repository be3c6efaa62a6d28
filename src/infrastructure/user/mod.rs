//! User infrastructure module
//!
//! This module provides implementations for user registration and login,
//! including the in-memory store, SHA-256 password hashing, and the user
//! service that ties them together.

mod password;
mod repository;
mod service;

pub use password::Sha256Hasher;
pub use repository::InMemoryUserStore;
pub use service::UserService;
