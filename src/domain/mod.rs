//! Domain layer - Core business rules and entities

pub mod user;

pub use user::{PasswordHasher, RegisterRequest, User, UserId, UserStore, ValidationError};
