//! User domain
//!
//! This module provides domain types and traits for user registration and
//! login, including the user entity, validation rules, and the storage and
//! hashing collaborator traits.

mod entity;
mod hasher;
mod repository;
mod validation;

pub use entity::{RegisterRequest, User, UserId};
pub use hasher::PasswordHasher;
pub use repository::UserStore;
pub use validation::{
    is_blank, normalize_email, trim_name, validate_email, validate_name,
    validate_password_strength, ValidationError, MIN_PASSWORD_LENGTH,
};

#[cfg(test)]
pub use hasher::MockPasswordHasher;
#[cfg(test)]
pub use repository::MockUserStore;
