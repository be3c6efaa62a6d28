//! User service for registration and login

use std::sync::Arc;

use crate::domain::user::{
    is_blank, normalize_email, trim_name, validate_email, validate_name,
    validate_password_strength, PasswordHasher, RegisterRequest, User, UserStore, ValidationError,
};

/// Registration and login service
///
/// Validates and normalizes input, then delegates persistence to the store
/// and hashing to the hasher. Holds no mutable state of its own.
pub struct UserService<S: ?Sized, H: ?Sized> {
    store: Arc<S>,
    hasher: Arc<H>,
}

impl<S, H> UserService<S, H>
where
    S: UserStore + ?Sized,
    H: PasswordHasher + ?Sized,
{
    /// Create a new user service
    pub fn new(store: Arc<S>, hasher: Arc<H>) -> Self {
        Self { store, hasher }
    }

    /// Register a new user
    ///
    /// Checks run in order and the first failure is returned. The store is
    /// consulted for uniqueness only after every input rule passes, and the
    /// password is hashed only after the email is known to be free.
    pub fn register(&self, request: Option<RegisterRequest>) -> Result<User, ValidationError> {
        let request = request.ok_or(ValidationError::RequestRequired)?;

        let name = validate_name(request.name.as_deref())?;
        let email = validate_email(request.email.as_deref())?;
        let password = validate_password_strength(request.password.as_deref())?;

        let email = normalize_email(email);

        if self.store.exists_by_email(&email) {
            return Err(ValidationError::EmailAlreadyRegistered);
        }

        let password_hash = self.hasher.hash(password);
        let user = User::new(None, trim_name(name), email, password_hash);

        Ok(self.store.save(user))
    }

    /// Authenticate a user with email and password
    ///
    /// Unknown email and wrong password fail with the same error.
    pub fn login(&self, email: Option<&str>, password: Option<&str>) -> Result<User, ValidationError> {
        let email = email
            .filter(|e| !is_blank(e))
            .ok_or(ValidationError::EmailRequired)?;
        let password = password
            .filter(|p| !is_blank(p))
            .ok_or(ValidationError::PasswordRequired)?;

        let user = self
            .store
            .find_by_email(&normalize_email(email))
            .ok_or(ValidationError::InvalidCredentials)?;

        if self.hasher.hash(password) != user.password_hash() {
            return Err(ValidationError::InvalidCredentials);
        }

        Ok(user)
    }
}

impl<S: ?Sized, H: ?Sized> Clone for UserService<S, H> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            hasher: Arc::clone(&self.hasher),
        }
    }
}

impl<S: ?Sized, H: ?Sized> std::fmt::Debug for UserService<S, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService").finish_non_exhaustive()
    }
}
