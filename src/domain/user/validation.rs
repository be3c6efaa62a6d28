//! Registration and login validation rules

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Minimum number of characters in an acceptable password
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// `local@domain.tld` with a 2+ letter top-level domain
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

/// Decimal digit (Unicode `Nd`)
static DIGIT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());

/// Rejections produced by registration and login
///
/// The display strings are part of the public contract and are returned
/// verbatim to callers.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Request is required")]
    RequestRequired,

    #[error("Name is required")]
    NameRequired,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Weak password")]
    WeakPassword,

    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email is required")]
    EmailRequired,

    #[error("Password is required")]
    PasswordRequired,
}

impl ValidationError {
    /// The caller-facing message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Whitespace for blank checks
///
/// Unicode separators and ASCII controls, excluding the no-break spaces
/// (U+00A0, U+2007, U+202F) and NEL (U+0085).
fn is_blank_char(c: char) -> bool {
    match c {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\u{0085}' => false,
        '\u{001C}'..='\u{001F}' => true,
        _ => c.is_whitespace(),
    }
}

/// True when the value is empty or only whitespace
pub fn is_blank(value: &str) -> bool {
    value.chars().all(is_blank_char)
}

/// Strip leading and trailing spaces and ASCII control characters
pub fn trim_name(name: &str) -> &str {
    name.trim_matches(|c: char| c <= ' ')
}

/// Validate a display name
pub fn validate_name(name: Option<&str>) -> Result<&str, ValidationError> {
    match name {
        Some(name) if !is_blank(name) => Ok(name),
        _ => Err(ValidationError::NameRequired),
    }
}

/// Validate an email address against the `local@domain.tld` shape
///
/// Matching runs on the input as given; case normalization happens later.
pub fn validate_email(email: Option<&str>) -> Result<&str, ValidationError> {
    match email {
        Some(email) if EMAIL_PATTERN.is_match(email) => Ok(email),
        _ => Err(ValidationError::InvalidEmail),
    }
}

/// Validate password strength
///
/// Rules:
/// - At least 8 characters
/// - At least one uppercase letter
/// - At least one lowercase letter
/// - At least one digit
pub fn validate_password_strength(password: Option<&str>) -> Result<&str, ValidationError> {
    let password = password.ok_or(ValidationError::WeakPassword)?;

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::WeakPassword);
    }

    let has_upper = password.chars().any(char::is_uppercase);
    let has_lower = password.chars().any(char::is_lowercase);
    let has_digit = DIGIT_PATTERN.is_match(password);

    if !(has_upper && has_lower && has_digit) {
        return Err(ValidationError::WeakPassword);
    }

    Ok(password)
}

/// Normalize an email for uniqueness checks and lookups
pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}
