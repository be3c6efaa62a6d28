//! Password hashing trait

#[cfg(test)]
use mockall::automock;

/// One-way password transform
///
/// Implementations must be deterministic: login compares a fresh hash of the
/// supplied password against the stored one for equality.
#[cfg_attr(test, automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password
    fn hash(&self, plaintext: &str) -> String;
}
