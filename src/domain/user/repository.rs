//! User store trait

use super::entity::User;

#[cfg(test)]
use mockall::automock;

/// Storage collaborator for users
///
/// Emails passed in are already normalized by the caller.
#[cfg_attr(test, automock)]
pub trait UserStore: Send + Sync {
    /// Check whether a user with this email exists
    fn exists_by_email(&self, email: &str) -> bool;

    /// Persist a user, assigning an identifier if it has none
    fn save(&self, user: User) -> User;

    /// Find a user by email
    fn find_by_email(&self, email: &str) -> Option<User>;
}
