//! In-memory user store implementation

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::domain::user::{User, UserId, UserStore};

#[derive(Debug, Default)]
struct Inner {
    /// Users keyed by normalized email
    users: HashMap<String, User>,
    next_id: u64,
}

/// In-memory implementation of UserStore
#[derive(Debug)]
pub struct InMemoryUserStore {
    inner: RwLock<Inner>,
}

impl InMemoryUserStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store with initial users
    ///
    /// Identifiers assigned later continue after the highest seeded id.
    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users
            .iter()
            .filter_map(|u| u.id())
            .map(|id| id.value() + 1)
            .max()
            .unwrap_or(1);

        let store = Self {
            inner: RwLock::new(Inner {
                users: HashMap::new(),
                next_id,
            }),
        };

        for user in users {
            store.save(user);
        }

        store
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.read().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for InMemoryUserStore {
    fn exists_by_email(&self, email: &str) -> bool {
        self.read().users.contains_key(email)
    }

    fn save(&self, user: User) -> User {
        let mut inner = self.write();

        let user = match user.id() {
            Some(_) => user,
            None => {
                let id = UserId::new(inner.next_id);
                inner.next_id += 1;
                user.with_id(id)
            }
        };

        debug!(user_id = ?user.id(), "Saving user");

        inner.users.insert(user.email().to_string(), user.clone());
        user
    }

    fn find_by_email(&self, email: &str) -> Option<User> {
        self.read().users.get(email).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user(email: &str) -> User {
        User::new(None, "Test", email, "hashed_password")
    }

    #[test]
    fn test_save_assigns_sequential_ids() {
        let store = InMemoryUserStore::new();

        let first = store.save(create_test_user("a@example.com"));
        let second = store.save(create_test_user("b@example.com"));

        assert_eq!(first.id(), Some(UserId::new(1)));
        assert_eq!(second.id(), Some(UserId::new(2)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_exists_and_find() {
        let store = InMemoryUserStore::new();
        store.save(create_test_user("alice@example.com"));

        assert!(store.exists_by_email("alice@example.com"));
        assert!(!store.exists_by_email("bob@example.com"));

        let found = store.find_by_email("alice@example.com").unwrap();
        assert_eq!(found.email(), "alice@example.com");
        assert!(store.find_by_email("bob@example.com").is_none());
    }

    #[test]
    fn test_lookup_is_exact() {
        let store = InMemoryUserStore::new();
        store.save(create_test_user("alice@example.com"));

        assert!(!store.exists_by_email("Alice@Example.com"));
    }

    #[test]
    fn test_save_keeps_existing_id() {
        let store = InMemoryUserStore::new();
        let user = create_test_user("alice@example.com").with_id(UserId::new(55));

        let saved = store.save(user);
        assert_eq!(saved.id(), Some(UserId::new(55)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_with_users_continues_sequence() {
        let store = InMemoryUserStore::with_users(vec![
            create_test_user("a@example.com").with_id(UserId::new(10)),
            create_test_user("b@example.com").with_id(UserId::new(4)),
        ]);

        let next = store.save(create_test_user("c@example.com"));
        assert_eq!(next.id(), Some(UserId::new(11)));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_empty() {
        let store = InMemoryUserStore::default();
        assert!(store.is_empty());
    }
}
