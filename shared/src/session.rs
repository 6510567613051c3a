//! Cached user session.
//!
//! The signed-in user's profile is cached as JSON under a single key of a
//! [`ClientStore`]. In the browser the store is `localStorage`; tests use
//! [`MemoryStore`]. A corrupt cache entry is treated as "no user".

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::StoreError;
use crate::User;

/// Key holding the serialized [`User`]
pub const USER_DATA_KEY: &str = "userData";

/// String key/value storage owned by the page
pub trait ClientStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str);
}

impl<T: ClientStore + ?Sized> ClientStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// In-memory store for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl ClientStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Read/write/clear access to the cached user
#[derive(Debug, Clone)]
pub struct UserSession<S: ClientStore> {
    store: S,
}

impl<S: ClientStore> UserSession<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The cached user, or `None` when absent or unreadable
    pub fn current_user(&self) -> Option<User> {
        let raw = self.store.get(USER_DATA_KEY)?;
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable cached user data");
                None
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user().is_some()
    }

    /// Cache the user, replacing any previous entry
    pub fn store_user(&self, user: &User) -> Result<(), StoreError> {
        let json = serde_json::to_string(user).map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.store.set(USER_DATA_KEY, &json)
    }

    /// Forget the cached user
    pub fn logout(&self) {
        tracing::debug!("clearing cached user data");
        self.store.remove(USER_DATA_KEY);
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_means_logged_out() {
        let store = MemoryStore::new();
        let session = UserSession::new(&store);
        assert_eq!(session.current_user(), None);
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_store_then_read_user() {
        let store = MemoryStore::new();
        let session = UserSession::new(&store);
        let user = User::fallback_admin();
        session.store_user(&user).unwrap();

        assert_eq!(session.current_user(), Some(user));
        assert!(store.get(USER_DATA_KEY).unwrap().contains("admin@example.com"));
    }

    #[test]
    fn test_corrupt_cache_is_treated_as_logged_out() {
        let store = MemoryStore::new();
        store.set(USER_DATA_KEY, "{\"id\": 1, \"email\":").unwrap();
        let session = UserSession::new(&store);
        assert_eq!(session.current_user(), None);

        store.set(USER_DATA_KEY, "[1, 2, 3]").unwrap();
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn test_logout_removes_key() {
        let store = MemoryStore::new();
        let session = UserSession::new(&store);
        session.store_user(&User::fallback_admin()).unwrap();
        store.set("theme", "dark").unwrap();

        session.logout();
        assert!(!session.is_logged_in());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_store_user_overwrites_previous() {
        let store = MemoryStore::new();
        let session = UserSession::new(&store);
        session.store_user(&User::fallback_admin()).unwrap();

        let staff = User {
            id: 2,
            email: "staff@example.com".to_string(),
            full_name: Some("Professor Smith".to_string()),
            is_active: true,
            is_superuser: false,
            role: Some("staff".to_string()),
        };
        session.store_user(&staff).unwrap();
        assert_eq!(session.current_user(), Some(staff));
    }
}
