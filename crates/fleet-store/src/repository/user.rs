//! # User Store
//!
//! Registered riders, keyed by id. Pure lookup storage — membership changes
//! go through `save` like any other update.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use fleet_core::types::User;

/// Thread-safe in-memory store of users, keyed by id.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<HashMap<String, User>>,
}

impl UserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        UserStore {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Saves a user, replacing any existing entry with the same id.
    pub fn save(&self, user: User) {
        debug!(user_id = %user.id, tier = ?user.tier, "Saving user");
        let mut users = self.users.write().expect("user store lock poisoned");
        users.insert(user.id.clone(), user);
    }

    /// Finds a user by their unique id.
    pub fn get(&self, id: &str) -> Option<User> {
        let users = self.users.read().expect("user store lock poisoned");
        users.get(id).cloned()
    }

    /// Returns all registered users.
    pub fn list(&self) -> Vec<User> {
        let users = self.users.read().expect("user store lock poisoned");
        users.values().cloned().collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_core::types::MembershipTier;

    #[test]
    fn test_save_and_get() {
        let store = UserStore::new();
        store.save(User::new("u-1", "Ismail", MembershipTier::Premium));

        let found = store.get("u-1").unwrap();
        assert_eq!(found.name, "Ismail");
        assert_eq!(found.tier, MembershipTier::Premium);
        assert!(store.get("u-404").is_none());
    }

    #[test]
    fn test_save_replaces_tier() {
        let store = UserStore::new();
        store.save(User::new("u-1", "Ismail", MembershipTier::Standard));
        store.save(User::new("u-1", "Ismail", MembershipTier::Vip));

        assert_eq!(store.list().len(), 1);
        assert_eq!(store.get("u-1").unwrap().tier, MembershipTier::Vip);
    }
}
