use crate::storage::KeyValueStore;
use shared_types::{LoginResponse, PermissionSet, Role};

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";
pub const USER_KEY: &str = "user";
pub const USER_ID_KEY: &str = "userId";

/// Every key the session owns, in the order they are written.
pub const SESSION_KEYS: [&str; 4] = [TOKEN_KEY, ROLE_KEY, USER_KEY, USER_ID_KEY];

/// The signed-in user's identity, as persisted between reloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub user_name: String,
    pub role: Role,
}

impl Session {
    pub fn from_login(response: &LoginResponse) -> Self {
        Self {
            user_id: response.user.id().to_string(),
            user_name: response.user.name.clone(),
            role: Role::from_str_or_default(&response.user.role),
        }
    }

    pub fn permissions(&self) -> PermissionSet {
        PermissionSet::for_role(self.role)
    }

    /// Read a live session back from storage.
    ///
    /// Both a token and a user name must be present; a missing role reads
    /// as the least privileged one.
    pub fn restore(store: &dyn KeyValueStore) -> Option<Self> {
        let present = |key: &str| store.get(key).filter(|v| !v.trim().is_empty());
        present(TOKEN_KEY)?;
        let user_name = present(USER_KEY)?;
        Some(Self {
            user_id: present(USER_ID_KEY).unwrap_or_default(),
            user_name,
            role: present(ROLE_KEY)
                .map(|r| Role::from_str_or_default(&r))
                .unwrap_or_default(),
        })
    }

    pub fn persist(&self, store: &dyn KeyValueStore, token: &str) {
        store.set(TOKEN_KEY, token);
        store.set(ROLE_KEY, self.role.as_str());
        store.set(USER_KEY, &self.user_name);
        store.set(USER_ID_KEY, &self.user_id);
    }

    pub fn clear(store: &dyn KeyValueStore) {
        for key in SESSION_KEYS {
            store.remove(key);
        }
    }

    pub fn token(store: &dyn KeyValueStore) -> Option<String> {
        store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }
}
