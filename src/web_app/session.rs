// web_app/session.rs - Persisted client state and auth realms
//
// The token and the chat transcript live behind a `SessionStore`, so
// nothing reads browser storage directly. The browser build persists to
// localStorage; server rendering and tests use an in-memory store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::web_app::chat::CHAT_STORAGE_KEY;

pub const TOKEN_KEY: &str = "token";

/// Key-value persistence port
pub trait SessionStore: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process store for SSR and tests
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(key);
        }
    }
}

/// `window.localStorage`, looked up on every call so the store itself
/// holds no JS handles.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "hydrate")]
impl SessionStore for BrowserStore {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                tracing::warn!(key, "localStorage write failed");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Handle to the persisted session, shared through Leptos context.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl Default for Session {
    fn default() -> Self {
        cfg_if::cfg_if! {
            if #[cfg(feature = "hydrate")] {
                Session::new(BrowserStore)
            } else {
                Session::new(MemoryStore::new())
            }
        }
    }
}

impl Session {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Session {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    pub fn token(&self) -> Option<String> {
        self.store.load(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn set_token(&self, token: &str) {
        self.store.save(TOKEN_KEY, token);
    }

    /// Drops only the token; used when the backend rejects it.
    pub fn clear_token(&self) {
        self.store.remove(TOKEN_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Drops the token and the chat transcript.
    pub fn logout(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(CHAT_STORAGE_KEY);
        tracing::info!("session cleared");
    }
}

/// Which login a route belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthRealm {
    User,
    Admin,
}

impl AuthRealm {
    pub fn login_path(self) -> &'static str {
        match self {
            AuthRealm::User => "/login",
            AuthRealm::Admin => "/admin/login",
        }
    }

    /// Backend login endpoint, relative to the API root
    pub fn endpoint(self) -> &'static str {
        match self {
            AuthRealm::User => "auth/login",
            AuthRealm::Admin => "auth/admin/login",
        }
    }

    /// Where a successful login lands
    pub fn landing_path(self) -> &'static str {
        match self {
            AuthRealm::User => "/",
            AuthRealm::Admin => "/admin/dashboard",
        }
    }

    pub fn for_path(path: &str) -> Self {
        if path == "/admin" || path.starts_with("/admin/") {
            AuthRealm::Admin
        } else {
            AuthRealm::User
        }
    }

    pub fn is_login_path(path: &str) -> bool {
        path == AuthRealm::User.login_path() || path == AuthRealm::Admin.login_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let session = Session::new(MemoryStore::new());
        assert!(!session.is_authenticated());

        session.set_token("abc");
        assert_eq!(session.token().as_deref(), Some("abc"));
    }

    #[test]
    fn test_empty_token_is_no_token() {
        let session = Session::new(MemoryStore::new());
        session.set_token("");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_logout_clears_token_and_chat() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());
        session.set_token("abc");
        store.save(CHAT_STORAGE_KEY, "[]");
        store.save("other", "kept");

        session.logout();
        assert_eq!(store.load(TOKEN_KEY), None);
        assert_eq!(store.load(CHAT_STORAGE_KEY), None);
        assert_eq!(store.load("other").as_deref(), Some("kept"));
    }

    #[test]
    fn test_realm_for_path() {
        assert_eq!(AuthRealm::for_path("/admin/upload"), AuthRealm::Admin);
        assert_eq!(AuthRealm::for_path("/admin"), AuthRealm::Admin);
        assert_eq!(AuthRealm::for_path("/administrator"), AuthRealm::User);
        assert_eq!(AuthRealm::for_path("/house/A-1"), AuthRealm::User);
        assert_eq!(AuthRealm::Admin.login_path(), "/admin/login");
    }
}
