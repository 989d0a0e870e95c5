//! # Session store: who is logged in, persisted across reloads
//!
//! [`SessionStore`] is the single source of truth for the teacher session. It
//! keeps the current [`Session`] in memory and mirrors every transition into a
//! [`KeyValueStore`] backend, so that the next start of the client restores the
//! same state.
//!
//! ## Persisted keys
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"sessionToken"`) | opaque session token |
//! | [`IDENTITY_KEY`] (`"currentUser"`) | the teacher's email |
//!
//! A session exists only when both keys hold a non-empty value. Anything
//! else loads as "logged out", and [`SessionStore::set`] refuses empty values.
//!
//! ## Backend failures
//!
//! Backends report failures through [`StoreError`], but the store never passes
//! them on: a failed write is logged and the in-memory state still reflects the
//! requested transition. Losing persistence is preferable to leaving the UI
//! half logged in.

use crate::error::StoreError;

/// Key holding the session token.
pub const TOKEN_KEY: &str = "sessionToken";
/// Key holding the logged-in identity.
pub const IDENTITY_KEY: &str = "currentUser";

/// Synchronous string key-value persistence.
///
/// Object safe, so platform shells can hand a `Box<dyn KeyValueStore>` to the
/// UI without naming the concrete backend.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// An authenticated teacher session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub identity: String,
}

impl Session {
    pub fn new(token: impl Into<String>, identity: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            identity: identity.into(),
        }
    }

    /// Both the token and the identity are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.token.is_empty() && !self.identity.is_empty()
    }
}

/// In-memory session state mirrored into a [`KeyValueStore`].
pub struct SessionStore<S: KeyValueStore> {
    backend: S,
    session: Option<Session>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Restore the session persisted in `backend`, if any.
    pub fn load(backend: S) -> Self {
        let token = read_key(&backend, TOKEN_KEY);
        let identity = read_key(&backend, IDENTITY_KEY);
        let session = match (token, identity) {
            (Some(token), Some(identity)) if !token.is_empty() && !identity.is_empty() => {
                tracing::debug!(identity = %identity, "restored persisted session");
                Some(Session { token, identity })
            }
            (None, None) => None,
            _ => {
                tracing::debug!("ignoring partially persisted session");
                None
            }
        };
        Self { backend, session }
    }

    /// Start a new session and persist it. An empty token or identity is
    /// not a session and leaves the store logged out.
    pub fn set(&mut self, token: impl Into<String>, identity: impl Into<String>) {
        let session = Session::new(token, identity);
        if !session.is_complete() {
            tracing::warn!("refusing to store a session with an empty token or identity");
            self.clear();
            return;
        }
        write_key(&self.backend, TOKEN_KEY, &session.token);
        write_key(&self.backend, IDENTITY_KEY, &session.identity);
        self.session = Some(session);
    }

    /// Drop the session from memory and from the backend.
    pub fn clear(&mut self) {
        self.session = None;
        remove_key(&self.backend, TOKEN_KEY);
        remove_key(&self.backend, IDENTITY_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential().is_some()
    }

    /// The token to send with teacher-gated requests.
    pub fn credential(&self) -> Option<&str> {
        self.session
            .as_ref()
            .map(|s| s.token.as_str())
            .filter(|token| !token.is_empty())
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn identity(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.identity.as_str())
    }
}

fn read_key<S: KeyValueStore + ?Sized>(backend: &S, key: &str) -> Option<String> {
    match backend.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Failed to read {key} from session storage: {e}");
            None
        }
    }
}

fn write_key<S: KeyValueStore + ?Sized>(backend: &S, key: &str, value: &str) {
    if let Err(e) = backend.set(key, value) {
        tracing::warn!("Failed to persist {key}: {e}");
    }
}

fn remove_key<S: KeyValueStore + ?Sized>(backend: &S, key: &str) {
    if let Err(e) = backend.remove(key) {
        tracing::warn!("Failed to remove {key} from session storage: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    /// Backend whose writes always fail, reads always miss.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("quota exceeded".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("quota exceeded".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_first_load_is_logged_out() {
        let store = SessionStore::load(MemoryStore::new());
        assert!(!store.is_authenticated());
        assert!(store.session().is_none());
        assert!(store.credential().is_none());
    }

    #[test]
    fn test_set_persists_both_values() {
        let backend = MemoryStore::new();
        let mut store = SessionStore::load(backend.clone());

        store.set("tok1", "t@school.edu");

        assert!(store.is_authenticated());
        assert_eq!(store.credential(), Some("tok1"));
        assert_eq!(store.identity(), Some("t@school.edu"));
        assert_eq!(backend.get(TOKEN_KEY).unwrap().as_deref(), Some("tok1"));
        assert_eq!(
            backend.get(IDENTITY_KEY).unwrap().as_deref(),
            Some("t@school.edu")
        );
    }

    #[test]
    fn test_reload_restores_session() {
        let backend = MemoryStore::new();
        SessionStore::load(backend.clone()).set("tok1", "t@school.edu");

        let reloaded = SessionStore::load(backend);
        assert!(reloaded.is_authenticated());
        assert_eq!(
            reloaded.session(),
            Some(&Session::new("tok1", "t@school.edu"))
        );
    }

    #[test]
    fn test_clear_removes_both_values() {
        let backend = MemoryStore::new();
        let mut store = SessionStore::load(backend.clone());
        store.set("tok1", "t@school.edu");

        store.clear();

        assert!(!store.is_authenticated());
        assert!(backend.get(TOKEN_KEY).unwrap().is_none());
        assert!(backend.get(IDENTITY_KEY).unwrap().is_none());
        assert!(!SessionStore::load(backend).is_authenticated());
    }

    #[test]
    fn test_partial_session_loads_logged_out() {
        let backend = MemoryStore::new();
        backend.set(TOKEN_KEY, "tok1").unwrap();

        let store = SessionStore::load(backend.clone());
        assert!(!store.is_authenticated());
        // The stray value is left alone.
        assert_eq!(backend.get(TOKEN_KEY).unwrap().as_deref(), Some("tok1"));
    }

    #[test]
    fn test_empty_token_is_not_authenticated() {
        let backend = MemoryStore::new();
        backend.set(TOKEN_KEY, "").unwrap();
        backend.set(IDENTITY_KEY, "t@school.edu").unwrap();

        assert!(!SessionStore::load(backend).is_authenticated());
    }

    #[test]
    fn test_empty_identity_is_not_authenticated() {
        let backend = MemoryStore::new();
        backend.set(TOKEN_KEY, "tok1").unwrap();
        backend.set(IDENTITY_KEY, "").unwrap();

        let store = SessionStore::load(backend);
        assert!(!store.is_authenticated());
        assert!(store.session().is_none());
    }

    #[test]
    fn test_set_with_empty_value_stays_logged_out() {
        let backend = MemoryStore::new();
        let mut store = SessionStore::load(backend.clone());
        store.set("tok1", "t@school.edu");

        store.set("", "t@school.edu");
        assert!(!store.is_authenticated());
        assert!(store.session().is_none());
        assert!(backend.get(TOKEN_KEY).unwrap().is_none());

        store.set("tok2", "");
        assert!(store.session().is_none());
        assert!(backend.get(IDENTITY_KEY).unwrap().is_none());
    }

    #[test]
    fn test_storage_failures_are_not_fatal() {
        let mut store = SessionStore::load(BrokenStore);
        assert!(!store.is_authenticated());

        store.set("tok1", "t@school.edu");
        assert!(store.is_authenticated());

        store.clear();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_boxed_backend() {
        let backend = MemoryStore::new();
        let boxed: Box<dyn KeyValueStore> = Box::new(backend.clone());
        let mut store = SessionStore::load(boxed);
        store.set("tok1", "t@school.edu");
        assert_eq!(backend.get(TOKEN_KEY).unwrap().as_deref(), Some("tok1"));
    }
}
