//! Bearer-token storage shared between the request executor and session code.

use std::sync::Mutex;

/// Storage for the admin bearer token.
///
/// The executor only ever reads it to attach the `Authorization` header.
/// Setting and clearing belong to session-lifecycle code (login, logout, and
/// the reaction to an [`crate::Error::Unauthenticated`] failure).
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: String);
    fn clear(&self);
}

/// In-memory token store. One instance is shared between the [`crate::Client`]
/// and the session layer.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn set(&self, token: String) {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = Some(token);
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}
