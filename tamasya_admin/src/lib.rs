//! Admin-facing service layer for the Tamasya booking platform.
//!
//! Sits between the admin UI and the REST backend. Every operation goes
//! through [`tamasya_api::Client`], normalizes the response into canonical
//! DTOs with a synthesized page envelope, and - when the backend is
//! unreachable and fallback is enabled - answers from an in-memory
//! [`MockStore`] instead, so the admin screens stay usable against a dead
//! backend. HTTP-level failures (4xx/5xx) always propagate; only transport
//! failures fall back.

mod bookings;
mod checkouts;
mod destinations;
mod error;
pub mod mock;
mod norm;
mod session;
pub mod types;
mod users;

use std::sync::Arc;

pub use tamasya_api::{
    BookingQuery, CheckoutQuery, Client, DestinationQuery, Query, SortDirection, UserQuery,
    UserSortBy,
};

pub use self::error::AdminError;
pub use self::mock::MockStore;

use tamasya_api::MemoryTokenStore;

/// Whether network failures are answered from the mock store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Answer from the mock store when the backend is unreachable.
    #[default]
    Enabled,
    /// Propagate network failures to the caller.
    Disabled,
}

/// Entry point for all admin operations.
///
/// Owns the HTTP client, the session token store, and the fallback mock
/// store. Construct one per process and share it; all methods take `&self`.
pub struct AdminApi {
    client: Client,
    tokens: Arc<MemoryTokenStore>,
    mock: MockStore,
    fallback: FallbackPolicy,
}

impl Default for AdminApi {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminApi {
    /// Service pointing at the local development backend.
    pub fn new() -> Self {
        let tokens = Arc::new(MemoryTokenStore::default());
        Self {
            client: Client::new().with_token_store(tokens.clone()),
            tokens,
            mock: MockStore::with_seed_data(),
            fallback: FallbackPolicy::default(),
        }
    }

    /// Service pointing at a custom backend URL.
    pub fn with_base_url(base_url: &str) -> Self {
        let tokens = Arc::new(MemoryTokenStore::default());
        Self {
            client: Client::with_base_url(base_url).with_token_store(tokens.clone()),
            tokens,
            mock: MockStore::with_seed_data(),
            fallback: FallbackPolicy::default(),
        }
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_mock_store(mut self, mock: MockStore) -> Self {
        self.mock = mock;
        self
    }

    /// Current session token, if any.
    pub fn token(&self) -> Option<String> {
        use tamasya_api::TokenStore;
        self.tokens.get()
    }

    /// Installs a session token directly, e.g. one restored from persistent
    /// storage at startup.
    pub fn set_token(&self, token: String) {
        use tamasya_api::TokenStore;
        self.tokens.set(token);
    }

    /// Routes an API error to the caller. A rejected authentication drops the
    /// stored session token on the way out, so the next request starts clean.
    fn fail<T>(&self, err: tamasya_api::Error) -> Result<T, AdminError> {
        if let tamasya_api::Error::Unauthenticated { .. } = &err {
            use tamasya_api::TokenStore;
            self.tokens.clear();
        }
        Err(err.into())
    }

    /// Answers a failed request from the mock store if the failure was a
    /// transport failure and fallback is enabled; propagates otherwise.
    fn fall_back<T>(
        &self,
        err: tamasya_api::Error,
        mock_fn: impl FnOnce(&MockStore) -> Result<T, AdminError>,
    ) -> Result<T, AdminError> {
        if err.is_network() && self.fallback == FallbackPolicy::Enabled {
            tracing::debug!("backend unreachable, serving mock data: {}", err);
            return mock_fn(&self.mock);
        }
        self.fail(err)
    }
}
