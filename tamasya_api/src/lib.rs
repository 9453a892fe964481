//! Transport layer for the Tamasya admin API.
//!
//! Wraps the admin REST backend behind a [`Client`] that coerces every
//! response into a uniform `{status, message, data}` envelope and classifies
//! failures into a small typed taxonomy. Higher layers decide what to do with
//! a [`Error::Network`] failure; this crate never substitutes data on its own.

mod client;
pub mod endpoints;
mod errors;
mod query;
mod token;
pub mod types;

pub use self::client::Client;
pub use self::errors::Error;
pub use self::query::{
    BookingQuery, CheckoutQuery, DestinationQuery, Query, SortDirection, UserQuery, UserSortBy,
};
pub use self::token::{MemoryTokenStore, TokenStore};
