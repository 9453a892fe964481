//! Response envelope and pagination shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The uniform `{status, message, data}` wrapper every backend call is
/// coerced into, with `data` already decoded into a concrete type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub message: String,
    pub data: T,
}

/// Raw executor output: the envelope fields plus the full decoded body.
///
/// `raw` is retained because some list endpoints place pagination metadata
/// beside the envelope (`meta.pagination`, top-level `pagination`) rather
/// than inside `data`; the resource normalizers resolve it from here.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub status: u16,
    pub message: String,
    pub data: Value,
    pub raw: Value,
}

/// The page envelope returned by every listing call.
///
/// When derived locally, `last_page == ceil(total / per_page)` and
/// `items.len() <= per_page`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: i64,
    pub total: i64,
    pub per_page: i64,
    pub last_page: i64,
}
