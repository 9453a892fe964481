//! Shape-tolerant normalization of backend payloads.
//!
//! The backend is inconsistent about where it puts things: list items may be
//! a bare array or nested under `items`/`data`, pagination metadata can live
//! in four different places, and numeric fields arrive as numbers or strings
//! depending on the endpoint. Field resolution here is table-driven: each
//! ambiguous field declares an ordered list of candidate dot paths as plain
//! `const` data, evaluated first-match. Normalization never fails; malformed
//! or missing fields degrade to defaults (0, empty string, empty list,
//! `None`).

mod booking;
mod checkout;
mod destination;
mod user;

pub(crate) use booking::booking;
pub(crate) use checkout::checkout;
pub(crate) use destination::destination;
pub(crate) use user::user;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use tamasya_api::types::{Envelope, Page};

/// Candidate locations of the pagination metadata block, most specific
/// first, evaluated against the full decoded response body.
const PAGING_SOURCES: &[&str] = &[
    "data.meta.pagination",
    "meta.pagination",
    "data.pagination",
    "pagination",
];

/// Keys under which a list payload may nest its items when `data` itself is
/// not the array. `data` covers the pending-cancellations shape, which pages
/// under `{data: [...], current_page, ...}`.
const ITEM_KEYS: &[&str] = &["items", "data"];

/// Resolves a dot path against a JSON value. `null` counts as absent.
pub(crate) fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

/// First present value among the candidate paths.
pub(crate) fn first_of<'a>(root: &'a Value, paths: &[&str]) -> Option<&'a Value> {
    paths.iter().find_map(|path| lookup(root, path))
}

/// Number-or-numeric-string coercion. Non-finite and unparsable values
/// become 0, never NaN.
pub(crate) fn num_or_zero(value: Option<&Value>) -> f64 {
    let n = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

pub(crate) fn int_or_zero(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    }
}

pub(crate) fn opt_int(value: Option<&Value>) -> Option<i64> {
    match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// String coercion; numbers are rendered (ids arrive both ways).
pub(crate) fn str_or_empty(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

pub(crate) fn opt_str(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn str_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

pub(crate) fn value_list(value: Option<&Value>) -> Vec<Value> {
    match value {
        Some(Value::Array(items)) => items.clone(),
        _ => Vec::new(),
    }
}

pub(crate) fn opt_datetime(value: Option<&Value>) -> Option<DateTime<Utc>> {
    value?
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

pub(crate) fn opt_date(value: Option<&Value>) -> Option<NaiveDate> {
    value?.as_str().and_then(|s| s.parse().ok())
}

pub(crate) struct PageMeta {
    pub current_page: i64,
    pub per_page: i64,
    pub total: i64,
    pub last_page: i64,
}

/// Synthesizes the pagination fields from whichever location the backend
/// used. Each field falls back independently: metadata block, then flat
/// fields on `data`, then the request parameters (`total` defaults to the
/// item count, `last_page` to 1).
pub(crate) fn resolve_paging(
    raw: &Value,
    requested_page: i64,
    requested_per_page: i64,
    item_count: usize,
) -> PageMeta {
    let block = first_of(raw, PAGING_SOURCES);
    let field = |name: &str| -> Option<i64> {
        block
            .and_then(|b| opt_int(b.get(name)))
            .or_else(|| opt_int(lookup(raw, &format!("data.{name}"))))
    };
    PageMeta {
        current_page: field("current_page").unwrap_or(requested_page),
        per_page: field("per_page").unwrap_or(requested_per_page),
        total: field("total").unwrap_or(item_count as i64),
        last_page: field("last_page").unwrap_or(1),
    }
}

/// Extracts the raw item list from a `data` payload.
pub(crate) fn items_of(data: &Value) -> Vec<Value> {
    if let Value::Array(items) = data {
        return items.clone();
    }
    for key in ITEM_KEYS {
        if let Some(Value::Array(items)) = data.get(*key) {
            return items.clone();
        }
    }
    Vec::new()
}

/// Builds a page envelope from a raw list response, mapping each item
/// through the given per-resource normalizer.
pub(crate) fn page_from_envelope<T>(
    envelope: &Envelope,
    requested_page: i64,
    requested_per_page: i64,
    map: impl Fn(&Value) -> T,
) -> Page<T> {
    let items: Vec<T> = items_of(&envelope.data).iter().map(&map).collect();
    let meta = resolve_paging(&envelope.raw, requested_page, requested_per_page, items.len());
    Page {
        items,
        current_page: meta.current_page,
        total: meta.total,
        per_page: meta.per_page,
        last_page: meta.last_page,
    }
}

/// Detail payloads arrive either wrapped (`{destination: {...}}`) or bare.
pub(crate) fn unwrap_detail<'a>(data: &'a Value, key: &str) -> &'a Value {
    match data.get(key) {
        Some(inner) if !inner.is_null() => inner,
        _ => data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lookup_resolves_nested_paths() {
        let value = json!({"owner": {"id": "abc"}});
        assert_eq!(lookup(&value, "owner.id"), Some(&json!("abc")));
        assert_eq!(lookup(&value, "owner.name"), None);
        assert_eq!(lookup(&value, "missing.id"), None);
    }

    #[test]
    fn lookup_treats_null_as_absent() {
        let value = json!({"owner": null});
        assert_eq!(lookup(&value, "owner"), None);
    }

    #[test]
    fn first_of_respects_priority() {
        let both = json!({"owner_id": "flat", "owner": {"id": "nested"}});
        assert_eq!(
            first_of(&both, &["owner_id", "owner.id"]),
            Some(&json!("flat"))
        );
        let nested_only = json!({"owner": {"id": "nested"}});
        assert_eq!(
            first_of(&nested_only, &["owner_id", "owner.id"]),
            Some(&json!("nested"))
        );
    }

    #[test]
    fn num_or_zero_coerces_strings_and_rejects_garbage() {
        assert_eq!(num_or_zero(Some(&json!(42.5))), 42.5);
        assert_eq!(num_or_zero(Some(&json!("100000"))), 100000.0);
        assert_eq!(num_or_zero(Some(&json!("4.9"))), 4.9);
        assert_eq!(num_or_zero(Some(&json!("not a number"))), 0.0);
        assert_eq!(num_or_zero(Some(&json!(null))), 0.0);
        assert_eq!(num_or_zero(None), 0.0);
    }

    #[test]
    fn paging_from_meta_pagination() {
        let raw = json!({
            "data": [1, 2, 3],
            "meta": {"pagination": {"current_page": 2, "per_page": 10, "total": 23, "last_page": 3}}
        });
        let meta = resolve_paging(&raw, 1, 15, 3);
        assert_eq!(meta.current_page, 2);
        assert_eq!(meta.per_page, 10);
        assert_eq!(meta.total, 23);
        assert_eq!(meta.last_page, 3);
    }

    #[test]
    fn paging_from_flat_data_fields() {
        let raw = json!({
            "data": {"items": [1], "current_page": 4, "per_page": 5, "total": 16, "last_page": 4}
        });
        let meta = resolve_paging(&raw, 1, 15, 1);
        assert_eq!(meta.current_page, 4);
        assert_eq!(meta.per_page, 5);
        assert_eq!(meta.total, 16);
        assert_eq!(meta.last_page, 4);
    }

    #[test]
    fn paging_defaults_when_absent() {
        let raw = json!({"data": [1, 2]});
        let meta = resolve_paging(&raw, 3, 20, 2);
        assert_eq!(meta.current_page, 3);
        assert_eq!(meta.per_page, 20);
        assert_eq!(meta.total, 2);
        assert_eq!(meta.last_page, 1);
    }

    #[test]
    fn paging_block_takes_priority_over_flat_fields() {
        let raw = json!({
            "data": {"items": [], "current_page": 9},
            "meta": {"pagination": {"current_page": 2}}
        });
        let meta = resolve_paging(&raw, 1, 15, 0);
        assert_eq!(meta.current_page, 2);
    }

    #[test]
    fn items_of_handles_all_shapes() {
        assert_eq!(items_of(&json!([1, 2])).len(), 2);
        assert_eq!(items_of(&json!({"items": [1, 2, 3]})).len(), 3);
        assert_eq!(items_of(&json!({"data": [1]})).len(), 1);
        assert_eq!(items_of(&json!({"something": "else"})).len(), 0);
        assert_eq!(items_of(&json!(null)).len(), 0);
    }

    #[test]
    fn unwrap_detail_prefers_wrapped_key() {
        let wrapped = json!({"destination": {"name": "Bromo"}});
        assert_eq!(unwrap_detail(&wrapped, "destination")["name"], "Bromo");
        let bare = json!({"name": "Bromo"});
        assert_eq!(unwrap_detail(&bare, "destination")["name"], "Bromo");
    }
}
