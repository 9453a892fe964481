//! HTTP request executor for the admin backend.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::{query::Query, token::TokenStore, types::Envelope, Error};

const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the admin backend.
///
/// Attaches a bearer token when the shared token store holds one, coerces
/// every response into the `{status, message, data}` envelope, and classifies
/// failures into [`Error`] variants. No retries and no timeout policy beyond
/// the transport's own 30 seconds; resilience is the caller's concern.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    tokens: Option<Arc<dyn TokenStore>>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a client pointing at the local development backend.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL. Used for deployments and for
    /// testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens: None,
        }
    }

    /// Attaches a token store. When the store holds a token, every request
    /// carries it as a bearer `Authorization` header; otherwise requests go
    /// out unauthenticated and the backend decides.
    pub fn with_token_store(mut self, tokens: Arc<dyn TokenStore>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    pub async fn get(&self, path: &str) -> Result<Envelope, Error> {
        self.execute(Method::GET, path, None, None::<&Value>).await
    }

    pub async fn get_with<Q: Query>(&self, path: &str, query: &Q) -> Result<Envelope, Error> {
        self.execute(Method::GET, path, Some(query as &dyn Query), None::<&Value>)
            .await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope, Error> {
        self.execute(Method::POST, path, None, Some(body)).await
    }

    /// POST without a request body (e.g. logout).
    pub async fn post_empty(&self, path: &str) -> Result<Envelope, Error> {
        self.execute(Method::POST, path, None, None::<&Value>).await
    }

    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope, Error> {
        self.execute(Method::PATCH, path, None, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Envelope, Error> {
        self.execute(Method::DELETE, path, None, None::<&Value>)
            .await
    }

    fn url_for(&self, path: &str, query: Option<&dyn Query>) -> Result<Url, Error> {
        let joined = format!("{}{}", self.base_url, path);
        let url = Url::parse(&joined).map_err(|e| {
            tracing::error!("invalid URL constructed for {}: {}", joined, e);
            Error::Network {
                endpoint: joined.clone(),
                message: e.to_string(),
            }
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: Option<&dyn Query>,
        body: Option<&B>,
    ) -> Result<Envelope, Error> {
        let url = self.url_for(path, query)?;
        let endpoint = url.to_string();

        let mut req = self
            .http
            .request(method, url)
            .timeout(REQUEST_TIMEOUT)
            .header("content-type", "application/json")
            .header("accept", "application/json, text/plain, */*");
        if let Some(tokens) = &self.tokens {
            if let Some(token) = tokens.get() {
                req = req.bearer_auth(token);
            }
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await.map_err(|e| {
            tracing::error!("cannot reach {}: {}", endpoint, e);
            Error::Network {
                endpoint: endpoint.clone(),
                message: e.to_string(),
            }
        })?;

        let status = resp.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(Envelope {
                status: status.as_u16(),
                message: "No content".to_string(),
                data: Value::Null,
                raw: Value::Null,
            });
        }

        let reason = status.canonical_reason().unwrap_or_default().to_string();
        let text = resp.text().await.map_err(|e| {
            tracing::error!("failed to read response body from {}: {}", endpoint, e);
            Error::Network {
                endpoint: endpoint.clone(),
                message: e.to_string(),
            }
        })?;

        // Permissive decode: a non-JSON body is passed through as text, never
        // escalated to an error.
        let decoded = match serde_json::from_str::<Value>(&text) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("non-JSON body from {} ({}), treating as text", endpoint, e);
                Value::String(text.clone())
            }
        };

        if !status.is_success() {
            let message = decoded
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("API Error")
                .to_string();
            if status == StatusCode::UNAUTHORIZED
                || message.to_lowercase().contains("unauthenticated")
            {
                tracing::error!("authentication rejected by {} ({})", endpoint, status);
                return Err(Error::Unauthenticated {
                    status: status.as_u16(),
                    message,
                });
            }
            tracing::error!(
                "request to {} failed with status {}: {}",
                endpoint,
                status,
                truncate_body(&text)
            );
            return Err(Error::Http {
                status: status.as_u16(),
                message,
                body: decoded,
            });
        }

        Ok(coerce_envelope(status.as_u16(), reason, decoded))
    }
}

/// Lifts a decoded body into the uniform envelope. Bodies already shaped as
/// `{status, message, data}` are taken at face value (falling back to the
/// HTTP status and reason for missing fields); anything else becomes the
/// `data` of a synthesized envelope.
fn coerce_envelope(http_status: u16, reason: String, decoded: Value) -> Envelope {
    let raw = decoded.clone();
    match &decoded {
        Value::Object(map) if map.contains_key("data") => {
            let status = map
                .get("status")
                .and_then(Value::as_u64)
                .and_then(|s| u16::try_from(s).ok())
                .unwrap_or(http_status);
            let message = map
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or(reason);
            let data = map.get("data").cloned().unwrap_or(Value::Null);
            Envelope {
                status,
                message,
                data,
                raw,
            }
        }
        _ => Envelope {
            status: http_status,
            message: reason,
            data: decoded,
            raw,
        },
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Slicing at a fixed byte offset panics inside a multibyte character.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerce_envelope_passthrough() {
        let body = json!({"status": 200, "message": "Success", "data": {"items": []}});
        let envelope = coerce_envelope(200, "OK".to_string(), body);
        assert_eq!(envelope.status, 200);
        assert_eq!(envelope.message, "Success");
        assert_eq!(envelope.data, json!({"items": []}));
    }

    #[test]
    fn coerce_envelope_wraps_bare_payload() {
        let body = json!([1, 2, 3]);
        let envelope = coerce_envelope(200, "OK".to_string(), body.clone());
        assert_eq!(envelope.status, 200);
        assert_eq!(envelope.message, "OK");
        assert_eq!(envelope.data, body);
    }

    #[test]
    fn coerce_envelope_fills_missing_fields() {
        let body = json!({"data": [1]});
        let envelope = coerce_envelope(201, "Created".to_string(), body);
        assert_eq!(envelope.status, 201);
        assert_eq!(envelope.message, "Created");
        assert_eq!(envelope.data, json!([1]));
    }

    #[test]
    fn coerce_envelope_rejects_out_of_range_status() {
        let body = json!({"status": 100000, "message": "Success", "data": []});
        let envelope = coerce_envelope(200, "OK".to_string(), body);
        assert_eq!(envelope.status, 200);
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = format!("{}€ and some trailing text", "a".repeat(1999));
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert_eq!(truncated.trim_end_matches("...[truncated]"), "a".repeat(1999));

        let short = "short body";
        assert_eq!(truncate_body(short), short);

        let exactly_at_boundary = "b".repeat(2000);
        assert_eq!(truncate_body(&exactly_at_boundary), exactly_at_boundary);
    }
}
