//! Response normalization: one uniform outcome per HTTP exchange.
//!
//! The auth backend answers with JSON on the happy path, but error
//! responses arrive in several shapes: structured JSON (`message` or
//! `error` fields), hosting-platform HTML error pages, or an empty body.
//! Everything funnels through [`normalize`], which produces either a
//! [`RawBody`] payload or an [`ApiError`] carrying a human-readable
//! message, the status code, and whatever body was read.
//!
//! Message resolution lives in the probe tables below; per-call-site
//! probing is deliberately absent.

#[cfg(test)]
#[path = "normalize_test.rs"]
mod normalize_test;

use serde_json::Value;

/// Snapshot of a completed HTTP exchange, independent of the transport.
#[derive(Clone, Debug)]
pub struct HttpExchange {
    pub status: u16,
    pub status_text: String,
    pub content_type: Option<String>,
    pub body: String,
}

/// A response body after normalization.
///
/// A declared-JSON body that fails to parse is `Empty`, never an error:
/// the status code alone decides success or failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawBody {
    Json(Value),
    Text(String),
    Empty,
}

/// Uniform failure shape for every remote operation.
///
/// `message` is always non-empty, even when the server sent no body.
/// `status` is `0` for failures that never produced an HTTP response
/// (local input errors, transport failures, SSR stubs).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: u16,
    pub body: RawBody,
}

impl ApiError {
    /// A local input error detected before any network call.
    pub fn input(message: impl Into<String>) -> Self {
        Self { message: message.into(), status: 0, body: RawBody::Empty }
    }

    /// A transport-level failure (request never completed).
    pub fn transport(err: impl std::fmt::Display) -> Self {
        let message = err.to_string();
        let message = if message.trim().is_empty() { "Network error".to_owned() } else { message };
        Self { message, status: 0, body: RawBody::Empty }
    }
}

type Probe = fn(&Value) -> Option<&str>;

/// Ordered message probes for failure bodies. First hit wins; a JSON body
/// matching none of these is dumped verbatim.
const ERROR_MESSAGE_PROBES: &[Probe] = &[
    |v| v.get("message").and_then(Value::as_str),
    |v| v.get("error").and_then(Value::as_str),
];

/// Ordered message probes for success payloads. The backend is not fully
/// under our control, so the payload shape is probed defensively.
const SUCCESS_MESSAGE_PROBES: &[Probe] = &[
    |v| v.get("message").and_then(Value::as_str),
    |v| v.get("success").and_then(Value::as_str),
    |v| v.get("data").and_then(|d| d.get("message")).and_then(Value::as_str),
];

/// Turn a completed exchange into a payload or a uniform error.
///
/// Never panics and never surfaces a parse failure: once the exchange has
/// completed, the only failure signal is the returned [`ApiError`].
///
/// # Errors
///
/// Returns [`ApiError`] for any non-2xx status, with the message resolved
/// in order: JSON `message` field, JSON `error` field, JSON dump, raw
/// text body, transport status text, `HTTP <status>`.
pub fn normalize(exchange: &HttpExchange) -> Result<RawBody, ApiError> {
    let body = read_body(exchange);
    if (200..300).contains(&exchange.status) {
        return Ok(body);
    }
    let message = error_message(&body, exchange.status, &exchange.status_text);
    Err(ApiError { message, status: exchange.status, body })
}

/// Probe a success payload for a human-readable message.
///
/// Returns `None` when the payload carries nothing usable; callers fall
/// back to a form-specific default instead of failing.
pub fn success_message(body: &RawBody) -> Option<String> {
    match body {
        RawBody::Json(v) => SUCCESS_MESSAGE_PROBES
            .iter()
            .find_map(|probe| probe(v))
            .map(str::to_owned),
        RawBody::Text(t) => Some(t.clone()),
        RawBody::Empty => None,
    }
}

fn read_body(exchange: &HttpExchange) -> RawBody {
    if declares_json(exchange.content_type.as_deref()) {
        match serde_json::from_str::<Value>(&exchange.body) {
            Ok(Value::Null) | Err(_) => RawBody::Empty,
            Ok(v) => RawBody::Json(v),
        }
    } else if exchange.body.is_empty() {
        RawBody::Empty
    } else {
        RawBody::Text(exchange.body.clone())
    }
}

fn declares_json(content_type: Option<&str>) -> bool {
    let Some(content_type) = content_type else {
        return false;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || mime.ends_with("+json")
}

fn error_message(body: &RawBody, status: u16, status_text: &str) -> String {
    match body {
        RawBody::Json(v) => ERROR_MESSAGE_PROBES
            .iter()
            .find_map(|probe| probe(v))
            .map_or_else(|| v.to_string(), str::to_owned),
        RawBody::Text(t) => t.clone(),
        RawBody::Empty => {
            if status_text.trim().is_empty() {
                format!("HTTP {status}")
            } else {
                status_text.to_owned()
            }
        }
    }
}
