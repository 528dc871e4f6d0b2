//! Auth API client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, funneled through
//! [`normalize`](super::normalize). Server-side (SSR): stubs returning a
//! uniform error, since these endpoints are only meaningful in the browser.
//!
//! The base URL is explicit construction-time configuration; there is no
//! process-wide mutable default. `AuthApi::default()` reads the
//! compile-time `AUTH_API_URL` override and falls back to localhost for
//! local development.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Serialize;

use super::normalize::{ApiError, RawBody};
#[cfg(feature = "hydrate")]
use super::normalize::{HttpExchange, normalize};

const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Registration payload: email plus plaintext password.
///
/// Transient: built at submit time, consumed by one request, dropped.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// HTTP client for the auth endpoints.
#[derive(Clone, Debug)]
pub struct AuthApi {
    base_url: String,
}

impl Default for AuthApi {
    fn default() -> Self {
        Self::new(option_env!("AUTH_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }
}

impl AuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Register a new account via `POST /api/auth/register`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for any non-2xx response or transport failure.
    pub async fn register(&self, credentials: &Credentials) -> Result<RawBody, ApiError> {
        self.post_json("/api/auth/register", credentials).await
    }

    /// Log in via `POST /api/auth/login`. Session establishment (cookies,
    /// tokens) is the backend's concern; the caller only sees the message.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for any non-2xx response or transport failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<RawBody, ApiError> {
        self.post_json(
            "/api/auth/login",
            &serde_json::json!({ "email": email, "password": password }),
        )
        .await
    }

    /// Request a password-reset email via `POST /api/auth/forgot-password`.
    ///
    /// # Errors
    ///
    /// Fails fast with an input [`ApiError`] when the email is empty, before
    /// any network call; otherwise errors as the other operations do.
    pub async fn forgot_password(&self, email: &str) -> Result<RawBody, ApiError> {
        if email.trim().is_empty() {
            return Err(ApiError::input("Email is required."));
        }
        self.post_json("/api/auth/forgot-password", &serde_json::json!({ "email": email }))
            .await
    }

    /// Reset the password via `POST /api/auth/reset-password/{token}`.
    ///
    /// The token rides in the path, percent-encoded; the body carries only
    /// the new password.
    ///
    /// # Errors
    ///
    /// Fails fast with an input [`ApiError`] when token or password is
    /// empty, before any network call.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<RawBody, ApiError> {
        if token.trim().is_empty() {
            return Err(ApiError::input("Invalid or missing token."));
        }
        if new_password.is_empty() {
            return Err(ApiError::input("Password is required."));
        }
        self.post_json(
            &reset_password_path(token),
            &serde_json::json!({ "password": new_password }),
        )
        .await
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<RawBody, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = format!("{}{path}", self.base_url);
            let resp = gloo_net::http::Request::post(&url)
                .json(body)
                .map_err(ApiError::transport)?
                .send()
                .await
                .map_err(ApiError::transport)?;
            let exchange = snapshot_response(resp).await;
            normalize(&exchange)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::transport("not available on server"))
        }
    }
}

/// Characters escaped when embedding a value in a URL path segment.
/// The path set of the WHATWG URL standard, plus `/` and `%` so a token
/// can never add path components or smuggle a pre-encoded escape.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%')
    .add(b'\\')
    .add(b'^')
    .add(b'|');

pub(crate) fn reset_password_path(token: &str) -> String {
    format!("/api/auth/reset-password/{}", encode_path_segment(token))
}

fn encode_path_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

/// Read a completed `gloo-net` response into a transport-independent
/// snapshot. A body read failure is treated as an empty body.
#[cfg(feature = "hydrate")]
async fn snapshot_response(resp: gloo_net::http::Response) -> HttpExchange {
    let content_type = resp.headers().get("content-type");
    let status = resp.status();
    let status_text = resp.status_text();
    let body = resp.text().await.unwrap_or_default();
    HttpExchange { status, status_text, content_type, body }
}
