//! HTTP client for the auth endpoints.

use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::Value;

use super::error::AuthError;
use super::form::{AuthForm, AuthMode, AuthRequest};

/// Standard User-Agent header for crewgate requests.
pub const USER_AGENT: &str = concat!("crewgate/", env!("CARGO_PKG_VERSION"));

/// Result of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSuccess {
    pub mode: AuthMode,
    pub userid: String,
    /// `user.usercode` echoed by the login endpoint, when present.
    pub usercode: Option<String>,
}

/// Client for `/api/auth/*` and `/api/health`.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    /// Creates a client for `base_url` (no trailing slash expected).
    ///
    /// `timeout` of `None` lets requests wait for the transport indefinitely.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    /// Validates the form for `mode` and sends it.
    ///
    /// # Errors
    /// Returns the validation, transport, parse or application failure.
    pub async fn submit(&self, form: &AuthForm, mode: AuthMode) -> Result<AuthSuccess, AuthError> {
        let request = form.build_request(mode)?;
        self.send(&request).await
    }

    /// Sends a prepared request and interprets the JSON answer.
    ///
    /// The HTTP status is not inspected; only the body's `ok` field decides.
    ///
    /// # Errors
    /// Returns the transport, parse or application failure.
    pub async fn send(&self, request: &AuthRequest) -> Result<AuthSuccess, AuthError> {
        let url = self.url(request.endpoint());
        tracing::info!(endpoint = request.endpoint(), userid = request.userid(), "auth request");

        let builder = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("accept", "application/json");
        let builder = match request {
            AuthRequest::Login(payload) => builder.json(payload),
            AuthRequest::Register(payload) => builder.json(payload),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| AuthError::transport(classify_reqwest_error(&e)))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| AuthError::transport(format!("Failed to read response body: {e}")))?;

        let result = interpret_response(request, &body);
        match &result {
            Ok(_) => tracing::info!(status = status.as_u16(), "auth request accepted"),
            Err(err) => tracing::warn!(
                status = status.as_u16(),
                kind = %err.kind,
                details = err.details.as_deref().unwrap_or(""),
                "auth request failed: {}",
                err.notice_message()
            ),
        }
        result
    }

    /// Checks `GET /api/health` reports `{"status": "ok"}`.
    ///
    /// # Errors
    /// Returns an error if the server is unreachable or reports anything else.
    pub async fn health(&self) -> Result<()> {
        let url = self.url("/api/health");
        let response = self
            .http
            .get(&url)
            .header("accept", "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to reach {url}"))?;
        let status = response.status();
        let body: Value = response
            .json()
            .await
            .with_context(|| format!("Invalid health response from {url}"))?;

        if status.is_success() && body.get("status").and_then(Value::as_str) == Some("ok") {
            Ok(())
        } else {
            anyhow::bail!("Server unhealthy (HTTP {}): {body}", status.as_u16())
        }
    }
}

fn classify_reqwest_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("Request timed out: {e}")
    } else if e.is_connect() {
        format!("Connection failed: {e}")
    } else if e.is_request() {
        format!("Request error: {e}")
    } else {
        format!("Network error: {e}")
    }
}

/// JSON truthiness: `false`, `null`, `0`, `""` are falsy, everything else truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Decides the outcome of a submission from the raw response body.
///
/// # Errors
/// `Parse` when the body is not JSON (or is `null`); `Application` when `ok`
/// is falsy or missing.
pub fn interpret_response(request: &AuthRequest, body: &[u8]) -> Result<AuthSuccess, AuthError> {
    let json: Value = serde_json::from_slice(body)
        .map_err(|e| AuthError::parse(format!("Response is not JSON: {e}")))?;

    if json.is_null() {
        return Err(AuthError::parse("Response body is null"));
    }

    if !json.get("ok").is_some_and(is_truthy) {
        let message = match json.get("error") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(other) if is_truthy(other) => other.to_string(),
            _ => request.failure_message().to_string(),
        };
        return Err(AuthError::application(message));
    }

    let usercode = json
        .pointer("/user/usercode")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(AuthSuccess {
        mode: request.mode(),
        userid: request.userid().to_string(),
        usercode,
    })
}
