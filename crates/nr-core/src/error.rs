/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Error taxonomy for the nr-* crates.
//!
//! Every failed API call resolves to exactly one [`Error`]. The HTTP-derived
//! variants all wrap the same [`ApiError`] payload, so callers can match a
//! single variant (say, [`Error::RateLimit`]) or handle everything through
//! [`Error::status_code`], [`Error::message`] and [`Error::body`].

use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Status, message and raw body shared by every API failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
  /// HTTP status code, `None` when no response was received
  pub status_code: Option<u16>,

  /// Human readable message, taken from the response body when present
  pub message: String,

  /// Raw response body exactly as received
  pub body: Option<String>,

  /// Server supplied `Retry-After` hint (rate limit responses only)
  pub retry_after: Option<Duration>,
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.status_code {
      Some(status) => write!(f, "{} (HTTP {})", self.message, status),
      None => write!(f, "{}", self.message),
    }
  }
}

/// The main error type for nr-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// API key missing or invalid (HTTP 401)
  #[error("Authentication failed: {0}")]
  Authentication(ApiError),

  /// API key lacks access to the resource (HTTP 403)
  #[error("Permission denied: {0}")]
  Permission(ApiError),

  /// Resource does not exist (HTTP 404)
  #[error("Not found: {0}")]
  NotFound(ApiError),

  /// Too many requests (HTTP 429)
  #[error("Rate limit exceeded: {0}")]
  RateLimit(ApiError),

  /// Server side failure (HTTP 5xx)
  #[error("Server error: {0}")]
  Server(ApiError),

  /// Any other non-2xx status, or a connection level failure with no status
  #[error("API error: {0}")]
  Api(ApiError),

  /// Request issued through a client that has already been closed
  #[error("Client session is closed")]
  Closed,

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Successful response whose body did not match the expected shape
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// Base URL or request URL could not be built
  #[error("Invalid URL: {0}")]
  InvalidUrl(#[from] url::ParseError),
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  Authentication,
  Permission,
  NotFound,
  RateLimit,
  Server,
  Api,
  Closed,
  Config,
  EnvVar,
  Serde,
  InvalidUrl,
}

impl Error {
  /// Map a non-2xx response onto its error variant.
  ///
  /// `body` is kept verbatim. The message comes from the body's `error`
  /// field, then its `message` field, and falls back to a generic text when
  /// the body is empty, not JSON, or carries neither field.
  ///
  /// Only for failed responses: `status` must not be a 2xx code.
  pub fn from_response(status: u16, body: impl Into<String>) -> Self {
    debug_assert!(!(200..300).contains(&status), "from_response called with success status {}", status);
    let body = body.into();
    let message = extract_message(&body)
      .unwrap_or_else(|| format!("API request failed with status {}", status));

    let payload =
      ApiError { status_code: Some(status), message, body: Some(body), retry_after: None };

    match status {
      401 => Error::Authentication(payload),
      403 => Error::Permission(payload),
      404 => Error::NotFound(payload),
      429 => Error::RateLimit(payload),
      500..=599 => Error::Server(payload),
      _ => Error::Api(payload),
    }
  }

  /// Failure before any response arrived: refused connection, DNS, timeout
  pub fn connection(message: impl Into<String>) -> Self {
    Error::Api(ApiError { status_code: None, message: message.into(), body: None, retry_after: None })
  }

  /// Attach a `Retry-After` hint. Only rate limit errors keep it.
  pub fn with_retry_after(mut self, retry_after: Option<Duration>) -> Self {
    if let Error::RateLimit(ref mut payload) = self {
      payload.retry_after = retry_after;
    }
    self
  }

  /// Shared payload of the HTTP-derived variants
  pub fn api_error(&self) -> Option<&ApiError> {
    match self {
      Error::Authentication(e)
      | Error::Permission(e)
      | Error::NotFound(e)
      | Error::RateLimit(e)
      | Error::Server(e)
      | Error::Api(e) => Some(e),
      _ => None,
    }
  }

  /// HTTP status of the failed call, if a response was received
  pub fn status_code(&self) -> Option<u16> {
    self.api_error().and_then(|e| e.status_code)
  }

  /// Message extracted from the API, or this error's display text
  pub fn message(&self) -> Cow<'_, str> {
    match self.api_error() {
      Some(e) => Cow::Borrowed(e.message.as_str()),
      None => Cow::Owned(self.to_string()),
    }
  }

  /// Raw response body, if a response was received
  pub fn body(&self) -> Option<&str> {
    self.api_error().and_then(|e| e.body.as_deref())
  }

  /// `Retry-After` hint carried by a rate limit error
  pub fn retry_after(&self) -> Option<Duration> {
    match self {
      Error::RateLimit(e) => e.retry_after,
      _ => None,
    }
  }

  /// True for transport failures that never produced a status code
  pub fn is_connection(&self) -> bool {
    matches!(self, Error::Api(ApiError { status_code: None, .. }))
  }

  pub fn kind(&self) -> ErrorKind {
    match self {
      Error::Authentication(_) => ErrorKind::Authentication,
      Error::Permission(_) => ErrorKind::Permission,
      Error::NotFound(_) => ErrorKind::NotFound,
      Error::RateLimit(_) => ErrorKind::RateLimit,
      Error::Server(_) => ErrorKind::Server,
      Error::Api(_) => ErrorKind::Api,
      Error::Closed => ErrorKind::Closed,
      Error::Config(_) => ErrorKind::Config,
      Error::EnvVar(_) => ErrorKind::EnvVar,
      Error::Serde(_) => ErrorKind::Serde,
      Error::InvalidUrl(_) => ErrorKind::InvalidUrl,
    }
  }
}

fn extract_message(body: &str) -> Option<String> {
  let Value::Object(map) = serde_json::from_str::<Value>(body).ok()? else {
    return None;
  };
  ["error", "message"]
    .iter()
    .find_map(|key| map.get(*key).and_then(Value::as_str))
    .map(str::to_string)
}

/// Result type alias for nr-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mapped_statuses() {
    let cases = [
      (401, ErrorKind::Authentication),
      (403, ErrorKind::Permission),
      (404, ErrorKind::NotFound),
      (429, ErrorKind::RateLimit),
    ];
    for (status, kind) in cases {
      assert_eq!(Error::from_response(status, "{}").kind(), kind, "status {}", status);
    }
  }

  #[test]
  fn test_every_5xx_is_server_error() {
    for status in 500..=599 {
      let err = Error::from_response(status, "");
      assert_eq!(err.kind(), ErrorKind::Server, "status {}", status);
      assert_eq!(err.status_code(), Some(status));
    }
  }

  #[test]
  fn test_unmapped_statuses_fall_back_to_base_kind() {
    for status in [300, 304, 400, 402, 405, 409, 410, 418, 422, 499, 600] {
      let err = Error::from_response(status, "nope");
      assert_eq!(err.kind(), ErrorKind::Api, "status {}", status);
      assert_eq!(err.status_code(), Some(status));
    }
  }

  #[test]
  #[cfg(debug_assertions)]
  #[should_panic(expected = "success status 200")]
  fn test_success_status_is_not_an_error() {
    let _ = Error::from_response(200, "{}");
  }

  #[test]
  fn test_body_is_kept_verbatim() {
    let raw = "  {\"error\": \"bad key\", \"detail\": [1, 2]}\n";
    let err = Error::from_response(401, raw);
    assert_eq!(err.body(), Some(raw));
    assert_eq!(err.message(), "bad key");
  }

  #[test]
  fn test_message_prefers_error_then_message_field() {
    let err = Error::from_response(429, r#"{"message": "slow down"}"#);
    assert_eq!(err.message(), "slow down");

    let err = Error::from_response(429, r#"{"error": "quota", "message": "slow down"}"#);
    assert_eq!(err.message(), "quota");

    // non-string error field is skipped
    let err = Error::from_response(400, r#"{"error": {"code": 7}, "message": "bad input"}"#);
    assert_eq!(err.message(), "bad input");
  }

  #[test]
  fn test_generic_message_for_unusable_bodies() {
    for body in ["", "<html>502 Bad Gateway</html>", "[1,2,3]", r#"{"detail": "x"}"#] {
      let err = Error::from_response(502, body);
      assert_eq!(err.message(), "API request failed with status 502");
      assert_eq!(err.body(), Some(body));
    }
  }

  #[test]
  fn test_connection_error_has_no_status() {
    let err = Error::connection("connection refused");
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status_code(), None);
    assert_eq!(err.body(), None);
    assert_eq!(err.message(), "connection refused");
    assert!(err.is_connection());
    assert!(!Error::from_response(500, "").is_connection());
  }

  #[test]
  fn test_retry_after_only_on_rate_limit() {
    let hint = Some(Duration::from_secs(12));
    let err = Error::from_response(429, "").with_retry_after(hint);
    assert_eq!(err.retry_after(), hint);

    let err = Error::from_response(503, "").with_retry_after(hint);
    assert_eq!(err.retry_after(), None);
  }

  #[test]
  fn test_non_api_errors_have_no_payload() {
    let err = Error::Closed;
    assert!(err.api_error().is_none());
    assert_eq!(err.status_code(), None);
    assert_eq!(err.message(), "Client session is closed");
  }

  #[test]
  fn test_display_includes_status() {
    let err = Error::from_response(404, r#"{"error": "story not found"}"#);
    assert_eq!(err.to_string(), "Not found: story not found (HTTP 404)");
  }
}
