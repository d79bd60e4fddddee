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

//! HTTP transport layer for NewsRank API requests.
//!
//! [`Transport`] (async) and [`BlockingTransport`] execute the same
//! [`ApiRequest`] descriptors. They share URL construction, header
//! injection, response decoding and error mapping; only the reqwest client
//! flavour and the `.await` differ.
//!
//! Each transport owns a session. Closing it is idempotent, rejects all
//! later calls with [`Error::Closed`], and drops the HTTP client only when
//! the transport built that client itself. An injected client belongs to
//! the caller and is never released here.

use crate::request::ApiRequest;
use nr_core::{Config, Error, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, RETRY_AFTER};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

#[derive(Debug)]
struct SessionState {
  closed: AtomicBool,
  close_count: AtomicUsize,
  owns_http_client: bool,
}

/// Read-only view of a session's lifecycle.
///
/// Stays valid after the client it came from has been dropped, so the
/// release performed by `Drop` can be observed.
#[derive(Debug, Clone)]
pub struct SessionStatus(Arc<SessionState>);

impl SessionStatus {
  pub fn is_closed(&self) -> bool {
    self.0.closed.load(Ordering::Acquire)
  }

  /// Number of times the session was released; never more than one
  pub fn close_count(&self) -> usize {
    self.0.close_count.load(Ordering::Acquire)
  }

  /// Whether the session built, and therefore releases, its HTTP client
  pub fn owns_http_client(&self) -> bool {
    self.0.owns_http_client
  }
}

struct Session<C> {
  http: Mutex<Option<C>>,
  state: Arc<SessionState>,
}

impl<C: Clone> Session<C> {
  fn new(client: C, owned: bool) -> Self {
    Self {
      http: Mutex::new(Some(client)),
      state: Arc::new(SessionState {
        closed: AtomicBool::new(false),
        close_count: AtomicUsize::new(0),
        owns_http_client: owned,
      }),
    }
  }

  /// Handle to the HTTP client, or `Closed` once the session is released
  fn client(&self) -> Result<C> {
    if self.state.closed.load(Ordering::Acquire) {
      return Err(Error::Closed);
    }
    self.http.lock().unwrap_or_else(PoisonError::into_inner).clone().ok_or(Error::Closed)
  }

  fn close(&self) -> bool {
    if self.state.closed.swap(true, Ordering::AcqRel) {
      return false;
    }
    self.state.close_count.fetch_add(1, Ordering::AcqRel);

    if self.state.owns_http_client {
      let released = self.http.lock().unwrap_or_else(PoisonError::into_inner).take();
      drop(released);
      debug!("session closed, owned HTTP client released");
    } else {
      debug!("session closed, injected HTTP client left to its owner");
    }
    true
  }

  fn status(&self) -> SessionStatus {
    SessionStatus(self.state.clone())
  }
}

/// Where and how requests are sent; identical for both transports
#[derive(Clone)]
struct Target {
  base_url: Url,
  auth_header: HeaderValue,
  timeout: Duration,
}

impl Target {
  fn from_config(config: &Config) -> Result<Self> {
    config.validate()?;
    if !config.has_expected_key_prefix() {
      warn!("API key does not start with {}", nr_core::API_KEY_PREFIX);
    }

    let mut auth_header = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
      .map_err(|_| Error::Config("API key contains characters not allowed in a header".to_string()))?;
    auth_header.set_sensitive(true);

    Ok(Self { base_url: config.parsed_base_url()?, auth_header, timeout: config.timeout() })
  }

  /// Base URL plus the request's encoded path segments and query
  fn url_for(&self, request: &ApiRequest) -> Result<Url> {
    let mut url = self.base_url.clone();
    url
      .path_segments_mut()
      .map_err(|_| Error::Config(format!("base URL cannot carry a path: {}", self.base_url)))?
      .pop_if_empty()
      .extend(request.segments());

    if !request.query().is_empty() {
      url.query_pairs_mut().extend_pairs(request.query());
    }
    Ok(url)
  }

  fn headers(&self, request: &ApiRequest) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if request.is_authenticated() {
      headers.insert(AUTHORIZATION, self.auth_header.clone());
    }
    headers
  }
}

fn retry_after(headers: &HeaderMap) -> Option<Duration> {
  headers.get(RETRY_AFTER)?.to_str().ok()?.trim().parse::<u64>().ok().map(Duration::from_secs)
}

/// Failure before a complete response was read
fn connection_error(request: &ApiRequest, err: reqwest::Error) -> Error {
  let message = if err.is_timeout() {
    format!("request timed out: {}", err)
  } else {
    format!("request failed: {}", err)
  };
  warn!("{}: {}", request, message);
  Error::connection(message)
}

/// Body read failed after the status line arrived. A failed status still
/// maps to its typed error; only a success status becomes a connection error.
fn body_error(
  request: &ApiRequest,
  status: StatusCode,
  retry_after: Option<Duration>,
  err: reqwest::Error,
) -> Error {
  if status.is_success() {
    return connection_error(request, err);
  }
  warn!(status = status.as_u16(), "{} failed, body unreadable: {}", request, err);
  Error::from_response(status.as_u16(), String::new()).with_retry_after(retry_after)
}

/// Turn a status and body into the caller's type or a typed error
fn decode<T: DeserializeOwned>(
  request: &ApiRequest,
  status: StatusCode,
  retry_after: Option<Duration>,
  body: String,
) -> Result<T> {
  if !status.is_success() {
    let err = Error::from_response(status.as_u16(), body).with_retry_after(retry_after);
    warn!(status = status.as_u16(), "{} failed: {}", request, err.message());
    return Err(err);
  }

  debug!(status = status.as_u16(), bytes = body.len(), "{} succeeded", request);

  // 204 and empty bodies decode as JSON null
  if status == StatusCode::NO_CONTENT || body.trim().is_empty() {
    return Ok(serde_json::from_value(Value::Null)?);
  }
  Ok(serde_json::from_str(&body)?)
}

fn build_error(e: reqwest::Error) -> Error {
  Error::Config(format!("Failed to create HTTP client: {}", e))
}

/// Async HTTP transport for the NewsRank API
pub struct Transport {
  target: Target,
  session: Session<reqwest::Client>,
}

impl Transport {
  /// Transport with its own HTTP client, released on close
  pub fn new(config: &Config) -> Result<Self> {
    let target = Target::from_config(config)?;
    let client = reqwest::Client::builder()
      .user_agent(nr_core::USER_AGENT)
      .build()
      .map_err(build_error)?;
    Ok(Self { target, session: Session::new(client, true) })
  }

  /// Transport over a caller supplied client (custom TLS, proxy, pool).
  /// The caller keeps ownership; closing the transport leaves it usable.
  pub fn with_http_client(config: &Config, client: reqwest::Client) -> Result<Self> {
    let target = Target::from_config(config)?;
    Ok(Self { target, session: Session::new(client, false) })
  }

  /// Override the per-request timeout taken from the config
  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.target.timeout = timeout;
    self
  }

  /// Send `request` and decode the JSON response into `T`
  #[instrument(skip(self, request), fields(method = %request.method(), path = %request.path()))]
  pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
    let client = self.session.client()?;
    let url = self.target.url_for(&request)?;

    let mut builder = client
      .request(request.method().clone(), url)
      .timeout(self.target.timeout)
      .headers(self.target.headers(&request));
    if let Some(body) = request.body() {
      builder = builder.json(body);
    }

    let response = builder.send().await.map_err(|e| connection_error(&request, e))?;
    let status = response.status();
    let retry_after = retry_after(response.headers());
    let body =
      response.text().await.map_err(|e| body_error(&request, status, retry_after, e))?;

    decode(&request, status, retry_after, body)
  }

  /// Release the session. Returns `true` only for the call that released it.
  pub fn close(&self) -> bool {
    self.session.close()
  }

  pub fn status(&self) -> SessionStatus {
    self.session.status()
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    self.target.base_url.as_str()
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.target.timeout
  }

  /// Full URL `request` would be sent to
  pub fn url_for(&self, request: &ApiRequest) -> Result<Url> {
    self.target.url_for(request)
  }
}

impl fmt::Debug for Transport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Transport")
      .field("base_url", &self.target.base_url.as_str())
      .field("timeout", &self.target.timeout)
      .field("closed", &self.session.status().is_closed())
      .finish()
  }
}

/// Blocking HTTP transport for the NewsRank API.
///
/// Must not be created, used or dropped from inside an async runtime; that
/// is a constraint of `reqwest::blocking`.
pub struct BlockingTransport {
  target: Target,
  session: Session<reqwest::blocking::Client>,
}

impl BlockingTransport {
  /// Transport with its own HTTP client, released on close
  pub fn new(config: &Config) -> Result<Self> {
    let target = Target::from_config(config)?;
    let client = reqwest::blocking::Client::builder()
      .user_agent(nr_core::USER_AGENT)
      .build()
      .map_err(build_error)?;
    Ok(Self { target, session: Session::new(client, true) })
  }

  /// Transport over a caller supplied client; the caller keeps ownership
  pub fn with_http_client(config: &Config, client: reqwest::blocking::Client) -> Result<Self> {
    let target = Target::from_config(config)?;
    Ok(Self { target, session: Session::new(client, false) })
  }

  /// Override the per-request timeout taken from the config
  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.target.timeout = timeout;
    self
  }

  /// Send `request`, blocking until the response is decoded or the timeout expires
  #[instrument(skip(self, request), fields(method = %request.method(), path = %request.path()))]
  pub fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
    let client = self.session.client()?;
    let url = self.target.url_for(&request)?;

    let mut builder = client
      .request(request.method().clone(), url)
      .timeout(self.target.timeout)
      .headers(self.target.headers(&request));
    if let Some(body) = request.body() {
      builder = builder.json(body);
    }

    let response = builder.send().map_err(|e| connection_error(&request, e))?;
    let status = response.status();
    let retry_after = retry_after(response.headers());
    let body = response.text().map_err(|e| body_error(&request, status, retry_after, e))?;

    decode(&request, status, retry_after, body)
  }

  /// Release the session. Returns `true` only for the call that released it.
  pub fn close(&self) -> bool {
    self.session.close()
  }

  pub fn status(&self) -> SessionStatus {
    self.session.status()
  }

  pub fn base_url(&self) -> &str {
    self.target.base_url.as_str()
  }

  pub fn timeout(&self) -> Duration {
    self.target.timeout
  }

  pub fn url_for(&self, request: &ApiRequest) -> Result<Url> {
    self.target.url_for(request)
  }
}

impl fmt::Debug for BlockingTransport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("BlockingTransport")
      .field("base_url", &self.target.base_url.as_str())
      .field("timeout", &self.target.timeout)
      .field("closed", &self.session.status().is_closed())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use nr_core::ErrorKind;
  use serde_json::json;
  use wiremock::matchers::{header, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  fn config(base_url: &str) -> Config {
    let mut config = Config::new("nrf_test_key");
    config.base_url = base_url.to_string();
    config
  }

  fn mock_transport() -> Transport {
    Transport::new(&config("https://mock.newsrank.test/api/v1")).expect("transport")
  }

  #[test]
  fn test_build_url() {
    let transport = mock_transport();
    let request = ApiRequest::get("/stories/ranked").param("limit", Some(5));
    let url = transport.url_for(&request).unwrap();
    assert_eq!(url.as_str(), "https://mock.newsrank.test/api/v1/stories/ranked?limit=5");
  }

  #[test]
  fn test_build_url_without_query_has_no_question_mark() {
    let transport = mock_transport();
    let url = transport.url_for(&ApiRequest::get("/items")).unwrap();
    assert_eq!(url.as_str(), "https://mock.newsrank.test/api/v1/items");
    assert_eq!(url.query(), None);
  }

  #[test]
  fn test_build_url_encodes_segments_and_query() {
    let transport = mock_transport();
    let request = ApiRequest::get("/stories").segment("a b/c").required("q", "climate & courts");
    let url = transport.url_for(&request).unwrap();
    assert_eq!(url.path(), "/api/v1/stories/a%20b%2Fc");
    assert_eq!(url.query(), Some("q=climate+%26+courts"));
  }

  #[test]
  fn test_build_url_with_bare_host_and_trailing_slash() {
    let transport = Transport::new(&config("http://localhost:9000/")).unwrap();
    let url = transport.url_for(&ApiRequest::get("/stats")).unwrap();
    assert_eq!(url.as_str(), "http://localhost:9000/stats");
  }

  #[test]
  fn test_invalid_config_is_rejected() {
    assert!(matches!(Transport::new(&config("::nope::")), Err(Error::InvalidUrl(_))));
    assert!(matches!(Transport::new(&Config::new("")), Err(Error::Config(_))));
    assert!(matches!(Transport::new(&Config::new("nrf_bad\nkey")), Err(Error::Config(_))));
  }

  #[test]
  fn test_debug_hides_api_key() {
    let rendered = format!("{:?}", mock_transport());
    assert!(!rendered.contains("nrf_test_key"));
    assert!(rendered.contains("mock.newsrank.test"));
  }

  #[test]
  fn test_retry_after_header() {
    let mut headers = HeaderMap::new();
    assert_eq!(retry_after(&headers), None);
    headers.insert(RETRY_AFTER, HeaderValue::from_static("30"));
    assert_eq!(retry_after(&headers), Some(Duration::from_secs(30)));
    headers.insert(RETRY_AFTER, HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"));
    assert_eq!(retry_after(&headers), None);
  }

  #[test]
  fn test_decode_success_and_empty_bodies() {
    let request = ApiRequest::get("/stats");
    let value: Value = decode(&request, StatusCode::OK, None, r#"{"a": 1}"#.to_string()).unwrap();
    assert_eq!(value, json!({"a": 1}));

    let value: Value = decode(&request, StatusCode::NO_CONTENT, None, String::new()).unwrap();
    assert_eq!(value, Value::Null);

    let value: Option<Value> = decode(&request, StatusCode::OK, None, "  ".to_string()).unwrap();
    assert_eq!(value, None);
  }

  #[test]
  fn test_decode_maps_failures() {
    let request = ApiRequest::get("/stories/ranked");
    let err = decode::<Value>(
      &request,
      StatusCode::TOO_MANY_REQUESTS,
      Some(Duration::from_secs(3)),
      r#"{"message": "slow down"}"#.to_string(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RateLimit);
    assert_eq!(err.message(), "slow down");
    assert_eq!(err.retry_after(), Some(Duration::from_secs(3)));

    let err = decode::<Value>(&request, StatusCode::OK, None, "not json".to_string()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Serde);
  }

  #[tokio::test]
  async fn test_unreadable_body_keeps_failed_status() {
    // refused connection yields a real reqwest::Error to feed the mapping
    let err = reqwest::Client::new().get("http://127.0.0.1:1/").send().await.unwrap_err();
    let request = ApiRequest::get("/stories/ranked");

    let mapped =
      body_error(&request, StatusCode::TOO_MANY_REQUESTS, Some(Duration::from_secs(9)), err);
    assert_eq!(mapped.kind(), ErrorKind::RateLimit);
    assert_eq!(mapped.status_code(), Some(429));
    assert_eq!(mapped.retry_after(), Some(Duration::from_secs(9)));
    assert_eq!(mapped.body(), Some(""));
    assert_eq!(mapped.message(), "API request failed with status 429");

    let err = reqwest::Client::new().get("http://127.0.0.1:1/").send().await.unwrap_err();
    let mapped = body_error(&request, StatusCode::SERVICE_UNAVAILABLE, None, err);
    assert_eq!(mapped.kind(), ErrorKind::Server);
    assert_eq!(mapped.status_code(), Some(503));
  }

  #[tokio::test]
  async fn test_unreadable_success_body_is_connection_error() {
    let err = reqwest::Client::new().get("http://127.0.0.1:1/").send().await.unwrap_err();
    let mapped = body_error(&ApiRequest::get("/stats"), StatusCode::OK, None, err);
    assert!(mapped.is_connection());
    assert_eq!(mapped.status_code(), None);
  }

  #[test]
  fn test_close_is_idempotent() {
    let transport = mock_transport();
    let status = transport.status();
    assert!(status.owns_http_client());
    assert!(!status.is_closed());

    assert!(transport.close());
    assert!(!transport.close());
    assert!(status.is_closed());
    assert_eq!(status.close_count(), 1);
  }

  #[test]
  fn test_injected_client_is_not_owned() {
    let transport =
      Transport::with_http_client(&config("https://mock.newsrank.test"), reqwest::Client::new()).unwrap();
    assert!(!transport.status().owns_http_client());
    assert!(transport.close());
    assert_eq!(transport.status().close_count(), 1);
  }

  #[tokio::test]
  async fn test_closed_transport_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    let transport = Transport::new(&config(&server.uri())).unwrap();
    transport.close();

    let result = transport.execute::<Value>(ApiRequest::get("/stats")).await;
    assert!(matches!(result, Err(Error::Closed)));
  }

  #[tokio::test]
  async fn test_auth_and_accept_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/stats"))
      .and(header("authorization", "Bearer nrf_test_key"))
      .and(header("accept", "application/json"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total_articles": 5})))
      .expect(1)
      .mount(&server)
      .await;

    let transport = Transport::new(&config(&server.uri())).unwrap();
    let value: Value = transport.execute(ApiRequest::get("/stats")).await.unwrap();
    assert_eq!(value["total_articles"], 5);
  }

  #[tokio::test]
  async fn test_json_body_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/echo"))
      .and(wiremock::matchers::body_json(json!({"ids": [1, 2]})))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(&server)
      .await;

    let transport = Transport::new(&config(&server.uri())).unwrap();
    let value: Value =
      transport.execute(ApiRequest::post("/echo").json(json!({"ids": [1, 2]}))).await.unwrap();
    assert_eq!(value, Value::Null);
  }

  #[tokio::test]
  async fn test_timeout_is_a_connection_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
      .mount(&server)
      .await;

    let transport =
      Transport::new(&config(&server.uri())).unwrap().with_timeout(Duration::from_millis(100));
    let err = transport.execute::<Value>(ApiRequest::get("/stats")).await.unwrap_err();
    assert!(err.is_connection());
    assert_eq!(err.status_code(), None);
    assert!(err.message().contains("timed out"));
  }

  #[tokio::test]
  async fn test_refused_connection_has_no_status() {
    // nothing listens on port 1
    let transport = Transport::new(&config("http://127.0.0.1:1")).unwrap();
    let err = transport.execute::<Value>(ApiRequest::get("/stats")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status_code(), None);
    assert_eq!(err.body(), None);
  }
}
