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

use crate::blocking;
use crate::endpoints::{
  ArticlesEndpoints, EntitiesEndpoints, GraphEndpoints, MetaEndpoints, SearchEndpoints,
  SourcesEndpoints, StoriesEndpoints,
};
use crate::request::ApiRequest;
use crate::transport::{BlockingTransport, SessionStatus, Transport};
use nr_core::{Config, Error, Result};
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Async NewsRank API client
///
/// Owns one HTTP session shared by every namespace handed out by the
/// accessors. Dropping the client closes the session; namespace handles that
/// outlive it then fail with [`Error::Closed`].
///
/// # Examples
///
/// ```no_run
/// use nr_client::{NewsRankClient, StoryListQuery};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = NewsRankClient::new("nrf_your_key")?;
///
///     let ranked = client.stories().ranked(Some(5)).await?;
///     for story in &ranked.items {
///         println!("{:?}", story.title);
///     }
///
///     let story = client.stories().get("supreme-court-climate-ruling").await?;
///     println!("{:?}", story.summary);
///
///     let science = client.stories().list(&StoryListQuery::new().category("science")).await?;
///     println!("{} stories", science.len());
///     Ok(())
/// }
/// ```
pub struct NewsRankClient {
  transport: Arc<Transport>,
}

impl NewsRankClient {
  /// Client for `api_key` against the production API with default settings
  ///
  /// # Errors
  ///
  /// Returns [`Error::Config`] for an empty key or if the HTTP client cannot
  /// be created.
  pub fn new(api_key: impl Into<String>) -> Result<Self> {
    Self::from_config(Config::new(api_key))
  }

  /// Client from an explicit configuration
  pub fn from_config(config: Config) -> Result<Self> {
    Ok(Self::from_transport(Transport::new(&config)?))
  }

  /// Client configured from `NEWSRANK_*` environment variables and `.env`
  pub fn from_env() -> Result<Self> {
    Self::from_config(Config::from_env()?)
  }

  /// Builder for a client with a custom base URL, timeout or HTTP client
  pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
    ClientBuilder::new(api_key)
  }

  /// Wrap an already configured transport
  pub fn from_transport(transport: Transport) -> Self {
    Self { transport: Arc::new(transport) }
  }

  pub fn articles(&self) -> ArticlesEndpoints {
    ArticlesEndpoints::new(self.transport.clone())
  }

  pub fn stories(&self) -> StoriesEndpoints {
    StoriesEndpoints::new(self.transport.clone())
  }

  pub fn search(&self) -> SearchEndpoints {
    SearchEndpoints::new(self.transport.clone())
  }

  pub fn entities(&self) -> EntitiesEndpoints {
    EntitiesEndpoints::new(self.transport.clone())
  }

  pub fn sources(&self) -> SourcesEndpoints {
    SourcesEndpoints::new(self.transport.clone())
  }

  pub fn graph(&self) -> GraphEndpoints {
    GraphEndpoints::new(self.transport.clone())
  }

  pub fn meta(&self) -> MetaEndpoints {
    MetaEndpoints::new(self.transport.clone())
  }

  /// Send any request through this client's session.
  ///
  /// Decode into `serde_json::Value` to get the response exactly as the API
  /// sent it.
  pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
    self.transport.execute(request).await
  }

  /// Close the session. Idempotent; returns `true` only for the call that
  /// actually closed it.
  pub fn close(&self) -> bool {
    self.transport.close()
  }

  pub fn is_closed(&self) -> bool {
    self.transport.status().is_closed()
  }

  /// Lifecycle handle that remains readable after the client is dropped
  pub fn status(&self) -> SessionStatus {
    self.transport.status()
  }

  pub fn base_url(&self) -> &str {
    self.transport.base_url()
  }

  pub fn timeout(&self) -> Duration {
    self.transport.timeout()
  }
}

impl Drop for NewsRankClient {
  fn drop(&mut self) {
    self.transport.close();
  }
}

impl fmt::Debug for NewsRankClient {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("NewsRankClient").field("base_url", &self.base_url()).finish()
  }
}

/// Builder shared by both clients.
///
/// `H` is the HTTP client type that may be injected: `reqwest::Client` for
/// [`NewsRankClient`], `reqwest::blocking::Client` for
/// [`blocking::NewsRankClient`]. An injected client stays owned by the caller
/// and is never released by `close()`.
pub struct ClientBuilder<H = reqwest::Client> {
  config: Config,
  timeout: Option<Duration>,
  http_client: Option<H>,
}

impl<H> ClientBuilder<H> {
  pub fn new(api_key: impl Into<String>) -> Self {
    Self { config: Config::new(api_key), timeout: None, http_client: None }
  }

  /// Start from an existing configuration
  pub fn from_config(config: Config) -> Self {
    Self { config, timeout: None, http_client: None }
  }

  /// Point the client at another deployment or a local mock server
  pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
    self.config.base_url = base_url.into();
    self
  }

  /// Per-request timeout
  pub fn timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }

  /// Use a caller owned HTTP client instead of building one
  pub fn http_client(mut self, client: H) -> Self {
    self.http_client = Some(client);
    self
  }

  fn checked_timeout(&self) -> Result<Option<Duration>> {
    match self.timeout {
      Some(timeout) if timeout.is_zero() => Err(Error::Config("timeout must be greater than zero".to_string())),
      other => Ok(other),
    }
  }
}

impl ClientBuilder<reqwest::Client> {
  pub fn build(self) -> Result<NewsRankClient> {
    let timeout = self.checked_timeout()?;
    let mut transport = match self.http_client {
      Some(client) => Transport::with_http_client(&self.config, client)?,
      None => Transport::new(&self.config)?,
    };
    if let Some(timeout) = timeout {
      transport = transport.with_timeout(timeout);
    }
    Ok(NewsRankClient::from_transport(transport))
  }
}

impl ClientBuilder<reqwest::blocking::Client> {
  pub fn build(self) -> Result<blocking::NewsRankClient> {
    let timeout = self.checked_timeout()?;
    let mut transport = match self.http_client {
      Some(client) => BlockingTransport::with_http_client(&self.config, client)?,
      None => BlockingTransport::new(&self.config)?,
    };
    if let Some(timeout) = timeout {
      transport = transport.with_timeout(timeout);
    }
    Ok(blocking::NewsRankClient::from_transport(transport))
  }
}

impl<H> fmt::Debug for ClientBuilder<H> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ClientBuilder")
      .field("config", &self.config)
      .field("timeout", &self.timeout)
      .field("http_client", &self.http_client.is_some())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_uses_defaults() {
    let client = NewsRankClient::new("nrf_test").unwrap();
    assert_eq!(client.base_url(), "https://newsrank.ai/api/v1");
    assert_eq!(client.timeout(), Duration::from_secs(nr_core::DEFAULT_TIMEOUT_SECS));
    assert!(!client.is_closed());
    assert!(client.status().owns_http_client());
  }

  #[test]
  fn test_empty_key_is_rejected() {
    assert!(matches!(NewsRankClient::new(""), Err(Error::Config(_))));
  }

  #[test]
  fn test_builder_overrides() {
    let client = NewsRankClient::builder("nrf_test")
      .base_url("http://localhost:8080/api/v1/")
      .timeout(Duration::from_millis(1500))
      .build()
      .unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080/api/v1");
    assert_eq!(client.timeout(), Duration::from_millis(1500));
  }

  #[test]
  fn test_builder_rejects_zero_timeout() {
    let result = NewsRankClient::builder("nrf_test").timeout(Duration::ZERO).build();
    assert!(matches!(result, Err(Error::Config(_))));
  }

  #[test]
  fn test_injected_client_is_not_owned() {
    let client = NewsRankClient::builder("nrf_test").http_client(reqwest::Client::new()).build().unwrap();
    assert!(!client.status().owns_http_client());
  }

  #[test]
  fn test_drop_closes_once() {
    let client = NewsRankClient::new("nrf_test").unwrap();
    let status = client.status();
    assert!(client.close());
    assert!(!client.close());
    drop(client);
    assert!(status.is_closed());
    assert_eq!(status.close_count(), 1);
  }

  #[test]
  fn test_debug_shows_base_url_only() {
    let client = NewsRankClient::new("nrf_secret").unwrap();
    let debug = format!("{:?}", client);
    assert!(debug.contains("newsrank.ai"));
    assert!(!debug.contains("nrf_secret"));
  }
}
