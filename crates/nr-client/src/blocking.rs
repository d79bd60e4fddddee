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

//! Blocking NewsRank client.
//!
//! Same namespaces, methods and errors as the async
//! [`NewsRankClient`](crate::NewsRankClient); each call blocks the current
//! thread until the response arrives or the timeout expires. Built on
//! `reqwest::blocking`, so it must not be created, used or dropped inside an
//! async runtime.
//!
//! ```no_run
//! use nr_client::blocking::NewsRankClient;
//!
//! let client = NewsRankClient::new("nrf_your_key")?;
//! let stats = client.meta().stats()?;
//! println!("{:?}", stats.total_articles);
//! client.close();
//! # Ok::<(), nr_client::Error>(())
//! ```

use crate::client::ClientBuilder;
use crate::endpoints::{
  ArticlesEndpoints, EntitiesEndpoints, GraphEndpoints, MetaEndpoints, SearchEndpoints,
  SourcesEndpoints, StoriesEndpoints,
};
use crate::request::ApiRequest;
use crate::transport::{BlockingTransport, SessionStatus};
use nr_core::{Config, Result};
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Blocking NewsRank API client
pub struct NewsRankClient {
  transport: Arc<BlockingTransport>,
}

impl NewsRankClient {
  pub fn new(api_key: impl Into<String>) -> Result<Self> {
    Self::from_config(Config::new(api_key))
  }

  pub fn from_config(config: Config) -> Result<Self> {
    Ok(Self::from_transport(BlockingTransport::new(&config)?))
  }

  /// Client configured from `NEWSRANK_*` environment variables and `.env`
  pub fn from_env() -> Result<Self> {
    Self::from_config(Config::from_env()?)
  }

  pub fn builder(api_key: impl Into<String>) -> ClientBuilder<reqwest::blocking::Client> {
    ClientBuilder::new(api_key)
  }

  pub fn from_transport(transport: BlockingTransport) -> Self {
    Self { transport: Arc::new(transport) }
  }

  pub fn articles(&self) -> ArticlesEndpoints<BlockingTransport> {
    ArticlesEndpoints::new(self.transport.clone())
  }

  pub fn stories(&self) -> StoriesEndpoints<BlockingTransport> {
    StoriesEndpoints::new(self.transport.clone())
  }

  pub fn search(&self) -> SearchEndpoints<BlockingTransport> {
    SearchEndpoints::new(self.transport.clone())
  }

  pub fn entities(&self) -> EntitiesEndpoints<BlockingTransport> {
    EntitiesEndpoints::new(self.transport.clone())
  }

  pub fn sources(&self) -> SourcesEndpoints<BlockingTransport> {
    SourcesEndpoints::new(self.transport.clone())
  }

  pub fn graph(&self) -> GraphEndpoints<BlockingTransport> {
    GraphEndpoints::new(self.transport.clone())
  }

  pub fn meta(&self) -> MetaEndpoints<BlockingTransport> {
    MetaEndpoints::new(self.transport.clone())
  }

  /// Send any request through this client's session
  pub fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
    self.transport.execute(request)
  }

  /// Close the session. Idempotent; returns `true` only for the call that
  /// actually closed it.
  pub fn close(&self) -> bool {
    self.transport.close()
  }

  pub fn is_closed(&self) -> bool {
    self.transport.status().is_closed()
  }

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
    f.debug_struct("blocking::NewsRankClient").field("base_url", &self.base_url()).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use nr_core::Error;

  #[test]
  fn test_builder_and_close() {
    let client = NewsRankClient::builder("nrf_test")
      .base_url("http://127.0.0.1:9")
      .timeout(Duration::from_secs(2))
      .build()
      .unwrap();
    assert_eq!(client.timeout(), Duration::from_secs(2));
    assert!(client.status().owns_http_client());

    let status = client.status();
    drop(client);
    assert_eq!(status.close_count(), 1);
  }

  #[test]
  fn test_closed_client_rejects_calls() {
    let client = NewsRankClient::new("nrf_test").unwrap();
    client.close();
    let result = client.sources().list();
    assert!(matches!(result, Err(Error::Closed)));
  }
}
