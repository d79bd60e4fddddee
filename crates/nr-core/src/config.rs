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

//! Configuration management for the NewsRank client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Main configuration struct for NewsRank clients
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
  /// NewsRank API key (`nrf_...`)
  pub api_key: String,

  /// Base URL for the NewsRank API
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Config {
  /// Config with default base URL and timeout
  pub fn new(api_key: impl Into<String>) -> Self {
    Config {
      api_key: api_key.into(),
      base_url: crate::DEFAULT_BASE_URL.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
    }
  }

  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key = env::var(crate::API_KEY_ENV)
      .map_err(|_| Error::Config(format!("{} not set", crate::API_KEY_ENV)))?;

    let base_url =
      env::var(crate::BASE_URL_ENV).unwrap_or_else(|_| crate::DEFAULT_BASE_URL.to_string());

    let timeout_secs = match env::var(crate::TIMEOUT_ENV) {
      Ok(raw) => raw
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("Invalid {}: {}", crate::TIMEOUT_ENV, raw)))?,
      Err(env::VarError::NotPresent) => crate::DEFAULT_TIMEOUT_SECS,
      Err(e) => return Err(e.into()),
    };

    let config = Config { api_key, base_url, timeout_secs };
    config.validate()?;
    Ok(config)
  }

  /// Reject settings no request could succeed with
  pub fn validate(&self) -> Result<()> {
    if self.api_key.trim().is_empty() {
      return Err(Error::Config("API key is empty".to_string()));
    }
    if self.timeout_secs == 0 {
      return Err(Error::Config("timeout must be at least one second".to_string()));
    }
    self.parsed_base_url().map(|_| ())
  }

  /// Base URL parsed, without a trailing slash
  pub fn parsed_base_url(&self) -> Result<Url> {
    let url = Url::parse(self.base_url.trim_end_matches('/'))?;
    if url.cannot_be_a_base() {
      return Err(Error::Config(format!("base URL cannot carry a path: {}", self.base_url)));
    }
    Ok(url)
  }

  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_secs)
  }

  /// Whether the key looks like an issued NewsRank key
  pub fn has_expected_key_prefix(&self) -> bool {
    self.api_key.starts_with(crate::API_KEY_PREFIX)
  }
}

impl fmt::Debug for Config {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Config")
      .field("api_key", &"<redacted>")
      .field("base_url", &self.base_url)
      .field("timeout_secs", &self.timeout_secs)
      .finish()
  }
}
