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

//! Client configuration from command-line flags layered over the environment

use anyhow::{Context, Result};
use nr_core::Config;

/// Build the client config. Flags override `NEWSRANK_*` variables, which
/// clap has already folded into the flag values.
pub fn resolve(api_key: Option<String>, base_url: Option<String>, timeout: Option<u64>) -> Result<Config> {
  let api_key = api_key
    .filter(|key| !key.trim().is_empty())
    .with_context(|| format!("no API key: pass --api-key or set {}", nr_core::API_KEY_ENV))?;

  let mut config = Config::new(api_key);
  if let Some(base_url) = base_url {
    config.base_url = base_url;
  }
  if let Some(timeout) = timeout {
    config.timeout_secs = timeout;
  }
  config.validate()?;
  Ok(config)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_flags_override_defaults() {
    let config = resolve(Some("nrf_abc".into()), Some("http://localhost:8080".into()), Some(5)).unwrap();
    assert_eq!(config.api_key, "nrf_abc");
    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.timeout_secs, 5);
  }

  #[test]
  fn test_defaults_when_only_key_given() {
    let config = resolve(Some("nrf_abc".into()), None, None).unwrap();
    assert_eq!(config.base_url, nr_core::DEFAULT_BASE_URL);
    assert_eq!(config.timeout_secs, nr_core::DEFAULT_TIMEOUT_SECS);
  }

  #[test]
  fn test_missing_or_blank_key_is_an_error() {
    assert!(resolve(None, None, None).is_err());
    assert!(resolve(Some("  ".into()), None, None).is_err());
  }

  #[test]
  fn test_zero_timeout_is_rejected() {
    assert!(resolve(Some("nrf_abc".into()), None, Some(0)).is_err());
  }
}
