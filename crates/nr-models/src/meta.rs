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

//! Meta endpoint models: related articles, platform stats, version, usage

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// An article related to another article
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedArticle {
  pub url_hash: Option<String>,
  pub slug: Option<String>,
  pub title: Option<String>,
  pub source_name: Option<String>,
  pub published_at: Option<String>,

  /// Similarity to the source article (0 to 1)
  pub similarity: Option<f64>,
}

/// Platform wide statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
  pub total_articles: Option<u64>,
  pub total_stories: Option<u64>,
  pub total_sources: Option<u64>,
  pub total_entities: Option<u64>,
  pub articles_today: Option<u64>,
  pub stories_today: Option<u64>,
  pub last_updated: Option<String>,
}

/// API version information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionInfo {
  pub version: Option<String>,
  pub build: Option<String>,
  pub go_version: Option<String>,
  pub uptime: Option<String>,
}

/// API usage for the calling key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageRecord {
  pub total_requests: Option<u64>,
  pub period_start: Option<String>,
  pub period_end: Option<String>,

  /// Request count per endpoint path
  #[serde(deserialize_with = "crate::common::null_as_default")]
  pub endpoints: HashMap<String, u64>,

  #[serde(deserialize_with = "crate::common::null_as_default")]
  pub daily_breakdown: Vec<Value>,
}

impl UsageRecord {
  /// Endpoint with the most requests in the period
  pub fn busiest_endpoint(&self) -> Option<(&str, u64)> {
    self
      .endpoints
      .iter()
      .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
      .map(|(path, count)| (path.as_str(), *count))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_usage_record() {
    let json = r#"{
      "total_requests": 30,
      "endpoints": {"/stories": 10, "/search": 20},
      "daily_breakdown": [{"date": "2025-01-01", "requests": 30}]
    }"#;
    let usage: UsageRecord = serde_json::from_str(json).unwrap();
    assert_eq!(usage.busiest_endpoint(), Some(("/search", 20)));
    assert_eq!(usage.daily_breakdown.len(), 1);
  }

  #[test]
  fn test_busiest_endpoint_ties_pick_lowest_path() {
    let json = r#"{"endpoints": {"/b": 5, "/a": 5}}"#;
    let usage: UsageRecord = serde_json::from_str(json).unwrap();
    assert_eq!(usage.busiest_endpoint(), Some(("/a", 5)));
  }

  #[test]
  fn test_version_info() {
    let info: VersionInfo = serde_json::from_str(r#"{"version": "1.4.2", "build": "abc"}"#).unwrap();
    assert_eq!(info.version.as_deref(), Some("1.4.2"));
    assert_eq!(info.uptime, None);
  }

  #[test]
  fn test_null_usage_collections_read_as_empty() {
    let json = r#"{"total_requests": 0, "endpoints": null, "daily_breakdown": null}"#;
    let usage: UsageRecord = serde_json::from_str(json).unwrap();
    assert_eq!(usage.total_requests, Some(0));
    assert!(usage.endpoints.is_empty());
    assert!(usage.daily_breakdown.is_empty());
    assert_eq!(usage.busiest_endpoint(), None);
  }
}
