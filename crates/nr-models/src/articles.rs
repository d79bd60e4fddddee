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

//! Article data models

use crate::common::{parse_timestamp, Page};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A news article
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
  pub id: Option<i64>,

  /// Canonical article URL
  pub url: Option<String>,

  /// Stable hash of the URL, the primary article key
  pub url_hash: Option<String>,

  pub slug: Option<String>,
  pub title: Option<String>,
  pub description: Option<String>,
  pub author: Option<String>,

  /// Display name of the publishing source
  pub source_name: Option<String>,

  /// Domain of the publishing source
  pub source_domain: Option<String>,

  pub image_url: Option<String>,

  /// Publication time as sent by the API
  pub published_at: Option<String>,

  pub created_at: Option<String>,
  pub updated_at: Option<String>,
  pub category: Option<String>,
  pub subcategory: Option<String>,

  /// Content extraction status
  pub content_status: Option<String>,

  /// Story this article is clustered into
  pub story_id: Option<i64>,

  /// Sentiment score (-1 to 1)
  pub sentiment_score: Option<f64>,

  pub sentiment_label: Option<String>,
  pub word_count: Option<u32>,
  pub reading_time_minutes: Option<u32>,
}

impl Article {
  /// Publication time, when present and parseable
  pub fn published_time(&self) -> Option<DateTime<Utc>> {
    self.published_at.as_deref().and_then(parse_timestamp)
  }
}

/// Full extracted content for an article
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleContent {
  pub url_hash: Option<String>,

  /// Plain text body, truncated to `max_chars` when requested
  pub content: Option<String>,

  pub content_html: Option<String>,
  pub word_count: Option<u32>,
  pub reading_time_minutes: Option<u32>,
  pub extracted_at: Option<String>,
}

/// Paginated list of articles
pub type ArticleList = Page<Article>;

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Datelike;

  #[test]
  fn test_article_deserialization() {
    let json = r#"{
      "id": 991,
      "url": "https://example.com/a",
      "url_hash": "abc123",
      "title": "Court rules on climate case",
      "source_name": "Example News",
      "published_at": "2025-06-01T12:00:00Z",
      "category": "politics",
      "story_id": null,
      "sentiment_score": -0.25,
      "something_new": {"nested": true}
    }"#;

    let article: Article = serde_json::from_str(json).unwrap();
    assert_eq!(article.url_hash.as_deref(), Some("abc123"));
    assert_eq!(article.story_id, None);
    assert_eq!(article.sentiment_score, Some(-0.25));
    assert_eq!(article.published_time().map(|t| t.year()), Some(2025));
  }

  #[test]
  fn test_article_list_envelope() {
    let json = r#"{"items": [{"url_hash": "a"}, {"url_hash": "b"}], "total": 2, "limit": 10, "offset": 0}"#;
    let list: ArticleList = serde_json::from_str(json).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list.items[1].url_hash.as_deref(), Some("b"));
  }

  #[test]
  fn test_empty_object_is_valid_content() {
    let content: ArticleContent = serde_json::from_str("{}").unwrap();
    assert_eq!(content, ArticleContent::default());
  }
}
