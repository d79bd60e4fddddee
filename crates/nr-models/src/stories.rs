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

//! Story data models
//!
//! A story clusters many articles about one event. Its timeline is a list
//! of developments, each with its own timestamp and supporting articles.

use crate::articles::Article;
use crate::common::{parse_timestamp, Page};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A clustered news story
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Story {
  pub id: Option<i64>,
  pub slug: Option<String>,
  pub title: Option<String>,
  pub summary: Option<String>,
  pub category: Option<String>,
  pub subcategory: Option<String>,
  pub image_url: Option<String>,

  /// Number of articles clustered into the story
  pub article_count: Option<u32>,

  /// Number of distinct sources covering the story
  pub source_count: Option<u32>,

  pub first_seen: Option<String>,
  pub last_updated: Option<String>,

  /// Ranking score used by the ranked listing
  pub importance_score: Option<f64>,

  pub trending_score: Option<f64>,

  /// Entities mentioned in the story, as returned by the API
  #[serde(deserialize_with = "crate::common::null_as_default")]
  pub entities: Vec<Value>,
}

impl Story {
  pub fn last_updated_time(&self) -> Option<DateTime<Utc>> {
    self.last_updated.as_deref().and_then(parse_timestamp)
  }
}

/// One entry in a story timeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryDevelopment {
  pub id: Option<i64>,
  pub story_id: Option<i64>,
  pub title: Option<String>,
  pub summary: Option<String>,
  pub timestamp: Option<String>,
  pub article_count: Option<u32>,
  #[serde(deserialize_with = "crate::common::null_as_default")]
  pub articles: Vec<Article>,
}

impl StoryDevelopment {
  pub fn time(&self) -> Option<DateTime<Utc>> {
    self.timestamp.as_deref().and_then(parse_timestamp)
  }
}

/// Changes to a story since a given timestamp
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryUpdate {
  #[serde(deserialize_with = "crate::common::null_as_default")]
  pub new_articles: Vec<Article>,
  #[serde(deserialize_with = "crate::common::null_as_default")]
  pub new_developments: Vec<StoryDevelopment>,

  /// Present only when the summary changed
  pub updated_summary: Option<String>,
}

impl StoryUpdate {
  pub fn is_empty(&self) -> bool {
    self.new_articles.is_empty() && self.new_developments.is_empty() && self.updated_summary.is_none()
  }
}

/// Paginated list of stories
pub type StoryList = Page<Story>;

/// Stories ordered by importance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankedStoryList {
  #[serde(deserialize_with = "crate::common::null_as_default")]
  pub items: Vec<Story>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ranked_list_keeps_order() {
    let json = r#"{"items": [
      {"id": 3, "slug": "a", "importance_score": 0.9},
      {"id": 1, "slug": "b", "importance_score": 0.4}
    ]}"#;
    let ranked: RankedStoryList = serde_json::from_str(json).unwrap();
    let ids: Vec<_> = ranked.items.iter().filter_map(|s| s.id).collect();
    assert_eq!(ids, vec![3, 1]);
  }

  #[test]
  fn test_developments_timeline() {
    let json = r#"[
      {"id": 1, "story_id": 42, "title": "Filed", "timestamp": "2025-01-02T00:00:00Z", "articles": [{"url_hash": "x"}]},
      {"id": 2, "story_id": 42, "title": "Ruling", "timestamp": "2025-02-02T00:00:00Z"}
    ]"#;
    let timeline: Vec<StoryDevelopment> = serde_json::from_str(json).unwrap();
    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline[0].articles.len(), 1);
    assert!(timeline[0].time() < timeline[1].time());
  }

  #[test]
  fn test_story_update_emptiness() {
    let update: StoryUpdate = serde_json::from_str(r#"{"new_articles": [], "updated_summary": null}"#).unwrap();
    assert!(update.is_empty());

    let update: StoryUpdate = serde_json::from_str(r#"{"updated_summary": "new facts"}"#).unwrap();
    assert!(!update.is_empty());
  }

  #[test]
  fn test_null_lists_read_as_empty() {
    let update: StoryUpdate =
      serde_json::from_str(r#"{"new_articles": null, "new_developments": null}"#).unwrap();
    assert!(update.is_empty());

    let story: Story = serde_json::from_str(r#"{"id": 5, "entities": null}"#).unwrap();
    assert!(story.entities.is_empty());

    let ranked: RankedStoryList = serde_json::from_str(r#"{"items": null}"#).unwrap();
    assert!(ranked.items.is_empty());
  }
}
