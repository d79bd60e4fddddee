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

//! Search data models

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single search hit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
  pub id: Option<i64>,
  pub url_hash: Option<String>,
  pub slug: Option<String>,
  pub title: Option<String>,
  pub description: Option<String>,
  pub source_name: Option<String>,
  pub published_at: Option<String>,
  pub category: Option<String>,

  /// Relevance score
  pub score: Option<f64>,
}

/// Article search response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResults {
  #[serde(deserialize_with = "crate::common::null_as_default")]
  pub items: Vec<SearchResult>,
  pub total: Option<u64>,
  pub limit: Option<u32>,
  pub offset: Option<u32>,

  /// Query echoed back by the server
  pub query: Option<String>,
}

/// Search response covering both articles and stories
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullSearchResults {
  #[serde(deserialize_with = "crate::common::null_as_default")]
  pub articles: Vec<SearchResult>,
  #[serde(deserialize_with = "crate::common::null_as_default")]
  pub stories: Vec<Value>,
  pub total: Option<u64>,
  pub query: Option<String>,
}

/// Autocomplete entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSuggestion {
  pub text: Option<String>,

  /// What the suggestion refers to (entity, story, ...)
  #[serde(rename = "type")]
  pub kind: Option<String>,

  pub id: Option<i64>,
}

/// Autocomplete response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSuggestions {
  #[serde(deserialize_with = "crate::common::null_as_default")]
  pub suggestions: Vec<SearchSuggestion>,
}

impl SearchSuggestions {
  /// Suggestion strings in server order
  pub fn texts(&self) -> Vec<&str> {
    self.suggestions.iter().filter_map(|s| s.text.as_deref()).collect()
  }
}
