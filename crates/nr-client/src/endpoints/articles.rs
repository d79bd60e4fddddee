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

//! Article endpoints
//!
//! - `GET /items`: filtered, paginated article listing
//! - `GET /item`: one article by URL hash or slug
//! - `GET /content`: extracted full text, optionally truncated

use super::namespace;
use crate::request::ApiRequest;
use nr_core::{ArticleRef, SortOrder};
use nr_models::articles::{Article, ArticleContent, ArticleList};

/// Filters for [`ArticlesEndpoints::list`]. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleListQuery {
  pub limit: Option<u32>,
  pub offset: Option<u32>,

  /// Category slug
  pub category: Option<String>,

  pub keyword: Option<String>,

  /// Source domain
  pub source: Option<String>,

  /// Content extraction status
  pub content_status: Option<String>,

  /// Published after, ISO 8601
  pub date_from: Option<String>,

  /// Published before, ISO 8601
  pub date_to: Option<String>,

  /// Field to sort by, e.g. `published_at`
  pub sort_by: Option<String>,

  pub sort_order: Option<SortOrder>,
}

impl ArticleListQuery {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn limit(mut self, limit: u32) -> Self {
    self.limit = Some(limit);
    self
  }

  pub fn offset(mut self, offset: u32) -> Self {
    self.offset = Some(offset);
    self
  }

  pub fn category(mut self, category: impl Into<String>) -> Self {
    self.category = Some(category.into());
    self
  }

  pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
    self.keyword = Some(keyword.into());
    self
  }

  pub fn source(mut self, source: impl Into<String>) -> Self {
    self.source = Some(source.into());
    self
  }

  pub fn content_status(mut self, status: impl Into<String>) -> Self {
    self.content_status = Some(status.into());
    self
  }

  pub fn date_range(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
    self.date_from = Some(from.into());
    self.date_to = Some(to.into());
    self
  }

  pub fn sort(mut self, by: impl Into<String>, order: SortOrder) -> Self {
    self.sort_by = Some(by.into());
    self.sort_order = Some(order);
    self
  }
}

pub fn list_request(query: &ArticleListQuery) -> ApiRequest {
  ApiRequest::get("/items")
    .param("limit", query.limit)
    .param("offset", query.offset)
    .param("category", query.category.as_deref())
    .param("keyword", query.keyword.as_deref())
    .param("source", query.source.as_deref())
    .param("content_status", query.content_status.as_deref())
    .param("date_from", query.date_from.as_deref())
    .param("date_to", query.date_to.as_deref())
    .param("sort_by", query.sort_by.as_deref())
    .param("sort_order", query.sort_order)
}

pub fn get_request(article: &ArticleRef) -> ApiRequest {
  let (name, value) = article.query_pair();
  ApiRequest::get("/item").required(name, value)
}

pub fn content_request(url_hash: &str, max_chars: Option<u32>) -> ApiRequest {
  ApiRequest::get("/content").required("url_hash", url_hash).param("max_chars", max_chars)
}

namespace! {
  /// News article endpoints
  ArticlesEndpoints {
    /// List articles with optional filtering and pagination
    fn list(query: &ArticleListQuery) -> ArticleList => list_request(query);

    /// Get one article. A plain string is taken as the URL hash; use
    /// [`ArticleRef::slug`] to look up by slug.
    fn get(article: impl Into<ArticleRef>) -> Article => get_request(&article.into());

    /// Full extracted content, truncated to `max_chars` when given
    fn content(url_hash: &str, max_chars: Option<u32>) -> ArticleContent
      => content_request(url_hash, max_chars);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_list_without_filters_sends_no_params() {
    let request = list_request(&ArticleListQuery::default());
    assert_eq!(request.path(), "/items");
    assert!(request.query().is_empty());
  }

  #[test]
  fn test_list_with_filters() {
    let query = ArticleListQuery::new()
      .category("politics")
      .limit(10)
      .sort("published_at", SortOrder::Desc);
    let request = list_request(&query);
    assert_eq!(request.query_value("category"), Some("politics"));
    assert_eq!(request.query_value("limit"), Some("10"));
    assert_eq!(request.query_value("sort_by"), Some("published_at"));
    assert_eq!(request.query_value("sort_order"), Some("desc"));
    assert_eq!(request.query_value("source"), None);
    assert_eq!(request.query().len(), 4);
  }

  #[test]
  fn test_get_by_hash_or_slug() {
    let request = get_request(&ArticleRef::from("abc123"));
    assert_eq!(request.path(), "/item");
    assert_eq!(request.query(), [("url_hash", "abc123".to_string())]);

    let request = get_request(&ArticleRef::slug("court-rules"));
    assert_eq!(request.query(), [("slug", "court-rules".to_string())]);
  }

  #[test]
  fn test_content_max_chars_optional() {
    let request = content_request("abc123", None);
    assert_eq!(request.query(), [("url_hash", "abc123".to_string())]);

    let request = content_request("abc123", Some(500));
    assert_eq!(request.query_value("max_chars"), Some("500"));
  }
}
