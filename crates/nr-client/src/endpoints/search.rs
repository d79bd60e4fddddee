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

//! Search endpoints

use super::namespace;
use crate::request::ApiRequest;
use nr_core::Pagination;
use nr_models::search::{FullSearchResults, SearchResults, SearchSuggestions};

pub fn articles_request(q: &str, page: Pagination) -> ApiRequest {
  ApiRequest::get("/search")
    .required("q", q)
    .param("limit", page.limit)
    .param("offset", page.offset)
}

pub fn full_request(q: &str, page: Pagination) -> ApiRequest {
  ApiRequest::get("/search/full")
    .required("q", q)
    .param("limit", page.limit)
    .param("offset", page.offset)
}

pub fn suggest_request(q: &str, limit: Option<u32>) -> ApiRequest {
  ApiRequest::get("/search/suggest").required("q", q).param("limit", limit)
}

namespace! {
  /// Search endpoints
  SearchEndpoints {
    /// Full-text article search
    fn articles(q: &str, page: Pagination) -> SearchResults => articles_request(q, page);

    /// Search across articles and stories
    fn full(q: &str, page: Pagination) -> FullSearchResults => full_request(q, page);

    /// Autocomplete suggestions for a partial query
    fn suggest(q: &str, limit: Option<u32>) -> SearchSuggestions => suggest_request(q, limit);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_article_search_params() {
    let request = articles_request("climate policy", Pagination::limit(5));
    assert_eq!(request.path(), "/search");
    assert_eq!(request.query(), [("q", "climate policy".to_string()), ("limit", "5".to_string())]);
  }

  #[test]
  fn test_full_search_path_and_offset() {
    let request = full_request("nato", Pagination::limit(10).with_offset(20));
    assert_eq!(request.path(), "/search/full");
    assert_eq!(request.query_value("offset"), Some("20"));
  }

  #[test]
  fn test_suggest_sends_query_even_when_empty() {
    let request = suggest_request("", None);
    assert_eq!(request.path(), "/search/suggest");
    assert_eq!(request.query(), [("q", String::new())]);
  }
}
