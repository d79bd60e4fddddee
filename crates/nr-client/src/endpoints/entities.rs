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

//! Entity endpoints: people, organisations, places and other named things
//! extracted from coverage.

use super::namespace;
use crate::request::ApiRequest;
use nr_core::{EntityRef, Pagination};
use nr_models::articles::ArticleList;
use nr_models::entities::{Entity, EntityList, PoliticianList, TrendingEntityList};

/// Filters for [`EntitiesEndpoints::list`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityListQuery {
  /// Name search
  pub q: Option<String>,

  /// `person`, `organization`, `location`, ... Sent as `type`.
  pub entity_type: Option<String>,

  pub subcategory: Option<String>,
  pub limit: Option<u32>,
  pub offset: Option<u32>,
}

impl EntityListQuery {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn search(mut self, q: impl Into<String>) -> Self {
    self.q = Some(q.into());
    self
  }

  pub fn entity_type(mut self, entity_type: impl Into<String>) -> Self {
    self.entity_type = Some(entity_type.into());
    self
  }

  pub fn subcategory(mut self, subcategory: impl Into<String>) -> Self {
    self.subcategory = Some(subcategory.into());
    self
  }

  pub fn limit(mut self, limit: u32) -> Self {
    self.limit = Some(limit);
    self
  }

  pub fn offset(mut self, offset: u32) -> Self {
    self.offset = Some(offset);
    self
  }
}

pub fn list_request(query: &EntityListQuery) -> ApiRequest {
  ApiRequest::get("/entities")
    .param("q", query.q.as_deref())
    .param("type", query.entity_type.as_deref())
    .param("subcategory", query.subcategory.as_deref())
    .param("limit", query.limit)
    .param("offset", query.offset)
}

pub fn trending_request(limit: Option<u32>) -> ApiRequest {
  ApiRequest::get("/entities/trending").param("limit", limit)
}

pub fn politicians_request(page: Pagination) -> ApiRequest {
  ApiRequest::get("/entities/politicians")
    .param("limit", page.limit)
    .param("offset", page.offset)
}

pub fn get_request(entity: &EntityRef) -> ApiRequest {
  ApiRequest::get("/entities").segment(entity.path_segment())
}

pub fn articles_request(entity: &EntityRef, page: Pagination) -> ApiRequest {
  get_request(entity)
    .segment("articles")
    .param("limit", page.limit)
    .param("offset", page.offset)
}

namespace! {
  /// Entity endpoints
  EntitiesEndpoints {
    fn list(query: &EntityListQuery) -> EntityList => list_request(query);

    /// Entities ranked by recent mention velocity
    fn trending(limit: Option<u32>) -> TrendingEntityList => trending_request(limit);

    fn politicians(page: Pagination) -> PoliticianList => politicians_request(page);

    /// Get one entity by numeric id or slug
    fn get(entity: impl Into<EntityRef>) -> Entity => get_request(&entity.into());

    /// Articles mentioning an entity
    fn articles(entity: impl Into<EntityRef>, page: Pagination) -> ArticleList
      => articles_request(&entity.into(), page);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_list_sends_type_param() {
    let request = list_request(&EntityListQuery::new().entity_type("person").limit(20));
    assert_eq!(request.path(), "/entities");
    assert_eq!(request.query(), [("type", "person".to_string()), ("limit", "20".to_string())]);
  }

  #[test]
  fn test_get_by_id_or_slug() {
    assert_eq!(get_request(&EntityRef::from(1234)).path(), "/entities/1234");
    assert_eq!(get_request(&EntityRef::from("joe-biden")).path(), "/entities/joe-biden");
  }

  #[test]
  fn test_entity_articles() {
    let request = articles_request(&EntityRef::from("nato"), Pagination::limit(3));
    assert_eq!(request.path(), "/entities/nato/articles");
    assert_eq!(request.query(), [("limit", "3".to_string())]);
  }

  #[test]
  fn test_trending_and_politicians_paths() {
    assert_eq!(trending_request(Some(10)).path(), "/entities/trending");
    let request = politicians_request(Pagination::new());
    assert_eq!(request.path(), "/entities/politicians");
    assert!(request.query().is_empty());
  }
}
