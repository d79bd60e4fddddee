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

//! Graph endpoints. Every response is a [`Graph`] of nodes and edges, bounded
//! server-side by `depth` and `limit`.

use super::namespace;
use crate::request::ApiRequest;
use nr_models::graph::Graph;

pub fn entity_network_request(entity_id: u64, depth: Option<u32>, limit: Option<u32>) -> ApiRequest {
  ApiRequest::get("/graph/entity-network")
    .required("entity_id", entity_id)
    .param("depth", depth)
    .param("limit", limit)
}

pub fn story_entity_request(story_id: u64, limit: Option<u32>) -> ApiRequest {
  ApiRequest::get("/graph/story-entity").required("story_id", story_id).param("limit", limit)
}

pub fn topic_cluster_request(topic_id: Option<u64>, limit: Option<u32>) -> ApiRequest {
  ApiRequest::get("/graph/topic-cluster").param("topic_id", topic_id).param("limit", limit)
}

namespace! {
  /// Entity and story relationship graphs
  GraphEndpoints {
    /// Co-occurrence network around an entity
    fn entity_network(entity_id: u64, depth: Option<u32>, limit: Option<u32>) -> Graph
      => entity_network_request(entity_id, depth, limit);

    /// Bipartite story/entity graph for one story
    fn story_entity(story_id: u64, limit: Option<u32>) -> Graph
      => story_entity_request(story_id, limit);

    /// Topic cluster; without `topic_id` the API picks the top clusters
    fn topic_cluster(topic_id: Option<u64>, limit: Option<u32>) -> Graph
      => topic_cluster_request(topic_id, limit);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_entity_network() {
    let request = entity_network_request(77, Some(2), None);
    assert_eq!(request.path(), "/graph/entity-network");
    assert_eq!(request.query(), [("entity_id", "77".to_string()), ("depth", "2".to_string())]);
  }

  #[test]
  fn test_story_entity() {
    let request = story_entity_request(42, Some(50));
    assert_eq!(request.path(), "/graph/story-entity");
    assert_eq!(request.query_value("story_id"), Some("42"));
    assert_eq!(request.query_value("limit"), Some("50"));
  }

  #[test]
  fn test_topic_cluster_optional_topic() {
    assert!(topic_cluster_request(None, None).query().is_empty());
    assert_eq!(topic_cluster_request(Some(3), None).query_value("topic_id"), Some("3"));
  }
}
