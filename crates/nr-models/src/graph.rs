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

//! Graph data models
//!
//! Entity co-occurrence networks, story-entity graphs and topic clusters all
//! share the same node/edge shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A node in a graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphNode {
  pub id: Option<String>,
  pub label: Option<String>,

  /// Node type (`entity`, `story`, `topic`, ...)
  #[serde(rename = "type")]
  pub node_type: Option<String>,

  pub size: Option<f64>,
  #[serde(deserialize_with = "crate::common::null_as_default")]
  pub metadata: Map<String, Value>,
}

/// An edge between two node ids
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphEdge {
  pub source: Option<String>,
  pub target: Option<String>,
  pub weight: Option<f64>,
  pub label: Option<String>,
}

/// A graph of nodes and edges
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Graph {
  #[serde(deserialize_with = "crate::common::null_as_default")]
  pub nodes: Vec<GraphNode>,
  #[serde(deserialize_with = "crate::common::null_as_default")]
  pub edges: Vec<GraphEdge>,
}

impl Graph {
  pub fn node(&self, id: &str) -> Option<&GraphNode> {
    self.nodes.iter().find(|n| n.id.as_deref() == Some(id))
  }

  /// Ids of nodes sharing an edge with `id`, in edge order
  pub fn neighbors(&self, id: &str) -> Vec<&str> {
    self
      .edges
      .iter()
      .filter_map(|e| match (e.source.as_deref(), e.target.as_deref()) {
        (Some(s), Some(t)) if s == id => Some(t),
        (Some(s), Some(t)) if t == id => Some(s),
        _ => None,
      })
      .collect()
  }

  /// Number of edges touching each node id
  pub fn degrees(&self) -> HashMap<&str, usize> {
    let mut degrees = HashMap::new();
    for edge in &self.edges {
      for end in [edge.source.as_deref(), edge.target.as_deref()].into_iter().flatten() {
        *degrees.entry(end).or_insert(0) += 1;
      }
    }
    degrees
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> Graph {
    serde_json::from_str(
      r#"{
        "nodes": [
          {"id": "e1", "label": "Court", "type": "entity", "size": 3.0, "metadata": {"slug": "court"}},
          {"id": "e2", "label": "Senate", "type": "entity"},
          {"id": "e3", "label": "Governor", "type": "entity"}
        ],
        "edges": [
          {"source": "e1", "target": "e2", "weight": 4.0},
          {"source": "e3", "target": "e1", "weight": 1.0}
        ]
      }"#,
    )
    .unwrap()
  }

  #[test]
  fn test_node_lookup() {
    let graph = sample();
    let court = graph.node("e1").unwrap();
    assert_eq!(court.node_type.as_deref(), Some("entity"));
    assert_eq!(court.metadata["slug"], "court");
    assert!(graph.node("missing").is_none());
  }

  #[test]
  fn test_neighbors_and_degrees() {
    let graph = sample();
    assert_eq!(graph.neighbors("e1"), vec!["e2", "e3"]);
    assert_eq!(graph.neighbors("e2"), vec!["e1"]);

    let degrees = graph.degrees();
    assert_eq!(degrees["e1"], 2);
    assert_eq!(degrees["e3"], 1);
  }

  #[test]
  fn test_null_collections_read_as_empty() {
    let graph: Graph = serde_json::from_str(r#"{"nodes": null, "edges": null}"#).unwrap();
    assert!(graph.nodes.is_empty());
    assert!(graph.edges.is_empty());
    assert!(graph.degrees().is_empty());

    let node: GraphNode = serde_json::from_str(r#"{"id": "e1", "metadata": null}"#).unwrap();
    assert!(node.metadata.is_empty());
  }
}
