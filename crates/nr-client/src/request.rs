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

//! Request descriptors.
//!
//! An [`ApiRequest`] is plain data: method, path segments, query pairs and an
//! optional JSON body. Endpoint builders produce them without touching the
//! network, and either transport executes them, so both client flavours
//! always send identical requests.

use reqwest::Method;
use serde_json::Value;
use std::fmt;

/// One API call described as data
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
  method: Method,
  segments: Vec<String>,
  query: Vec<(&'static str, String)>,
  body: Option<Value>,
  authenticated: bool,
}

impl ApiRequest {
  /// Request for `path`, relative to the configured base URL.
  ///
  /// `path` is split on `/`; each piece becomes one percent-encoded segment.
  pub fn new(method: Method, path: &str) -> Self {
    Self {
      method,
      segments: path.split('/').filter(|s| !s.is_empty()).map(str::to_string).collect(),
      query: Vec::new(),
      body: None,
      authenticated: true,
    }
  }

  pub fn get(path: &str) -> Self {
    Self::new(Method::GET, path)
  }

  pub fn post(path: &str) -> Self {
    Self::new(Method::POST, path)
  }

  /// Append one path segment verbatim; `/` inside it is encoded, not split
  pub fn segment(mut self, segment: impl Into<String>) -> Self {
    self.segments.push(segment.into());
    self
  }

  /// Add a query parameter when `value` is present. `None` is never sent.
  pub fn param<V: fmt::Display>(mut self, name: &'static str, value: Option<V>) -> Self {
    if let Some(value) = value {
      self.query.push((name, value.to_string()));
    }
    self
  }

  /// Add a query parameter that is always sent
  pub fn required<V: fmt::Display>(self, name: &'static str, value: V) -> Self {
    self.param(name, Some(value))
  }

  /// Attach a JSON body
  pub fn json(mut self, body: Value) -> Self {
    self.body = Some(body);
    self
  }

  /// Send without the `Authorization` header
  pub fn unauthenticated(mut self) -> Self {
    self.authenticated = false;
    self
  }

  pub fn method(&self) -> &Method {
    &self.method
  }

  pub fn segments(&self) -> &[String] {
    &self.segments
  }

  /// Path as written, e.g. `/stories/42/developments`
  pub fn path(&self) -> String {
    format!("/{}", self.segments.join("/"))
  }

  pub fn query(&self) -> &[(&'static str, String)] {
    &self.query
  }

  /// Value of query parameter `name`, if it will be sent
  pub fn query_value(&self, name: &str) -> Option<&str> {
    self.query.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
  }

  pub fn body(&self) -> Option<&Value> {
    self.body.as_ref()
  }

  pub fn is_authenticated(&self) -> bool {
    self.authenticated
  }
}

impl fmt::Display for ApiRequest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.method, self.path())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_path_splitting() {
    let request = ApiRequest::get("/stories/ranked");
    assert_eq!(request.segments(), ["stories", "ranked"]);
    assert_eq!(request.path(), "/stories/ranked");
    assert_eq!(request.to_string(), "GET /stories/ranked");
  }

  #[test]
  fn test_none_params_are_dropped() {
    let request = ApiRequest::get("/items")
      .param("limit", Some(5))
      .param::<&str>("category", None)
      .required("q", "climate");
    assert_eq!(request.query(), [("limit", "5".to_string()), ("q", "climate".to_string())]);
    assert_eq!(request.query_value("category"), None);
  }

  #[test]
  fn test_segment_is_not_split() {
    let request = ApiRequest::get("/stories").segment("a/b");
    assert_eq!(request.segments(), ["stories", "a/b"]);
  }

  #[test]
  fn test_flags_and_body() {
    let request = ApiRequest::post("/things").json(json!({"a": 1})).unauthenticated();
    assert_eq!(request.method(), &Method::POST);
    assert_eq!(request.body(), Some(&json!({"a": 1})));
    assert!(!request.is_authenticated());
    assert!(ApiRequest::get("/stats").is_authenticated());
  }
}
