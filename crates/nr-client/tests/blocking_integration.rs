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

//! The blocking client against a mock API.
//!
//! `reqwest::blocking` must not run on an async worker thread, so every
//! client here is built, used and dropped inside `spawn_blocking` while the
//! mock server lives on the test runtime.

use nr_client::blocking::NewsRankClient;
use nr_client::{Error, Pagination, SessionStatus, StoryListQuery};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(uri: String) -> NewsRankClient {
  NewsRankClient::builder("nrf_test_key").base_url(uri).build().unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn rate_limit_maps_to_typed_error_with_message() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/stories/ranked"))
    .and(query_param("limit", "5"))
    .respond_with(ResponseTemplate::new(429).set_body_json(json!({"message": "slow down"})))
    .expect(1)
    .mount(&server)
    .await;

  let uri = server.uri();
  let err = tokio::task::spawn_blocking(move || client_for(uri).stories().ranked(Some(5)))
    .await
    .unwrap()
    .unwrap_err();

  assert!(matches!(err, Error::RateLimit(_)));
  assert_eq!(err.message(), "slow down");
  assert_eq!(err.status_code(), Some(429));
}

#[tokio::test(flavor = "multi_thread")]
async fn same_requests_as_async_client() {
  let server = MockServer::start().await;
  Mock::given(path("/stories"))
    .and(query_param("category", "science"))
    .and(query_param("limit", "2"))
    .and(header("authorization", "Bearer nrf_test_key"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [{"id": 1}, {"id": 2}], "total": 2})))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(path("/stories/supreme-court-climate-ruling/developments"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"title": "Ruling issued"}])))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(path("/search"))
    .and(query_param("q", "nato"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [], "total": 0})))
    .expect(1)
    .mount(&server)
    .await;

  let uri = server.uri();
  tokio::task::spawn_blocking(move || {
    let client = client_for(uri);

    let list = client.stories().list(&StoryListQuery::new().category("science").limit(2)).unwrap();
    assert_eq!(list.len(), 2);
    assert!(!list.has_more());

    let timeline = client.stories().developments("supreme-court-climate-ruling").unwrap();
    assert_eq!(timeline[0].title.as_deref(), Some("Ruling issued"));

    let results = client.search().articles("nato", Pagination::new()).unwrap();
    assert!(results.items.is_empty());
  })
  .await
  .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn closed_client_sends_nothing_and_drop_closes_once() {
  let server = MockServer::start().await;
  Mock::given(path("/tags")).respond_with(ResponseTemplate::new(200).set_body_json(json!([]))).expect(0).mount(&server).await;

  let uri = server.uri();
  let status: SessionStatus = tokio::task::spawn_blocking(move || {
    let client = client_for(uri);
    let status = client.status();
    assert!(client.close());
    assert!(matches!(client.sources().tags(), Err(Error::Closed)));
    drop(client);
    status
  })
  .await
  .unwrap();

  assert!(status.is_closed());
  assert_eq!(status.close_count(), 1);
  server.verify().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn injected_client_is_left_open() {
  let server = MockServer::start().await;
  Mock::given(path("/stats")).respond_with(ResponseTemplate::new(200).set_body_json(json!({"total_articles": 3}))).mount(&server).await;

  let uri = server.uri();
  tokio::task::spawn_blocking(move || {
    let http = reqwest::blocking::Client::new();
    let client = NewsRankClient::builder("nrf_test_key").base_url(uri.clone()).http_client(http.clone()).build().unwrap();
    assert!(!client.status().owns_http_client());
    assert_eq!(client.meta().stats().unwrap().total_articles, Some(3));
    drop(client);

    let response = http.get(format!("{}/stats", uri)).send().unwrap();
    assert!(response.status().is_success());
  })
  .await
  .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn timeout_is_connection_error() {
  let server = MockServer::start().await;
  Mock::given(path("/version"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({})).set_delay(Duration::from_secs(3)))
    .mount(&server)
    .await;

  let uri = server.uri();
  let err = tokio::task::spawn_blocking(move || {
    let client = NewsRankClient::builder("nrf_test_key").base_url(uri).timeout(Duration::from_millis(100)).build().unwrap();
    client.meta().version()
  })
  .await
  .unwrap()
  .unwrap_err();

  assert!(err.is_connection());
  assert_eq!(err.status_code(), None);
}
