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

//! # nr-client
//!
//! Client for the NewsRank news-intelligence API.
//!
//! ## Features
//!
//! - Namespaced access to articles, stories, search, entities, sources, graph
//!   and meta endpoints
//! - Async ([`NewsRankClient`]) and blocking ([`blocking::NewsRankClient`])
//!   clients generated from one endpoint table
//! - Typed errors per HTTP status class, with status code and raw body kept
//! - Explicit, idempotent session close; dropping a client closes it
//!
//! ## Quick Start
//!
//! ```no_run
//! use nr_client::{NewsRankClient, Pagination};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NewsRankClient::from_env()?;
//!
//!     let results = client.search().articles("climate policy", Pagination::limit(10)).await?;
//!     println!("{} matching articles", results.items.len());
//!
//!     let network = client.graph().entity_network(1234, Some(2), None).await?;
//!     println!("{} nodes", network.nodes.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every method returns `Result<T, nr_core::Error>`. Non-2xx responses map to
//! `Authentication` (401), `Permission` (403), `NotFound` (404), `RateLimit`
//! (429), `Server` (5xx) or the base `Api` variant; transport failures and
//! timeouts are `Api` errors without a status code. The client never retries.

pub mod blocking;
pub mod client;
pub mod endpoints;
pub mod request;
pub mod transport;

pub use client::{ClientBuilder, NewsRankClient};
pub use endpoints::{
  ArticleListQuery, ArticlesEndpoints, EntitiesEndpoints, EntityListQuery, GraphEndpoints,
  MetaEndpoints, SearchEndpoints, SourcesEndpoints, StoriesEndpoints, StoryListQuery,
};
pub use nr_core::{
  ApiError, ArticleRef, Config, EntityRef, Error, ErrorKind, Pagination, Result, SortOrder,
  StoryRef,
};
pub use nr_models::*;
pub use request::ApiRequest;
pub use transport::{BlockingTransport, SessionStatus, Transport};
