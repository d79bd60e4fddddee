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

//! # nr-core
//!
//! Shared building blocks for the NewsRank client crates: configuration,
//! the error taxonomy every request resolves to, and the small reference
//! types used to address stories, entities and articles.

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{ApiError, Error, ErrorKind, Result};
pub use types::{ArticleRef, EntityRef, Pagination, SortOrder, StoryRef};

/// Base URL for the production NewsRank API
pub const DEFAULT_BASE_URL: &str = "https://newsrank.ai/api/v1";

/// Request timeout applied when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent sent by clients this workspace constructs itself
pub const USER_AGENT: &str = concat!("newsrank-rust/", env!("CARGO_PKG_VERSION"));

/// Prefix every issued NewsRank API key carries
pub const API_KEY_PREFIX: &str = "nrf_";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "NEWSRANK_API_KEY";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "NEWSRANK_BASE_URL";

/// Environment variable overriding the request timeout, in seconds
pub const TIMEOUT_ENV: &str = "NEWSRANK_TIMEOUT_SECS";
