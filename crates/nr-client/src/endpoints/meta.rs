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

//! Meta endpoints: related articles, platform stats, API version and the
//! caller's own usage.

use super::namespace;
use crate::request::ApiRequest;
use nr_models::meta::{RelatedArticle, Stats, UsageRecord, VersionInfo};

pub fn related_request(url_hash: &str, limit: Option<u32>) -> ApiRequest {
  ApiRequest::get("/related").required("url_hash", url_hash).param("limit", limit)
}

pub fn stats_request() -> ApiRequest {
  ApiRequest::get("/stats")
}

/// `/version` is public and is sent without credentials
pub fn version_request() -> ApiRequest {
  ApiRequest::get("/version").unauthenticated()
}

/// Usage between two Unix-millisecond bounds; both optional
pub fn usage_request(from_ms: Option<i64>, to_ms: Option<i64>) -> ApiRequest {
  ApiRequest::get("/usage").param("from_ms", from_ms).param("to_ms", to_ms)
}

namespace! {
  /// Meta and account endpoints
  MetaEndpoints {
    /// Articles related to the one identified by `url_hash`
    fn related(url_hash: &str, limit: Option<u32>) -> Vec<RelatedArticle>
      => related_request(url_hash, limit);

    fn stats() -> Stats => stats_request();
    fn version() -> VersionInfo => version_request();

    /// API usage for the current key
    fn usage(from_ms: Option<i64>, to_ms: Option<i64>) -> UsageRecord
      => usage_request(from_ms, to_ms);
  }
}
