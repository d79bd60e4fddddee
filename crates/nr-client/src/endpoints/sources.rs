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

//! Source, category, tag and ranking listings. None take parameters.

use super::namespace;
use crate::request::ApiRequest;
use nr_models::sources::{Category, Source, SourceRanking, Tag};

pub fn list_request() -> ApiRequest {
  ApiRequest::get("/sources")
}

pub fn categories_request() -> ApiRequest {
  ApiRequest::get("/categories")
}

pub fn tags_request() -> ApiRequest {
  ApiRequest::get("/tags")
}

pub fn rankings_request() -> ApiRequest {
  ApiRequest::get("/source-rankings")
}

namespace! {
  /// Source metadata endpoints
  SourcesEndpoints {
    /// All tracked news sources
    fn list() -> Vec<Source> => list_request();
    fn categories() -> Vec<Category> => categories_request();
    fn tags() -> Vec<Tag> => tags_request();

    /// Sources ordered by reliability and coverage score
    fn rankings() -> Vec<SourceRanking> => rankings_request();
  }
}
