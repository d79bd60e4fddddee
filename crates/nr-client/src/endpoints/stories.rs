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

//! Story endpoints
//!
//! Stories are addressed by [`StoryRef`]: `StoryRef::Id(42)` resolves to
//! `/stories/42`, `StoryRef::Slug(..)` to `/stories/<slug>`. The API accepts
//! either form in the same position; the Rust type only guarantees the
//! caller's intent survives (a numeric string is never turned into an id).

use super::namespace;
use crate::request::ApiRequest;
use nr_core::StoryRef;
use nr_models::stories::{RankedStoryList, Story, StoryDevelopment, StoryList, StoryUpdate};

/// Filters for [`StoriesEndpoints::list`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryListQuery {
  pub limit: Option<u32>,
  pub offset: Option<u32>,

  /// Category slug
  pub category: Option<String>,
}

impl StoryListQuery {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn category(mut self, category: impl Into<String>) -> Self {
    self.category = Some(category.into());
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

fn story_path(story: &StoryRef) -> ApiRequest {
  ApiRequest::get("/stories").segment(story.path_segment())
}

pub fn list_request(query: &StoryListQuery) -> ApiRequest {
  ApiRequest::get("/stories")
    .param("limit", query.limit)
    .param("offset", query.offset)
    .param("category", query.category.as_deref())
}

pub fn ranked_request(limit: Option<u32>) -> ApiRequest {
  ApiRequest::get("/stories/ranked").param("limit", limit)
}

pub fn get_request(story: &StoryRef) -> ApiRequest {
  story_path(story)
}

pub fn developments_request(story: &StoryRef) -> ApiRequest {
  story_path(story).segment("developments")
}

pub fn updates_request(story: &StoryRef, since_ms: i64) -> ApiRequest {
  story_path(story).segment("updates").required("since_ms", since_ms)
}

namespace! {
  /// News story endpoints
  StoriesEndpoints {
    /// List stories with optional category filter and pagination
    fn list(query: &StoryListQuery) -> StoryList => list_request(query);

    /// Stories ranked by importance
    fn ranked(limit: Option<u32>) -> RankedStoryList => ranked_request(limit);

    /// Get one story by numeric id or slug
    fn get(story: impl Into<StoryRef>) -> Story => get_request(&story.into());

    /// Timeline of developments for a story, oldest first as sent by the API
    fn developments(story: impl Into<StoryRef>) -> Vec<StoryDevelopment>
      => developments_request(&story.into());

    /// Articles, developments and summary changes after `since_ms`
    /// (Unix milliseconds)
    fn updates(story: impl Into<StoryRef>, since_ms: i64) -> StoryUpdate
      => updates_request(&story.into(), since_ms);
  }
}
