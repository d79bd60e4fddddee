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

//! Reference and paging types shared by the endpoint builders

use serde::{Deserialize, Serialize};

/// Story addressed either by numeric id or by slug.
///
/// Integers convert to [`StoryRef::Id`] and strings to [`StoryRef::Slug`].
/// A numeric string such as `"42"` stays a slug; nothing here parses strings
/// into ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoryRef {
  Id(u64),
  Slug(String),
}

/// Entity addressed either by numeric id or by slug.
///
/// Same conversion rules as [`StoryRef`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityRef {
  Id(u64),
  Slug(String),
}

macro_rules! impl_id_or_slug {
  ($name:ident) => {
    impl $name {
      /// Path segment identifying this resource
      pub fn path_segment(&self) -> String {
        match self {
          $name::Id(id) => id.to_string(),
          $name::Slug(slug) => slug.clone(),
        }
      }

      pub fn is_id(&self) -> bool {
        matches!(self, $name::Id(_))
      }
    }

    impl std::fmt::Display for $name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
          $name::Id(id) => write!(f, "{}", id),
          $name::Slug(slug) => write!(f, "{}", slug),
        }
      }
    }

    impl From<u64> for $name {
      fn from(id: u64) -> Self {
        $name::Id(id)
      }
    }

    impl From<&str> for $name {
      fn from(slug: &str) -> Self {
        $name::Slug(slug.to_string())
      }
    }

    impl From<String> for $name {
      fn from(slug: String) -> Self {
        $name::Slug(slug)
      }
    }

    impl From<&String> for $name {
      fn from(slug: &String) -> Self {
        $name::Slug(slug.clone())
      }
    }

    impl From<&$name> for $name {
      fn from(value: &$name) -> Self {
        value.clone()
      }
    }
  };
}

impl_id_or_slug!(StoryRef);
impl_id_or_slug!(EntityRef);

/// Article addressed by URL hash or by slug
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArticleRef {
  UrlHash(String),
  Slug(String),
}

impl ArticleRef {
  pub fn url_hash(hash: impl Into<String>) -> Self {
    ArticleRef::UrlHash(hash.into())
  }

  pub fn slug(slug: impl Into<String>) -> Self {
    ArticleRef::Slug(slug.into())
  }

  /// Query parameter name and value selecting this article
  pub fn query_pair(&self) -> (&'static str, &str) {
    match self {
      ArticleRef::UrlHash(hash) => ("url_hash", hash),
      ArticleRef::Slug(slug) => ("slug", slug),
    }
  }
}

/// Plain strings are URL hashes, the primary article key.
impl From<&str> for ArticleRef {
  fn from(hash: &str) -> Self {
    ArticleRef::UrlHash(hash.to_string())
  }
}

impl From<String> for ArticleRef {
  fn from(hash: String) -> Self {
    ArticleRef::UrlHash(hash)
  }
}

/// `limit` / `offset` pair accepted by paginated endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pagination {
  pub limit: Option<u32>,
  pub offset: Option<u32>,
}

impl Pagination {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn limit(limit: u32) -> Self {
    Pagination { limit: Some(limit), offset: None }
  }

  pub fn with_offset(mut self, offset: u32) -> Self {
    self.offset = Some(offset);
    self
  }
}

/// Sort direction for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
  Asc,
  Desc,
}

impl std::fmt::Display for SortOrder {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      SortOrder::Asc => write!(f, "asc"),
      SortOrder::Desc => write!(f, "desc"),
    }
  }
}

impl SortOrder {
  /// Parse sort order from string
  pub fn parse(s: &str) -> Option<Self> {
    match s.to_ascii_lowercase().as_str() {
      "asc" => Some(SortOrder::Asc),
      "desc" => Some(SortOrder::Desc),
      _ => None,
    }
  }
}
