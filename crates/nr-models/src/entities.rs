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

//! Named entity data models

use crate::common::Page;
use serde::{Deserialize, Serialize};

/// A named entity: person, organization, location and so on
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entity {
  pub id: Option<i64>,
  pub name: Option<String>,
  pub slug: Option<String>,

  /// Entity type (`person`, `organization`, `location`, ...)
  #[serde(rename = "type")]
  pub entity_type: Option<String>,

  pub subcategory: Option<String>,
  pub description: Option<String>,
  pub image_url: Option<String>,
  pub wikipedia_url: Option<String>,
  pub article_count: Option<u32>,
  pub story_count: Option<u32>,
  pub first_seen: Option<String>,
  pub last_seen: Option<String>,
  pub trending_score: Option<f64>,
}

/// Paginated list of entities
pub type EntityList = Page<Entity>;

/// Paginated list of politician entities
pub type PoliticianList = Page<Entity>;

/// Currently trending entities
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendingEntityList {
  #[serde(deserialize_with = "crate::common::null_as_default")]
  pub items: Vec<Entity>,
}
