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

//! News source, category and tag models

use serde::{Deserialize, Serialize};

/// A news source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Source {
  pub id: Option<i64>,
  pub name: Option<String>,
  pub domain: Option<String>,
  pub url: Option<String>,
  pub feed_url: Option<String>,
  pub category: Option<String>,
  pub language: Option<String>,
  pub country: Option<String>,
  pub reliability_score: Option<f64>,
  pub bias_label: Option<String>,
  pub article_count: Option<u64>,
  pub active: Option<bool>,
}

/// A news category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
  pub name: Option<String>,
  pub slug: Option<String>,
  pub article_count: Option<u64>,
  pub story_count: Option<u64>,
}

/// A content tag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
  pub name: Option<String>,
  pub count: Option<u64>,
}

/// A source with its ranking metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceRanking {
  pub source_name: Option<String>,
  pub source_domain: Option<String>,
  pub article_count: Option<u64>,
  pub avg_sentiment: Option<f64>,
  pub reliability_score: Option<f64>,
}
