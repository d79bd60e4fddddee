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

//! # nr-models
//!
//! Data models for NewsRank API responses.
//!
//! Every record mirrors a JSON object returned by the API. All fields are
//! optional and default when absent, so a response that omits a key still
//! deserializes; keys the models do not know about are ignored. Callers who
//! need the untouched JSON can request `serde_json::Value` instead.
//!
//! ## Usage
//!
//! ```ignore
//! use nr_models::stories::RankedStoryList;
//!
//! let ranked: RankedStoryList = serde_json::from_str(&response_json)?;
//! for story in &ranked.items {
//!     println!("{:?}", story.title);
//! }
//! ```

#![warn(clippy::all)]

pub mod articles;
pub mod common;
pub mod entities;
pub mod graph;
pub mod meta;
pub mod search;
pub mod sources;
pub mod stories;

// Re-export common types for convenience
pub use common::*;

// Re-export all model types
pub use articles::*;
pub use entities::*;
pub use graph::*;
pub use meta::*;
pub use search::*;
pub use sources::*;
pub use stories::*;
