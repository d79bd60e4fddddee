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

use anyhow::Result;
use clap::Subcommand;
use nr_client::NewsRankClient;
use serde::Serialize;

pub mod articles;
pub mod entities;
pub mod graph;
pub mod meta;
pub mod search;
pub mod sources;
pub mod stories;

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// News articles
  Articles(articles::ArticlesCommand),
  /// Clustered stories
  Stories(stories::StoriesCommand),
  /// Article, story and autocomplete search
  Search(search::SearchCommand),
  /// People, organisations and other entities
  Entities(entities::EntitiesCommand),
  /// Sources, categories, tags and source rankings
  Sources(sources::SourcesCommand),
  /// Relationship graphs
  Graph(graph::GraphCommand),
  /// Stats, version, usage and related articles
  Meta(meta::MetaCommand),
}

pub async fn execute(cmd: Commands, client: &NewsRankClient) -> Result<()> {
  match cmd {
    Commands::Articles(cmd) => articles::execute(cmd, client).await,
    Commands::Stories(cmd) => stories::execute(cmd, client).await,
    Commands::Search(cmd) => search::execute(cmd, client).await,
    Commands::Entities(cmd) => entities::execute(cmd, client).await,
    Commands::Sources(cmd) => sources::execute(cmd, client).await,
    Commands::Graph(cmd) => graph::execute(cmd, client).await,
    Commands::Meta(cmd) => meta::execute(cmd, client).await,
  }
}

/// Print a response as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

/// Numeric arguments address by id unless `force_slug` is set
pub fn id_or_slug<R: From<u64> + From<String>>(raw: String, force_slug: bool) -> R {
  if !force_slug {
    if let Ok(id) = raw.parse::<u64>() {
      return R::from(id);
    }
  }
  R::from(raw)
}

#[cfg(test)]
mod tests {
  use super::*;
  use nr_client::{EntityRef, StoryRef};

  #[test]
  fn test_numeric_argument_becomes_id() {
    let story: StoryRef = id_or_slug("42".to_string(), false);
    assert_eq!(story, StoryRef::Id(42));
  }

  #[test]
  fn test_slug_flag_keeps_numeric_slug() {
    let story: StoryRef = id_or_slug("42".to_string(), true);
    assert_eq!(story, StoryRef::Slug("42".to_string()));
  }

  #[test]
  fn test_text_argument_becomes_slug() {
    let entity: EntityRef = id_or_slug("joe-biden".to_string(), false);
    assert_eq!(entity, EntityRef::Slug("joe-biden".to_string()));
  }
}
