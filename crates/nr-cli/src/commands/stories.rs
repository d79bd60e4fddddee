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

use super::{id_or_slug, print_json};
use anyhow::Result;
use clap::{Args, Subcommand};
use nr_client::{NewsRankClient, StoryListQuery, StoryRef};

#[derive(Args, Debug)]
pub struct StoriesCommand {
  #[command(subcommand)]
  command: StoriesSubcommands,
}

#[derive(Subcommand, Debug)]
enum StoriesSubcommands {
  /// List stories
  List {
    #[arg(short, long)]
    limit: Option<u32>,

    #[arg(long)]
    offset: Option<u32>,

    #[arg(short, long)]
    category: Option<String>,
  },

  /// Stories ranked by importance
  Ranked {
    #[arg(short, long)]
    limit: Option<u32>,
  },

  /// Get one story by id or slug
  Get {
    story: String,

    /// Treat a numeric argument as a slug
    #[arg(long)]
    slug: bool,
  },

  /// Story timeline
  Developments {
    story: String,

    #[arg(long)]
    slug: bool,
  },

  /// Changes since a Unix-millisecond timestamp
  Updates {
    story: String,

    #[arg(long)]
    since_ms: i64,

    #[arg(long)]
    slug: bool,
  },
}

pub async fn execute(cmd: StoriesCommand, client: &NewsRankClient) -> Result<()> {
  let stories = client.stories();
  match cmd.command {
    StoriesSubcommands::List { limit, offset, category } => {
      print_json(&stories.list(&StoryListQuery { limit, offset, category }).await?)
    }
    StoriesSubcommands::Ranked { limit } => print_json(&stories.ranked(limit).await?),
    StoriesSubcommands::Get { story, slug } => {
      print_json(&stories.get(id_or_slug::<StoryRef>(story, slug)).await?)
    }
    StoriesSubcommands::Developments { story, slug } => {
      print_json(&stories.developments(id_or_slug::<StoryRef>(story, slug)).await?)
    }
    StoriesSubcommands::Updates { story, since_ms, slug } => {
      print_json(&stories.updates(id_or_slug::<StoryRef>(story, slug), since_ms).await?)
    }
  }
}
