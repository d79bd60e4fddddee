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
use nr_client::{EntityListQuery, EntityRef, NewsRankClient, Pagination};

#[derive(Args, Debug)]
pub struct EntitiesCommand {
  #[command(subcommand)]
  command: EntitiesSubcommands,
}

#[derive(Subcommand, Debug)]
enum EntitiesSubcommands {
  /// List or search entities
  List {
    /// Name search
    #[arg(short, long)]
    query: Option<String>,

    /// person, organization, location, ...
    #[arg(short = 't', long = "type")]
    entity_type: Option<String>,

    #[arg(long)]
    subcategory: Option<String>,

    #[arg(short, long)]
    limit: Option<u32>,

    #[arg(long)]
    offset: Option<u32>,
  },

  /// Trending entities
  Trending {
    #[arg(short, long)]
    limit: Option<u32>,
  },

  /// Politician entities
  Politicians {
    #[arg(short, long)]
    limit: Option<u32>,

    #[arg(long)]
    offset: Option<u32>,
  },

  /// Get one entity by id or slug
  Get {
    entity: String,

    #[arg(long)]
    slug: bool,
  },

  /// Articles mentioning an entity
  Articles {
    entity: String,

    #[arg(long)]
    slug: bool,

    #[arg(short, long)]
    limit: Option<u32>,

    #[arg(long)]
    offset: Option<u32>,
  },
}

pub async fn execute(cmd: EntitiesCommand, client: &NewsRankClient) -> Result<()> {
  let entities = client.entities();
  match cmd.command {
    EntitiesSubcommands::List { query, entity_type, subcategory, limit, offset } => {
      let query = EntityListQuery { q: query, entity_type, subcategory, limit, offset };
      print_json(&entities.list(&query).await?)
    }
    EntitiesSubcommands::Trending { limit } => print_json(&entities.trending(limit).await?),
    EntitiesSubcommands::Politicians { limit, offset } => {
      print_json(&entities.politicians(Pagination { limit, offset }).await?)
    }
    EntitiesSubcommands::Get { entity, slug } => {
      print_json(&entities.get(id_or_slug::<EntityRef>(entity, slug)).await?)
    }
    EntitiesSubcommands::Articles { entity, slug, limit, offset } => {
      let entity = id_or_slug::<EntityRef>(entity, slug);
      print_json(&entities.articles(entity, Pagination { limit, offset }).await?)
    }
  }
}
