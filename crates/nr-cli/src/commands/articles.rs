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

use super::print_json;
use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use nr_client::{ArticleListQuery, ArticleRef, NewsRankClient, SortOrder};

#[derive(Args, Debug)]
pub struct ArticlesCommand {
  #[command(subcommand)]
  command: ArticlesSubcommands,
}

#[derive(Subcommand, Debug)]
enum ArticlesSubcommands {
  /// List articles
  List {
    #[arg(short, long)]
    limit: Option<u32>,

    #[arg(long)]
    offset: Option<u32>,

    /// Category slug
    #[arg(short, long)]
    category: Option<String>,

    #[arg(short, long)]
    keyword: Option<String>,

    /// Source domain
    #[arg(short, long)]
    source: Option<String>,

    #[arg(long)]
    content_status: Option<String>,

    /// Published after (ISO 8601)
    #[arg(long)]
    date_from: Option<String>,

    /// Published before (ISO 8601)
    #[arg(long)]
    date_to: Option<String>,

    #[arg(long)]
    sort_by: Option<String>,

    /// asc or desc
    #[arg(long)]
    sort_order: Option<String>,
  },

  /// Get one article by URL hash, or by slug with --slug
  Get {
    url_hash: String,

    #[arg(long)]
    slug: bool,
  },

  /// Extracted article text
  Content {
    url_hash: String,

    #[arg(long)]
    max_chars: Option<u32>,
  },
}

pub async fn execute(cmd: ArticlesCommand, client: &NewsRankClient) -> Result<()> {
  match cmd.command {
    ArticlesSubcommands::List {
      limit,
      offset,
      category,
      keyword,
      source,
      content_status,
      date_from,
      date_to,
      sort_by,
      sort_order,
    } => {
      let sort_order = match sort_order {
        Some(raw) => match SortOrder::parse(&raw) {
          Some(order) => Some(order),
          None => bail!("invalid sort order '{}': expected asc or desc", raw),
        },
        None => None,
      };
      let query = ArticleListQuery {
        limit,
        offset,
        category,
        keyword,
        source,
        content_status,
        date_from,
        date_to,
        sort_by,
        sort_order,
      };
      print_json(&client.articles().list(&query).await?)
    }
    ArticlesSubcommands::Get { url_hash, slug } => {
      let article = if slug { ArticleRef::slug(url_hash) } else { ArticleRef::url_hash(url_hash) };
      print_json(&client.articles().get(article).await?)
    }
    ArticlesSubcommands::Content { url_hash, max_chars } => {
      print_json(&client.articles().content(&url_hash, max_chars).await?)
    }
  }
}
