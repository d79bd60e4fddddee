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
use anyhow::Result;
use clap::{Args, Subcommand};
use nr_client::{NewsRankClient, Pagination};

#[derive(Args, Debug)]
pub struct SearchCommand {
  #[command(subcommand)]
  command: SearchSubcommands,
}

#[derive(Subcommand, Debug)]
enum SearchSubcommands {
  /// Search articles
  Articles {
    query: String,

    #[arg(short, long)]
    limit: Option<u32>,

    #[arg(long)]
    offset: Option<u32>,
  },

  /// Search articles and stories
  Full {
    query: String,

    #[arg(short, long)]
    limit: Option<u32>,

    #[arg(long)]
    offset: Option<u32>,
  },

  /// Autocomplete suggestions
  Suggest {
    query: String,

    #[arg(short, long)]
    limit: Option<u32>,
  },
}

pub async fn execute(cmd: SearchCommand, client: &NewsRankClient) -> Result<()> {
  let search = client.search();
  match cmd.command {
    SearchSubcommands::Articles { query, limit, offset } => {
      print_json(&search.articles(&query, Pagination { limit, offset }).await?)
    }
    SearchSubcommands::Full { query, limit, offset } => {
      print_json(&search.full(&query, Pagination { limit, offset }).await?)
    }
    SearchSubcommands::Suggest { query, limit } => print_json(&search.suggest(&query, limit).await?),
  }
}
