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
use nr_client::NewsRankClient;

#[derive(Args, Debug)]
pub struct MetaCommand {
  #[command(subcommand)]
  command: MetaSubcommands,
}

#[derive(Subcommand, Debug)]
enum MetaSubcommands {
  /// Articles related to an article
  Related {
    url_hash: String,

    #[arg(short, long)]
    limit: Option<u32>,
  },

  /// Platform statistics
  Stats,

  /// API version
  Version,

  /// Usage for this API key between two Unix-millisecond timestamps
  Usage {
    #[arg(long)]
    from_ms: Option<i64>,

    #[arg(long)]
    to_ms: Option<i64>,
  },
}

pub async fn execute(cmd: MetaCommand, client: &NewsRankClient) -> Result<()> {
  let meta = client.meta();
  match cmd.command {
    MetaSubcommands::Related { url_hash, limit } => print_json(&meta.related(&url_hash, limit).await?),
    MetaSubcommands::Stats => print_json(&meta.stats().await?),
    MetaSubcommands::Version => print_json(&meta.version().await?),
    MetaSubcommands::Usage { from_ms, to_ms } => print_json(&meta.usage(from_ms, to_ms).await?),
  }
}
