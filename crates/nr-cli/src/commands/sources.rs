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
pub struct SourcesCommand {
  #[command(subcommand)]
  command: SourcesSubcommands,
}

#[derive(Subcommand, Debug)]
enum SourcesSubcommands {
  /// All news sources
  List,
  /// All categories
  Categories,
  /// All tags
  Tags,
  /// Source rankings
  Rankings,
}

pub async fn execute(cmd: SourcesCommand, client: &NewsRankClient) -> Result<()> {
  let sources = client.sources();
  match cmd.command {
    SourcesSubcommands::List => print_json(&sources.list().await?),
    SourcesSubcommands::Categories => print_json(&sources.categories().await?),
    SourcesSubcommands::Tags => print_json(&sources.tags().await?),
    SourcesSubcommands::Rankings => print_json(&sources.rankings().await?),
  }
}
