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
use clap::Parser;
use dotenvy::dotenv;
use nr_client::NewsRankClient;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::Commands;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "newsrank")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// NewsRank API key (nrf_...)
  #[arg(long, global = true, env = nr_core::API_KEY_ENV, hide_env_values = true)]
  api_key: Option<String>,

  /// Override the API base URL
  #[arg(long, global = true, env = nr_core::BASE_URL_ENV)]
  base_url: Option<String>,

  /// Request timeout in seconds
  #[arg(long, global = true, env = nr_core::TIMEOUT_ENV)]
  timeout: Option<u64>,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  let cli = Cli::parse();

  // RUST_LOG wins over --verbose
  let log_level = if cli.verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

  let config = config::resolve(cli.api_key, cli.base_url, cli.timeout)?;
  let client = NewsRankClient::from_config(config)?;
  debug!("using {}", client.base_url());

  let outcome = commands::execute(cli.command, &client).await;
  client.close();
  outcome
}
