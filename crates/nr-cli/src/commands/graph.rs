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
pub struct GraphCommand {
  #[command(subcommand)]
  command: GraphSubcommands,
}

#[derive(Subcommand, Debug)]
enum GraphSubcommands {
  /// Co-occurrence network around an entity
  EntityNetwork {
    entity_id: u64,

    #[arg(short, long)]
    depth: Option<u32>,

    #[arg(short, long)]
    limit: Option<u32>,
  },

  /// Entities linked to a story
  StoryEntity {
    story_id: u64,

    #[arg(short, long)]
    limit: Option<u32>,
  },

  /// Topic cluster graph
  TopicCluster {
    #[arg(long)]
    topic_id: Option<u64>,

    #[arg(short, long)]
    limit: Option<u32>,
  },
}

pub async fn execute(cmd: GraphCommand, client: &NewsRankClient) -> Result<()> {
  let graph = client.graph();
  match cmd.command {
    GraphSubcommands::EntityNetwork { entity_id, depth, limit } => {
      print_json(&graph.entity_network(entity_id, depth, limit).await?)
    }
    GraphSubcommands::StoryEntity { story_id, limit } => {
      print_json(&graph.story_entity(story_id, limit).await?)
    }
    GraphSubcommands::TopicCluster { topic_id, limit } => {
      print_json(&graph.topic_cluster(topic_id, limit).await?)
    }
  }
}
