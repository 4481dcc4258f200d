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
use clap::Subcommand;
use evo_client::EvolutionClient;

#[derive(Subcommand, Debug)]
pub enum GroupCommands {
  /// Print the invite link of a group
  InviteCode {
    instance: String,

    /// Group JID, ending in @g.us
    #[arg(short, long)]
    group_jid: String,
  },

  /// List every group of an instance
  List {
    instance: String,

    /// Include members
    #[arg(short, long)]
    participants: bool,
  },
}

pub async fn handle_group(cmd: GroupCommands, client: &EvolutionClient) -> Result<()> {
  match cmd {
    GroupCommands::InviteCode { instance, group_jid } => {
      print_json(&client.group().invite_code(&instance, &group_jid).await?)
    }
    GroupCommands::List { instance, participants } => {
      print_json(&client.group().fetch_all_groups(&instance, participants).await?)
    }
  }
}
