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
use evo_models::message::SendText;

#[derive(Subcommand, Debug)]
pub enum MessageCommands {
  /// Send a text message
  Text {
    /// Instance to send from
    instance: String,

    /// Recipient number or JID
    #[arg(short, long)]
    number: String,

    #[arg(short, long)]
    text: String,

    /// Typing delay in milliseconds
    #[arg(long)]
    delay: Option<u32>,
  },
}

pub async fn handle_message(cmd: MessageCommands, client: &EvolutionClient) -> Result<()> {
  match cmd {
    MessageCommands::Text { instance, number, text, delay } => {
      let mut request = SendText::new(number, text);
      request.options.delay = delay;
      print_json(&client.message().send_text(&instance, &request).await?)
    }
  }
}
