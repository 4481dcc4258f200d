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
use anyhow::{Context, Result};
use clap::Subcommand;
use evo_client::EvolutionClient;
use evo_models::events::{parse_events, WebhookConfig};
use tracing::warn;

#[derive(Subcommand, Debug)]
pub enum WebhookCommands {
  /// Show the webhook of an instance
  Find { instance: String },

  /// Replace the webhook of an instance
  Set {
    instance: String,

    #[arg(short, long)]
    url: String,

    /// Comma separated event names, e.g. MESSAGES_UPSERT,CONNECTION_UPDATE
    #[arg(short, long, value_delimiter = ',')]
    events: Vec<String>,

    /// Post each event to `{url}/{event-name}`
    #[arg(long)]
    by_events: bool,

    /// Embed media as base64
    #[arg(long)]
    base64: bool,

    /// Store the webhook but keep it switched off
    #[arg(long)]
    disabled: bool,
  },
}

pub async fn handle_webhook(cmd: WebhookCommands, client: &EvolutionClient) -> Result<()> {
  match cmd {
    WebhookCommands::Find { instance } => match client.webhook().find(&instance).await? {
      Some(webhook) => print_json(&webhook),
      None => {
        warn!("No webhook configured for {}", instance);
        Ok(())
      }
    },
    WebhookCommands::Set { instance, url, events, by_events, base64, disabled } => {
      let config = WebhookConfig {
        enabled: !disabled,
        url,
        headers: None,
        by_events,
        base64,
        events: parse_events(&events).context("invalid --events")?,
      };
      print_json(&client.webhook().set(&instance, &config).await?)
    }
  }
}
