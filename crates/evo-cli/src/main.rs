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
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use evo_client::EvolutionClient;
use evo_core::Config;
use tracing::debug;

mod commands;
use commands::{
  group::{handle_group, GroupCommands},
  instance::{handle_instance, InstanceCommands},
  message::{handle_message, MessageCommands},
  webhook::{handle_webhook, WebhookCommands},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "evo")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Manage WhatsApp instances
  Instance {
    #[command(subcommand)]
    cmd: InstanceCommands,
  },
  /// Send messages
  Message {
    #[command(subcommand)]
    cmd: MessageCommands,
  },
  /// Inspect groups
  Group {
    #[command(subcommand)]
    cmd: GroupCommands,
  },
  /// Configure webhook delivery
  Webhook {
    #[command(subcommand)]
    cmd: WebhookCommands,
  },
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  let cli = Cli::parse();

  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).with_writer(std::io::stderr).init();

  let config = Config::from_env()?;
  debug!("Using Evolution API at {}", config.base_url);
  let client = EvolutionClient::new(config)?;

  match cli.command {
    Commands::Instance { cmd } => handle_instance(cmd, &client).await?,
    Commands::Message { cmd } => handle_message(cmd, &client).await?,
    Commands::Group { cmd } => handle_group(cmd, &client).await?,
    Commands::Webhook { cmd } => handle_webhook(cmd, &client).await?,
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::CommandFactory;

  #[test]
  fn test_cli_definition() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_parse_nested_subcommands() {
    let cli = Cli::try_parse_from(["evo", "-v", "instance", "connect", "sales", "--number", "5511999999999"])
      .unwrap();
    assert!(cli.verbose);
    assert!(matches!(
      cli.command,
      Commands::Instance { cmd: InstanceCommands::Connect { ref name, number: Some(_) } } if name == "sales"
    ));

    let cli = Cli::try_parse_from(["evo", "webhook", "set", "sales", "--url", "https://h.example.com", "--events", "CALL,LOGOUT_INSTANCE"])
      .unwrap();
    assert!(matches!(cli.command, Commands::Webhook { cmd: WebhookCommands::Set { .. } }));
  }

  #[test]
  fn test_missing_arguments_rejected() {
    assert!(Cli::try_parse_from(["evo", "message", "text", "sales"]).is_err());
    assert!(Cli::try_parse_from(["evo", "group", "invite-code", "sales"]).is_err());
  }
}
