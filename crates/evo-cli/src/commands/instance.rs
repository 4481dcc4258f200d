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
use clap::{Subcommand, ValueEnum};
use evo_client::EvolutionClient;
use evo_models::instance::{CreateInstanceRequest, Integration};
use tracing::info;

#[derive(Subcommand, Debug)]
pub enum InstanceCommands {
  /// Create a new instance
  Create {
    /// Instance name
    name: String,

    /// Return a QR code right away
    #[arg(long)]
    qrcode: bool,

    #[arg(long, value_enum, default_value_t = IntegrationArg::Baileys)]
    integration: IntegrationArg,

    /// Instance token (required for WhatsApp Business)
    #[arg(long)]
    token: Option<String>,

    /// Business phone number (required for WhatsApp Business)
    #[arg(long)]
    number: Option<String>,
  },

  /// List instances
  List {
    /// Only the instance with this name
    #[arg(short, long)]
    name: Option<String>,
  },

  /// Connect an instance and print its QR or pairing code
  Connect {
    name: String,

    /// Phone number (digits only) to request a pairing code for
    #[arg(short, long)]
    number: Option<String>,
  },

  /// Show the connection state
  State { name: String },

  Restart { name: String },

  /// Log the WhatsApp session out
  Logout { name: String },

  Delete { name: String },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntegrationArg {
  Baileys,
  Business,
  Evolution,
}

impl From<IntegrationArg> for Integration {
  fn from(arg: IntegrationArg) -> Self {
    match arg {
      IntegrationArg::Baileys => Integration::WhatsappBaileys,
      IntegrationArg::Business => Integration::WhatsappBusiness,
      IntegrationArg::Evolution => Integration::Evolution,
    }
  }
}

pub async fn handle_instance(cmd: InstanceCommands, client: &EvolutionClient) -> Result<()> {
  let instance = client.instance();
  match cmd {
    InstanceCommands::Create { name, qrcode, integration, token, number } => {
      let mut request = CreateInstanceRequest::new(name).with_qrcode(qrcode).with_integration(integration.into());
      request.token = token;
      request.number = number;
      print_json(&instance.create(&request).await?)
    }
    InstanceCommands::List { name } => print_json(&instance.fetch_instances(name.as_deref()).await?),
    InstanceCommands::Connect { name, number } => {
      print_json(&instance.connect(&name, number.as_deref()).await?)
    }
    InstanceCommands::State { name } => print_json(&instance.connection_state(&name).await?),
    InstanceCommands::Restart { name } => {
      instance.restart(&name).await?;
      info!("Instance {} restarted", name);
      Ok(())
    }
    InstanceCommands::Logout { name } => {
      instance.logout(&name).await?;
      info!("Instance {} logged out", name);
      Ok(())
    }
    InstanceCommands::Delete { name } => {
      instance.delete(&name).await?;
      info!("Instance {} deleted", name);
      Ok(())
    }
  }
}
