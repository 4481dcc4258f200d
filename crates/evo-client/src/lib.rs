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

//! # evo-client
//!
//! Async client for the Evolution API, a self-hosted REST gateway in front
//! of WhatsApp.
//!
//! ## Features
//!
//! - **Instances**: create, pair, inspect and remove WhatsApp sessions
//! - **Messaging**: text, media, audio, stickers, locations, contacts,
//!   reactions, polls, lists, buttons and status posts
//! - **Chats, profile and groups**: history queries, read state, privacy
//!   settings, invites and membership
//! - **Integrations**: webhook, WebSocket, RabbitMQ, SQS, Chatwoot and six
//!   chatbot providers behind one generic endpoint type
//!
//! Requests are validated locally before serialization. A call that fails
//! validation returns `Error::Validation` and sends nothing.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use evo_client::EvolutionClient;
//! use evo_core::Config;
//! use evo_models::instance::CreateInstanceRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let client = EvolutionClient::new(Config::from_env()?)?;
//!
//!   let created = client.instance().create(&CreateInstanceRequest::new("sales").with_qrcode(true)).await?;
//!   println!("created {:?}", created.instance_name());
//!
//!   let qr = client.instance().connect("sales", None).await?;
//!   println!("scan: {:?}", qr.code);
//!   Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, evo_core::Error>`. A 404 surfaces as
//! `Error::NotFound`, any other non-2xx status as `Error::RequestFailed`
//! carrying the status code and raw body. Nothing is retried.

#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use client::EvolutionClient;
pub use evo_core::{Config, Error, Result};

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  call::CallEndpoints,
  chat::ChatEndpoints,
  chatbot::ChatbotEndpoints,
  chatwoot::ChatwootEndpoints,
  events::{RabbitmqEndpoints, SqsEndpoints, WebhookEndpoints, WebsocketEndpoints},
  group::GroupEndpoints,
  instance::InstanceEndpoints,
  label::LabelEndpoints,
  message::MessageEndpoints,
  profile::ProfileEndpoints,
  proxy::ProxyEndpoints,
  settings::SettingsEndpoints,
  template::TemplateEndpoints,
};
