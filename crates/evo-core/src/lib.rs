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

pub mod config;
pub mod error;
pub mod validation;

pub use config::Config;
pub use error::{Error, Result};
pub use validation::Validate;

/// Resource families exposed by the Evolution API.
///
/// Each variant is the first path segment of every route in that family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
  // Instance lifecycle
  Instance,
  Proxy,
  Settings,

  // Messaging
  Message,
  Chat,
  Group,
  Label,
  Call,
  Template,

  // Event delivery
  Webhook,
  Websocket,
  Rabbitmq,
  Sqs,

  // Integrations
  Chatwoot,
  OpenAi,
  Dify,
  Flowise,
  Typebot,
  EvolutionBot,
  N8n,
}

impl Resource {
  /// Path segment used on the wire
  pub fn as_str(&self) -> &'static str {
    match self {
      Resource::Instance => "instance",
      Resource::Proxy => "proxy",
      Resource::Settings => "settings",
      Resource::Message => "message",
      Resource::Chat => "chat",
      Resource::Group => "group",
      Resource::Label => "label",
      Resource::Call => "call",
      Resource::Template => "template",
      Resource::Webhook => "webhook",
      Resource::Websocket => "websocket",
      Resource::Rabbitmq => "rabbitmq",
      Resource::Sqs => "sqs",
      Resource::Chatwoot => "chatwoot",
      Resource::OpenAi => "openai",
      Resource::Dify => "dify",
      Resource::Flowise => "flowise",
      Resource::Typebot => "typebot",
      Resource::EvolutionBot => "evolutionBot",
      Resource::N8n => "n8n",
    }
  }
}

impl std::fmt::Display for Resource {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Default base URL of a locally hosted Evolution API server
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "apikey";
