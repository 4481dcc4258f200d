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

use crate::endpoints::{
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
use crate::transport::Transport;
use evo_core::{Config, Result};
use evo_models::chatbot::{Dify, EvolutionBot, Flowise, N8n, OpenAi, Provider, Typebot};
use evo_models::common::ServerInfo;
use std::fmt;
use std::sync::Arc;
use tracing::instrument;

/// Main Evolution API client
///
/// Provides access to every resource of the gateway through endpoint
/// modules. The client holds no per-call state: clones share one HTTP
/// connection pool and may be used from any number of tasks at once.
///
/// # Examples
///
/// ```rust,no_run
/// use evo_client::EvolutionClient;
/// use evo_core::Config;
/// use evo_models::message::SendText;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///   let client = EvolutionClient::new(Config::from_env()?)?;
///
///   let state = client.instance().connection_state("sales").await?;
///   if state.is_open() {
///     client.message().send_text("sales", &SendText::new("5511999999999", "Hello")).await?;
///   }
///   Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct EvolutionClient {
  transport: Arc<Transport>,
}

impl EvolutionClient {
  /// Create a new Evolution API client
  ///
  /// # Errors
  ///
  /// Returns a configuration error for a blank API key, a zero timeout or a
  /// base URL that is not absolute http(s), and an HTTP error if the
  /// underlying client cannot be built.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// use evo_client::EvolutionClient;
  /// use evo_core::Config;
  ///
  /// let config = Config::new("http://localhost:8080", "my-global-key");
  /// let client = EvolutionClient::new(config).expect("Failed to create client");
  /// ```
  pub fn new(config: Config) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(&config)?) })
  }

  /// Version banner served on the gateway root
  #[instrument(skip(self))]
  pub async fn info(&self) -> Result<ServerInfo> {
    self.transport.get_root().await
  }

  /// Instance lifecycle: create, connect, state, restart, logout, delete
  pub fn instance(&self) -> InstanceEndpoints {
    InstanceEndpoints::new(self.transport.clone())
  }

  pub fn proxy(&self) -> ProxyEndpoints {
    ProxyEndpoints::new(self.transport.clone())
  }

  pub fn settings(&self) -> SettingsEndpoints {
    SettingsEndpoints::new(self.transport.clone())
  }

  /// Sending text, media, polls, lists and other message types
  pub fn message(&self) -> MessageEndpoints {
    MessageEndpoints::new(self.transport.clone())
  }

  pub fn chat(&self) -> ChatEndpoints {
    ChatEndpoints::new(self.transport.clone())
  }

  /// Own profile and privacy settings
  pub fn profile(&self) -> ProfileEndpoints {
    ProfileEndpoints::new(self.transport.clone())
  }

  pub fn group(&self) -> GroupEndpoints {
    GroupEndpoints::new(self.transport.clone())
  }

  pub fn label(&self) -> LabelEndpoints {
    LabelEndpoints::new(self.transport.clone())
  }

  pub fn call(&self) -> CallEndpoints {
    CallEndpoints::new(self.transport.clone())
  }

  pub fn template(&self) -> TemplateEndpoints {
    TemplateEndpoints::new(self.transport.clone())
  }

  pub fn webhook(&self) -> WebhookEndpoints {
    WebhookEndpoints::new(self.transport.clone())
  }

  pub fn websocket(&self) -> WebsocketEndpoints {
    WebsocketEndpoints::new(self.transport.clone())
  }

  pub fn rabbitmq(&self) -> RabbitmqEndpoints {
    RabbitmqEndpoints::new(self.transport.clone())
  }

  pub fn sqs(&self) -> SqsEndpoints {
    SqsEndpoints::new(self.transport.clone())
  }

  pub fn chatwoot(&self) -> ChatwootEndpoints {
    ChatwootEndpoints::new(self.transport.clone())
  }

  /// Endpoints of any chatbot provider, e.g. `client.chatbot::<Dify>()`
  pub fn chatbot<P: Provider>(&self) -> ChatbotEndpoints<P> {
    ChatbotEndpoints::new(self.transport.clone())
  }

  /// OpenAI bots plus credential storage
  pub fn openai(&self) -> ChatbotEndpoints<OpenAi> {
    self.chatbot()
  }

  pub fn dify(&self) -> ChatbotEndpoints<Dify> {
    self.chatbot()
  }

  pub fn flowise(&self) -> ChatbotEndpoints<Flowise> {
    self.chatbot()
  }

  /// Typebot flows plus manual session start
  pub fn typebot(&self) -> ChatbotEndpoints<Typebot> {
    self.chatbot()
  }

  pub fn evolution_bot(&self) -> ChatbotEndpoints<EvolutionBot> {
    self.chatbot()
  }

  pub fn n8n(&self) -> ChatbotEndpoints<N8n> {
    self.chatbot()
  }

  /// Get the configured base URL
  pub fn base_url(&self) -> &str {
    self.transport.base_url()
  }
}

impl fmt::Debug for EvolutionClient {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("EvolutionClient").field("transport", &self.transport).finish()
  }
}
