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

//! Event delivery integrations: webhook, WebSocket, RabbitMQ and SQS
//!
//! Each integration is configured per instance with `{kind}/set` and read
//! back with `{kind}/find`. The configuration is wrapped under its kind's key
//! on the wire, e.g. `{"webhook": {...}}`.

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::{Route, Transport};
use evo_core::validation::{self, Validate};
use evo_core::{Resource, Result};
use evo_models::events::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

async fn set<C, B, T>(
  transport: &Transport,
  resource: Resource,
  instance: &str,
  config: &C,
  body: &B,
) -> Result<T>
where
  C: Validate,
  B: Serialize,
  T: DeserializeOwned,
{
  validation::instance_name(instance)?;
  config.validate()?;
  transport.post(&Route::new(resource, "set").instance(instance), body).await
}

async fn find<T: DeserializeOwned>(transport: &Transport, resource: Resource, instance: &str) -> Result<Option<T>> {
  validation::instance_name(instance)?;
  transport.get_optional(&Route::new(resource, "find").instance(instance)).await
}

/// HTTP callback delivery
pub struct WebhookEndpoints {
  transport: Arc<Transport>,
}

impl WebhookEndpoints {
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Replace the instance's webhook
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use evo_client::EvolutionClient;
  /// # use evo_models::events::{parse_events, WebhookConfig};
  /// # async fn run(client: EvolutionClient) -> evo_core::Result<()> {
  /// let config = WebhookConfig {
  ///   enabled: true,
  ///   url: "https://hooks.example.com/wa".into(),
  ///   events: parse_events(&["MESSAGES_UPSERT", "CONNECTION_UPDATE"])?,
  ///   ..Default::default()
  /// };
  /// client.webhook().set("sales", &config).await?;
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, config))]
  pub async fn set(&self, instance: &str, config: &WebhookConfig) -> Result<Webhook> {
    let body = SetWebhookRequest { webhook: config.clone() };
    set(self.transport(), Resource::Webhook, instance, config, &body).await
  }

  /// `None` when no webhook is configured
  #[instrument(skip(self))]
  pub async fn find(&self, instance: &str) -> Result<Option<Webhook>> {
    find(self.transport(), Resource::Webhook, instance).await
  }
}

impl_endpoint_base!(WebhookEndpoints);

pub struct WebsocketEndpoints {
  transport: Arc<Transport>,
}

impl WebsocketEndpoints {
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  #[instrument(skip(self, config))]
  pub async fn set(&self, instance: &str, config: &WebsocketConfig) -> Result<EventSubscription> {
    let body = SetWebsocketRequest { websocket: config.clone() };
    set(self.transport(), Resource::Websocket, instance, config, &body).await
  }

  #[instrument(skip(self))]
  pub async fn find(&self, instance: &str) -> Result<Option<EventSubscription>> {
    find(self.transport(), Resource::Websocket, instance).await
  }
}

impl_endpoint_base!(WebsocketEndpoints);

pub struct RabbitmqEndpoints {
  transport: Arc<Transport>,
}

impl RabbitmqEndpoints {
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  #[instrument(skip(self, config))]
  pub async fn set(&self, instance: &str, config: &RabbitmqConfig) -> Result<EventSubscription> {
    let body = SetRabbitmqRequest { rabbitmq: config.clone() };
    set(self.transport(), Resource::Rabbitmq, instance, config, &body).await
  }

  #[instrument(skip(self))]
  pub async fn find(&self, instance: &str) -> Result<Option<EventSubscription>> {
    find(self.transport(), Resource::Rabbitmq, instance).await
  }
}

impl_endpoint_base!(RabbitmqEndpoints);

/// Amazon SQS delivery
pub struct SqsEndpoints {
  transport: Arc<Transport>,
}

impl SqsEndpoints {
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  #[instrument(skip(self, config))]
  pub async fn set(&self, instance: &str, config: &SqsConfig) -> Result<EventSubscription> {
    let body = SetSqsRequest { sqs: config.clone() };
    set(self.transport(), Resource::Sqs, instance, config, &body).await
  }

  #[instrument(skip(self))]
  pub async fn find(&self, instance: &str) -> Result<Option<EventSubscription>> {
    find(self.transport(), Resource::Sqs, instance).await
  }
}

impl_endpoint_base!(SqsEndpoints);
