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

//! Message sending endpoints
//!
//! Every operation posts to `message/{operation}/{instance}` and answers with
//! the stored message, whatever the content type.

use super::{check_request, impl_endpoint_base, EndpointBase};
use crate::transport::{Route, Transport};
use evo_core::{Resource, Result, Validate};
use evo_models::message::*;
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

/// Outgoing message endpoints
pub struct MessageEndpoints {
  transport: Arc<Transport>,
}

impl MessageEndpoints {
  /// Create a new message endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  async fn send<R>(&self, operation: &'static str, instance: &str, request: &R) -> Result<MessageResponse>
  where
    R: Validate + Serialize,
  {
    check_request(instance, request)?;
    self.transport().post(&Route::new(Resource::Message, operation).instance(instance), request).await
  }

  /// Send a plain text message
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use evo_client::EvolutionClient;
  /// # use evo_models::message::SendText;
  /// # async fn run(client: EvolutionClient) -> evo_core::Result<()> {
  /// let sent = client.message().send_text("sales", &SendText::new("5511999999999", "Hi!")).await?;
  /// println!("sent {}", sent.key.id);
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, request))]
  pub async fn send_text(&self, instance: &str, request: &SendText) -> Result<MessageResponse> {
    self.send("sendText", instance, request).await
  }

  #[instrument(skip(self, request))]
  pub async fn send_media(&self, instance: &str, request: &SendMedia) -> Result<MessageResponse> {
    self.send("sendMedia", instance, request).await
  }

  /// Send a voice note
  #[instrument(skip(self, request))]
  pub async fn send_whatsapp_audio(&self, instance: &str, request: &SendAudio) -> Result<MessageResponse> {
    self.send("sendWhatsAppAudio", instance, request).await
  }

  #[instrument(skip(self, request))]
  pub async fn send_sticker(&self, instance: &str, request: &SendSticker) -> Result<MessageResponse> {
    self.send("sendSticker", instance, request).await
  }

  #[instrument(skip(self, request))]
  pub async fn send_location(&self, instance: &str, request: &SendLocation) -> Result<MessageResponse> {
    self.send("sendLocation", instance, request).await
  }

  #[instrument(skip(self, request))]
  pub async fn send_contact(&self, instance: &str, request: &SendContact) -> Result<MessageResponse> {
    self.send("sendContact", instance, request).await
  }

  #[instrument(skip(self, request))]
  pub async fn send_reaction(&self, instance: &str, request: &SendReaction) -> Result<MessageResponse> {
    self.send("sendReaction", instance, request).await
  }

  #[instrument(skip(self, request))]
  pub async fn send_poll(&self, instance: &str, request: &SendPoll) -> Result<MessageResponse> {
    self.send("sendPoll", instance, request).await
  }

  #[instrument(skip(self, request))]
  pub async fn send_list(&self, instance: &str, request: &SendList) -> Result<MessageResponse> {
    self.send("sendList", instance, request).await
  }

  #[instrument(skip(self, request))]
  pub async fn send_buttons(&self, instance: &str, request: &SendButtons) -> Result<MessageResponse> {
    self.send("sendButtons", instance, request).await
  }

  /// Post a status (story) visible to contacts
  #[instrument(skip(self, request))]
  pub async fn send_status(&self, instance: &str, request: &SendStatus) -> Result<MessageResponse> {
    self.send("sendStatus", instance, request).await
  }
}

impl_endpoint_base!(MessageEndpoints);
