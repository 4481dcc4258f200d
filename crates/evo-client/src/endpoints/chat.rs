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

//! Chat endpoints: number lookup, read state, presence and history queries

use super::{check_request, impl_endpoint_base, EndpointBase};
use crate::transport::{Route, Transport};
use evo_core::validation;
use evo_core::{Resource, Result};
use evo_models::chat::*;
use evo_models::common::MessageKey;
use evo_models::message::MessageResponse;
use reqwest::Method;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::instrument;

/// Chat related endpoints
pub struct ChatEndpoints {
  transport: Arc<Transport>,
}

impl ChatEndpoints {
  /// Create a new chat endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  fn route(operation: &'static str, instance: &str) -> Route {
    Route::new(Resource::Chat, operation).instance(instance)
  }

  /// Check which numbers have a WhatsApp account
  #[instrument(skip(self, request))]
  pub async fn whatsapp_numbers(
    &self,
    instance: &str,
    request: &WhatsappNumbersRequest,
  ) -> Result<Vec<WhatsappNumber>> {
    check_request(instance, request)?;
    let numbers = self.transport().post_optional(&Self::route("whatsappNumbers", instance), request).await?;
    Ok(numbers.unwrap_or_default())
  }

  #[instrument(skip(self, request))]
  pub async fn mark_as_read(&self, instance: &str, request: &ReadMessagesRequest) -> Result<()> {
    check_request(instance, request)?;
    let body = Transport::to_body(request)?;
    self.transport().execute(Method::POST, &Self::route("markMessageAsRead", instance), Some(body)).await
  }

  #[instrument(skip(self, request))]
  pub async fn mark_as_unread(&self, instance: &str, request: &MarkChatUnreadRequest) -> Result<()> {
    check_request(instance, request)?;
    let body = Transport::to_body(request)?;
    self.transport().execute(Method::POST, &Self::route("markChatUnread", instance), Some(body)).await
  }

  #[instrument(skip(self, request))]
  pub async fn archive_chat(&self, instance: &str, request: &ArchiveChatRequest) -> Result<()> {
    check_request(instance, request)?;
    let body = Transport::to_body(request)?;
    self.transport().execute(Method::POST, &Self::route("archiveChat", instance), Some(body)).await
  }

  /// Revoke a sent message for every participant
  #[instrument(skip(self, key))]
  pub async fn delete_message_for_everyone(&self, instance: &str, key: &MessageKey) -> Result<()> {
    check_request(instance, key)?;
    let body = Transport::to_body(key)?;
    self
      .transport()
      .execute(Method::DELETE, &Self::route("deleteMessageForEveryone", instance), Some(body))
      .await
  }

  #[instrument(skip(self, request))]
  pub async fn fetch_profile_picture_url(
    &self,
    instance: &str,
    request: &NumberRequest,
  ) -> Result<ProfilePicture> {
    check_request(instance, request)?;
    self.transport().post(&Self::route("fetchProfilePictureUrl", instance), request).await
  }

  /// Download the media of a stored message as base64
  #[instrument(skip(self, request))]
  pub async fn get_base64_from_media_message(
    &self,
    instance: &str,
    request: &MediaBase64Request,
  ) -> Result<MediaBase64> {
    check_request(instance, request)?;
    self.transport().post(&Self::route("getBase64FromMediaMessage", instance), request).await
  }

  /// Edit the text of a message already sent
  #[instrument(skip(self, request))]
  pub async fn update_message(
    &self,
    instance: &str,
    request: &UpdateMessageRequest,
  ) -> Result<MessageResponse> {
    check_request(instance, request)?;
    self.transport().post(&Self::route("updateMessage", instance), request).await
  }

  #[instrument(skip(self, request))]
  pub async fn send_presence(&self, instance: &str, request: &SendPresenceRequest) -> Result<()> {
    check_request(instance, request)?;
    let body = Transport::to_body(request)?;
    self.transport().execute(Method::POST, &Self::route("sendPresence", instance), Some(body)).await
  }

  #[instrument(skip(self, request))]
  pub async fn update_block_status(&self, instance: &str, request: &BlockStatusRequest) -> Result<()> {
    check_request(instance, request)?;
    let body = Transport::to_body(request)?;
    self.transport().execute(Method::POST, &Self::route("updateBlockStatus", instance), Some(body)).await
  }

  #[instrument(skip(self, request))]
  pub async fn find_contacts(&self, instance: &str, request: &FindContactsRequest) -> Result<Vec<Contact>> {
    check_request(instance, request)?;
    let contacts = self.transport().post_optional(&Self::route("findContacts", instance), request).await?;
    Ok(contacts.unwrap_or_default())
  }

  /// Page through stored messages matching a key filter
  #[instrument(skip(self, request))]
  pub async fn find_messages(&self, instance: &str, request: &FindMessagesRequest) -> Result<MessagesPage> {
    check_request(instance, request)?;
    self.transport().post(&Self::route("findMessages", instance), request).await
  }

  /// Status updates are returned as raw documents
  #[instrument(skip(self, request))]
  pub async fn find_status_messages(
    &self,
    instance: &str,
    request: &FindStatusMessagesRequest,
  ) -> Result<Vec<Value>> {
    check_request(instance, request)?;
    let statuses = self.transport().post_optional(&Self::route("findStatusMessage", instance), request).await?;
    Ok(statuses.unwrap_or_default())
  }

  #[instrument(skip(self))]
  pub async fn find_chats(&self, instance: &str) -> Result<Vec<Chat>> {
    validation::instance_name(instance)?;
    let chats = self.transport().post_optional(&Self::route("findChats", instance), &json!({})).await?;
    Ok(chats.unwrap_or_default())
  }
}

impl_endpoint_base!(ChatEndpoints);
