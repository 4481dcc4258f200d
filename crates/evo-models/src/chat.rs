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

//! Chat operations: number lookup, read state, presence, history queries

use crate::common::MessageKey;
use chrono::{DateTime, Utc};
use evo_core::validation::{self, Validate};
use evo_core::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `chat/whatsappNumbers`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhatsappNumbersRequest {
  pub numbers: Vec<String>,
}

impl Validate for WhatsappNumbersRequest {
  fn validate(&self) -> Result<()> {
    validation::not_empty("numbers", &self.numbers)?;
    for number in &self.numbers {
      validation::not_blank("numbers", number)?;
    }
    Ok(())
  }
}

/// Whether a phone number has a WhatsApp account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatsappNumber {
  pub exists: bool,
  pub jid: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub number: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
}

/// Body of `chat/markMessageAsRead`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadMessagesRequest {
  pub read_messages: Vec<MessageKey>,
}

impl Validate for ReadMessagesRequest {
  fn validate(&self) -> Result<()> {
    validation::not_empty("readMessages", &self.read_messages)?;
    self.read_messages.iter().try_for_each(Validate::validate)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastMessage {
  pub key: MessageKey,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message_timestamp: Option<i64>,
}

/// Body of `chat/archiveChat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveChatRequest {
  pub last_message: LastMessage,
  pub chat: String,
  pub archive: bool,
}

impl Validate for ArchiveChatRequest {
  fn validate(&self) -> Result<()> {
    validation::not_blank("chat", &self.chat)?;
    self.last_message.key.validate()
  }
}

/// Body of `chat/markChatUnread`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkChatUnreadRequest {
  pub last_message: LastMessage,
  pub chat: String,
}

impl Validate for MarkChatUnreadRequest {
  fn validate(&self) -> Result<()> {
    validation::not_blank("chat", &self.chat)?;
    self.last_message.key.validate()
  }
}

/// Body of `chat/fetchProfilePictureUrl`, `chat/fetchProfile`, `chat/fetchBusinessProfile`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRequest {
  pub number: String,
}

impl NumberRequest {
  pub fn new(number: impl Into<String>) -> Self {
    Self { number: number.into() }
  }
}

impl Validate for NumberRequest {
  fn validate(&self) -> Result<()> {
    validation::not_blank("number", &self.number)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePicture {
  pub wuid: String,
  #[serde(default)]
  pub profile_picture_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaMessageKey {
  pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaMessageRef {
  pub key: MediaMessageKey,
}

/// Body of `chat/getBase64FromMediaMessage`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaBase64Request {
  pub message: MediaMessageRef,
  #[serde(default)]
  pub convert_to_mp4: bool,
}

impl MediaBase64Request {
  pub fn new(message_id: impl Into<String>) -> Self {
    Self {
      message: MediaMessageRef { key: MediaMessageKey { id: message_id.into() } },
      convert_to_mp4: false,
    }
  }
}

impl Validate for MediaBase64Request {
  fn validate(&self) -> Result<()> {
    validation::not_blank("message.key.id", &self.message.key.id)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaBase64 {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub media_type: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub file_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub mimetype: Option<String>,
  pub base64: String,
}

/// Body of `chat/updateMessage` (edit a sent text)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMessageRequest {
  pub number: String,
  pub key: MessageKey,
  pub text: String,
}

impl Validate for UpdateMessageRequest {
  fn validate(&self) -> Result<()> {
    validation::not_blank("number", &self.number)?;
    validation::not_blank("text", &self.text)?;
    self.key.validate()
  }
}

/// Typing indicator shown in a single chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatPresence {
  Available,
  Unavailable,
  Composing,
  Recording,
  Paused,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendPresenceRequest {
  pub number: String,
  pub presence: ChatPresence,
  /// Milliseconds the indicator stays visible
  pub delay: u32,
}

impl Validate for SendPresenceRequest {
  fn validate(&self) -> Result<()> {
    validation::not_blank("number", &self.number)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockStatus {
  Block,
  Unblock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStatusRequest {
  pub number: String,
  pub status: BlockStatus,
}

impl Validate for BlockStatusRequest {
  fn validate(&self) -> Result<()> {
    validation::not_blank("number", &self.number)
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFilter {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub remote_jid: Option<String>,
}

/// Body of `chat/findContacts`; an empty filter lists every contact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindContactsRequest {
  #[serde(rename = "where")]
  pub filter: ContactFilter,
}

impl Validate for FindContactsRequest {
  fn validate(&self) -> Result<()> {
    validation::optional_not_blank("where.id", self.filter.id.as_deref())?;
    validation::optional_not_blank("where.remoteJid", self.filter.remote_jid.as_deref())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  pub remote_jid: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub push_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub profile_pic_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyFilter {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub remote_jid: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub from_me: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageFilter {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub key: Option<KeyFilter>,
}

/// Body of `chat/findMessages`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindMessagesRequest {
  #[serde(rename = "where")]
  pub filter: MessageFilter,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub page: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub offset: Option<u32>,
}

impl Validate for FindMessagesRequest {
  fn validate(&self) -> Result<()> {
    validation::optional_in_range("page", self.page, 1..=u32::MAX)?;
    validation::optional_in_range("offset", self.offset, 1..=u32::MAX)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecords {
  pub total: u64,
  pub pages: u32,
  pub current_page: u32,
  pub records: Vec<Value>,
}

/// Result of `chat/findMessages`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesPage {
  pub messages: MessageRecords,
}

/// Body of `chat/findStatusMessage`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindStatusMessagesRequest {
  #[serde(rename = "where")]
  pub filter: KeyFilter,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub page: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub offset: Option<u32>,
}

impl Validate for FindStatusMessagesRequest {
  fn validate(&self) -> Result<()> {
    validation::optional_not_blank("where.remoteJid", self.filter.remote_jid.as_deref())?;
    validation::optional_in_range("page", self.page, 1..=u32::MAX)?;
    validation::optional_in_range("offset", self.offset, 1..=u32::MAX)
  }
}

/// Chat entry of `chat/findChats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  pub remote_jid: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub unread_count: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub last_message: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<DateTime<Utc>>,
}
