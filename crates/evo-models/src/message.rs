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

//! Outgoing message models for the `message/send*` operations

use crate::common::{MessageKey, MessageOptions};
use evo_core::validation::{self, Validate};
use evo_core::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Plain text message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendText {
  pub number: String,
  pub text: String,
  #[serde(flatten)]
  pub options: MessageOptions,
}

impl SendText {
  pub fn new(number: impl Into<String>, text: impl Into<String>) -> Self {
    Self { number: number.into(), text: text.into(), options: MessageOptions::default() }
  }
}

impl Validate for SendText {
  fn validate(&self) -> Result<()> {
    validation::not_blank("number", &self.number)?;
    validation::not_blank("text", &self.text)?;
    self.options.validate()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
  Image,
  Video,
  Document,
  Audio,
}

/// Image, video, document or audio attachment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMedia {
  pub number: String,
  pub mediatype: MediaType,
  /// URL or base64 payload
  pub media: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub mimetype: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub file_name: Option<String>,
  #[serde(flatten)]
  pub options: MessageOptions,
}

impl SendMedia {
  pub fn new(number: impl Into<String>, mediatype: MediaType, media: impl Into<String>) -> Self {
    Self {
      number: number.into(),
      mediatype,
      media: media.into(),
      mimetype: None,
      caption: None,
      file_name: None,
      options: MessageOptions::default(),
    }
  }
}

impl Validate for SendMedia {
  fn validate(&self) -> Result<()> {
    validation::not_blank("number", &self.number)?;
    validation::not_blank("media", &self.media)?;
    if self.mediatype == MediaType::Document {
      validation::required("fileName", self.file_name.as_deref())?;
    }
    self.options.validate()
  }
}

/// Voice note (sent as push-to-talk audio)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendAudio {
  pub number: String,
  pub audio: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub encoding: Option<bool>,
  #[serde(flatten)]
  pub options: MessageOptions,
}

impl Validate for SendAudio {
  fn validate(&self) -> Result<()> {
    validation::not_blank("number", &self.number)?;
    validation::not_blank("audio", &self.audio)?;
    self.options.validate()
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSticker {
  pub number: String,
  pub sticker: String,
  #[serde(flatten)]
  pub options: MessageOptions,
}

impl Validate for SendSticker {
  fn validate(&self) -> Result<()> {
    validation::not_blank("number", &self.number)?;
    validation::not_blank("sticker", &self.sticker)?;
    self.options.validate()
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendLocation {
  pub number: String,
  pub name: String,
  pub address: String,
  pub latitude: f64,
  pub longitude: f64,
  #[serde(flatten)]
  pub options: MessageOptions,
}

impl Validate for SendLocation {
  fn validate(&self) -> Result<()> {
    validation::not_blank("number", &self.number)?;
    validation::in_range("latitude", self.latitude, -90.0..=90.0)?;
    validation::in_range("longitude", self.longitude, -180.0..=180.0)?;
    self.options.validate()
  }
}

/// vCard entry of a contact message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactCard {
  pub full_name: String,
  /// WhatsApp id, digits only
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub wuid: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub phone_number: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub organization: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendContact {
  pub number: String,
  pub contact: Vec<ContactCard>,
}

impl Validate for SendContact {
  fn validate(&self) -> Result<()> {
    validation::not_blank("number", &self.number)?;
    validation::not_empty("contact", &self.contact)?;
    for card in &self.contact {
      validation::not_blank("contact.fullName", &card.full_name)?;
      if card.wuid.is_none() && card.phone_number.is_none() {
        return Err(Error::validation("contact.phoneNumber", "is required without wuid"));
      }
    }
    Ok(())
  }
}

/// Emoji reaction; an empty `reaction` removes a previous one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReaction {
  pub key: MessageKey,
  pub reaction: String,
}

impl Validate for SendReaction {
  fn validate(&self) -> Result<()> {
    self.key.validate()
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendPoll {
  pub number: String,
  pub name: String,
  /// 0 allows any number of choices
  pub selectable_count: u32,
  pub values: Vec<String>,
  #[serde(flatten)]
  pub options: MessageOptions,
}

impl Validate for SendPoll {
  fn validate(&self) -> Result<()> {
    validation::not_blank("number", &self.number)?;
    validation::not_blank("name", &self.name)?;
    validation::len_in_range("values", &self.values, 2..=12)?;
    for value in &self.values {
      validation::not_blank("values", value)?;
    }
    validation::in_range("selectableCount", self.selectable_count as usize, 0..=self.values.len())?;
    self.options.validate()
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRow {
  pub title: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub row_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSection {
  pub title: String,
  pub rows: Vec<ListRow>,
}

/// Interactive list message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendList {
  pub number: String,
  pub title: String,
  pub description: String,
  pub button_text: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub footer_text: Option<String>,
  pub sections: Vec<ListSection>,
  #[serde(flatten)]
  pub options: MessageOptions,
}

impl Validate for SendList {
  fn validate(&self) -> Result<()> {
    validation::not_blank("number", &self.number)?;
    validation::not_blank("title", &self.title)?;
    validation::not_blank("buttonText", &self.button_text)?;
    validation::not_empty("sections", &self.sections)?;
    for section in &self.sections {
      validation::not_empty("sections.rows", &section.rows)?;
      for row in &section.rows {
        validation::not_blank("sections.rows.title", &row.title)?;
        validation::not_blank("sections.rows.rowId", &row.row_id)?;
      }
    }
    self.options.validate()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonType {
  Reply,
  Url,
  Call,
  Copy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
  #[serde(rename = "type")]
  pub kind: ButtonType,
  pub display_text: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub phone_number: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub copy_code: Option<String>,
}

impl Validate for Button {
  fn validate(&self) -> Result<()> {
    validation::not_blank("buttons.displayText", &self.display_text)?;
    match self.kind {
      ButtonType::Reply => validation::required("buttons.id", self.id.as_deref()),
      ButtonType::Url => {
        validation::required("buttons.url", self.url.as_deref())?;
        validation::optional_absolute_url("buttons.url", self.url.as_deref())
      }
      ButtonType::Call => validation::required("buttons.phoneNumber", self.phone_number.as_deref()),
      ButtonType::Copy => validation::required("buttons.copyCode", self.copy_code.as_deref()),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendButtons {
  pub number: String,
  pub title: String,
  pub description: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub footer: Option<String>,
  pub buttons: Vec<Button>,
  #[serde(flatten)]
  pub options: MessageOptions,
}

impl Validate for SendButtons {
  fn validate(&self) -> Result<()> {
    validation::not_blank("number", &self.number)?;
    validation::not_blank("title", &self.title)?;
    validation::len_in_range("buttons", &self.buttons, 1..=3)?;
    for button in &self.buttons {
      button.validate()?;
    }
    self.options.validate()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusType {
  Text,
  Image,
  Video,
  Audio,
}

/// Status (story) post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendStatus {
  #[serde(rename = "type")]
  pub kind: StatusType,
  pub content: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub background_color: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub font: Option<u8>,
  #[serde(default)]
  pub all_contacts: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status_jid_list: Option<Vec<String>>,
}

impl Validate for SendStatus {
  fn validate(&self) -> Result<()> {
    validation::not_blank("content", &self.content)?;
    validation::optional_in_range("font", self.font, 1..=5)?;
    if !self.all_contacts {
      validation::not_empty("statusJidList", self.status_jid_list.as_deref().unwrap_or_default())?;
    }
    Ok(())
  }
}

/// Result of any `message/send*` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
  pub key: MessageKey,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub push_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message_type: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message_timestamp: Option<i64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub instance_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub source: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::common::QuotedMessage;
  use serde_json::json;

  #[test]
  fn test_send_text_flattens_options() {
    let mut msg = SendText::new("5511999999999", "hello");
    msg.options.delay = Some(1200);
    msg.options.quoted = Some(QuotedMessage { key: MessageKey::new("jid", "ABC", false), message: None });

    let value = serde_json::to_value(&msg).unwrap();
    assert_eq!(value["delay"], 1200);
    assert_eq!(value["quoted"]["key"]["id"], "ABC");
    assert!(value.get("options").is_none());

    let back: SendText = serde_json::from_value(value).unwrap();
    assert_eq!(back, msg);
  }

  #[test]
  fn test_send_text_blank_fields() {
    assert_eq!(SendText::new("", "hi").validate().unwrap_err().field(), Some("number"));
    assert_eq!(SendText::new("55", "  ").validate().unwrap_err().field(), Some("text"));
  }

  #[test]
  fn test_document_needs_file_name() {
    let mut media = SendMedia::new("55", MediaType::Document, "https://example.com/a.pdf");
    assert_eq!(media.validate().unwrap_err().field(), Some("fileName"));
    media.file_name = Some("a.pdf".into());
    assert!(media.validate().is_ok());
    assert!(SendMedia::new("55", MediaType::Image, "https://example.com/a.png").validate().is_ok());
  }

  #[test]
  fn test_location_bounds() {
    let mut loc = SendLocation {
      number: "55".into(),
      name: "HQ".into(),
      address: "Main St".into(),
      latitude: 90.0,
      longitude: -180.0,
      options: MessageOptions::default(),
    };
    assert!(loc.validate().is_ok());
    loc.latitude = 90.5;
    assert_eq!(loc.validate().unwrap_err().field(), Some("latitude"));
  }

  #[test]
  fn test_poll_rules() {
    let mut poll = SendPoll {
      number: "55".into(),
      name: "Lunch?".into(),
      selectable_count: 1,
      values: vec!["Yes".into(), "No".into()],
      options: MessageOptions::default(),
    };
    assert!(poll.validate().is_ok());
    poll.selectable_count = 3;
    assert_eq!(poll.validate().unwrap_err().field(), Some("selectableCount"));
    poll.selectable_count = 0;
    poll.values.truncate(1);
    assert_eq!(poll.validate().unwrap_err().field(), Some("values"));
  }

  #[test]
  fn test_button_limits() {
    let button = Button {
      kind: ButtonType::Reply,
      display_text: "Ok".into(),
      id: Some("1".into()),
      url: None,
      phone_number: None,
      copy_code: None,
    };
    let mut msg = SendButtons {
      number: "55".into(),
      title: "Pick".into(),
      description: "one".into(),
      footer: None,
      buttons: vec![button.clone(); 3],
      options: MessageOptions::default(),
    };
    assert!(msg.validate().is_ok());
    msg.buttons.push(button);
    assert_eq!(msg.validate().unwrap_err().field(), Some("buttons"));

    let value = serde_json::to_value(&msg.buttons[0]).unwrap();
    assert_eq!(value, json!({"type": "reply", "displayText": "Ok", "id": "1"}));
  }

  #[test]
  fn test_status_audience() {
    let mut status = SendStatus {
      kind: StatusType::Text,
      content: "hi".into(),
      caption: None,
      background_color: Some("#008000".into()),
      font: Some(1),
      all_contacts: false,
      status_jid_list: None,
    };
    assert_eq!(status.validate().unwrap_err().field(), Some("statusJidList"));
    status.all_contacts = true;
    assert!(status.validate().is_ok());
  }

  #[test]
  fn test_contact_requires_number() {
    let msg = SendContact {
      number: "55".into(),
      contact: vec![ContactCard { full_name: "Ana".into(), ..Default::default() }],
    };
    assert_eq!(msg.validate().unwrap_err().field(), Some("contact.phoneNumber"));
  }
}
