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

//! Types shared by several resource families

use evo_core::validation::{self, Validate};
use evo_core::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifies a single WhatsApp message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageKey {
  pub remote_jid: String,
  #[serde(default)]
  pub from_me: bool,
  pub id: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub participant: Option<String>,
}

impl MessageKey {
  pub fn new(remote_jid: impl Into<String>, id: impl Into<String>, from_me: bool) -> Self {
    Self { remote_jid: remote_jid.into(), from_me, id: id.into(), participant: None }
  }
}

impl Validate for MessageKey {
  fn validate(&self) -> Result<()> {
    validation::not_blank("key.remoteJid", &self.remote_jid)?;
    validation::not_blank("key.id", &self.id)
  }
}

/// Message being replied to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotedMessage {
  pub key: MessageKey,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message: Option<Value>,
}

/// Options accepted by every `message/send*` operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageOptions {
  /// Milliseconds the server waits (showing "typing") before sending
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub delay: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub link_preview: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub mentions_every_one: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub mentioned: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub quoted: Option<QuotedMessage>,
}

impl Validate for MessageOptions {
  fn validate(&self) -> Result<()> {
    if let Some(quoted) = &self.quoted {
      quoted.key.validate()?;
    }
    if let Some(mentioned) = &self.mentioned {
      for jid in mentioned {
        validation::not_blank("mentioned", jid)?;
      }
    }
    Ok(())
  }
}

/// Banner returned by `GET /` on the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
  pub status: u16,
  pub message: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub version: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub client_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub manager: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub documentation: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_message_key_wire_shape() {
    let key = MessageKey::new("5511999999999@s.whatsapp.net", "3EB0ABC", true);
    let value = serde_json::to_value(&key).unwrap();
    assert_eq!(
      value,
      json!({"remoteJid": "5511999999999@s.whatsapp.net", "fromMe": true, "id": "3EB0ABC"})
    );
  }

  #[test]
  fn test_message_key_validation() {
    assert!(MessageKey::new("jid", "id", false).validate().is_ok());
    let err = MessageKey::new("jid", " ", false).validate().unwrap_err();
    assert_eq!(err.field(), Some("key.id"));
  }

  #[test]
  fn test_empty_options_serialize_to_nothing() {
    let value = serde_json::to_value(MessageOptions::default()).unwrap();
    assert_eq!(value, json!({}));
  }
}
