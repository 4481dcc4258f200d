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

//! Chatbot integrations
//!
//! Every provider exposes the same set of operations (create, find, update,
//! delete, settings, sessions ...) under its own route prefix and with its
//! own bot document. [`Provider`] ties the two together so the client can
//! serve all of them with a single generic endpoint type.

pub mod dify;
pub mod evolution_bot;
pub mod flowise;
pub mod n8n;
pub mod openai;
pub mod typebot;

use chrono::{DateTime, Utc};
use evo_core::validation::{self, Validate};
use evo_core::{Error, Resource, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Debug;

pub use dify::{Dify, DifyBot, DifyBotType};
pub use evolution_bot::{EvolutionBot, EvolutionBotConfig};
pub use flowise::{Flowise, FlowiseBot};
pub use n8n::{N8n, N8nBot};
pub use openai::{OpenAi, OpenAiBot, OpenAiBotType, OpenAiCreds};
pub use typebot::{StartTypebotRequest, Typebot, TypebotBot, TypebotVariable};

/// A chatbot backend reachable through the gateway
pub trait Provider: Send + Sync + 'static {
  /// Route prefix of the provider's operations
  const RESOURCE: Resource;

  /// Settings key naming the bot used when no trigger matches
  const FALLBACK_FIELD: &'static str;

  /// Bot document sent on create/update and returned by find/fetch
  type Bot: Serialize + DeserializeOwned + Validate + Debug + Send + Sync;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerType {
  All,
  Keyword,
  None,
  Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriggerOperator {
  Contains,
  Equals,
  StartsWith,
  EndsWith,
  Regex,
  None,
}

/// Activation and conversation behaviour shared by every bot document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotOptions {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub enabled: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub trigger_type: Option<TriggerType>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub trigger_operator: Option<TriggerOperator>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub trigger_value: Option<String>,
  /// Minutes of inactivity before a session closes; 0 never expires
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub expire: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub keyword_finish: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub delay_message: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub unknown_message: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub listening_from_me: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub stop_bot_from_me: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub keep_open: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub debounce_time: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub ignore_jids: Option<Vec<String>>,
}

impl BotOptions {
  /// Bot answers only messages matching `operator` / `value`
  pub fn keyword(operator: TriggerOperator, value: impl Into<String>) -> Self {
    Self {
      enabled: Some(true),
      trigger_type: Some(TriggerType::Keyword),
      trigger_operator: Some(operator),
      trigger_value: Some(value.into()),
      ..Default::default()
    }
  }

  /// Bot answers every message
  pub fn all() -> Self {
    Self { enabled: Some(true), trigger_type: Some(TriggerType::All), ..Default::default() }
  }
}

impl Validate for BotOptions {
  fn validate(&self) -> Result<()> {
    match self.trigger_type {
      Some(TriggerType::Keyword) => {
        if self.trigger_operator.is_none() {
          return Err(Error::validation("triggerOperator", "is required"));
        }
        validation::required("triggerValue", self.trigger_value.as_deref())?;
      }
      Some(TriggerType::Advanced) => {
        validation::required("triggerValue", self.trigger_value.as_deref())?;
      }
      _ => {}
    }
    validation::optional_not_blank("keywordFinish", self.keyword_finish.as_deref())
  }
}

/// Provider-wide defaults applied to new sessions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotSettings {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub expire: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub keyword_finish: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub delay_message: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub unknown_message: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub listening_from_me: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub stop_bot_from_me: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub keep_open: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub debounce_time: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub ignore_jids: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub speech_to_text: Option<bool>,
  /// Provider specific keys such as the fallback bot id
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl BotSettings {
  /// Route unmatched messages to `bot_id`
  pub fn with_fallback<P: Provider>(mut self, bot_id: impl Into<String>) -> Self {
    self.extra.insert(P::FALLBACK_FIELD.to_string(), Value::String(bot_id.into()));
    self
  }

  pub fn fallback<P: Provider>(&self) -> Option<&str> {
    self.extra.get(P::FALLBACK_FIELD).and_then(Value::as_str)
  }
}

impl Validate for BotSettings {
  fn validate(&self) -> Result<()> {
    validation::optional_not_blank("keywordFinish", self.keyword_finish.as_deref())?;
    if let Some(jids) = &self.ignore_jids {
      for jid in jids {
        validation::not_blank("ignoreJids", jid)?;
      }
    }
    Ok(())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
  Opened,
  Paused,
  Closed,
  Delete,
}

/// Body of `{provider}/changeStatus`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStatusRequest {
  pub remote_jid: String,
  pub status: SessionStatus,
}

impl Validate for ChangeStatusRequest {
  fn validate(&self) -> Result<()> {
    validation::not_blank("remoteJid", &self.remote_jid)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IgnoreAction {
  Add,
  Remove,
}

/// Body of `{provider}/ignoreJid`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IgnoreJidRequest {
  pub remote_jid: String,
  pub action: IgnoreAction,
}

impl Validate for IgnoreJidRequest {
  fn validate(&self) -> Result<()> {
    validation::not_blank("remoteJid", &self.remote_jid)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotSession {
  pub id: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub session_id: Option<String>,
  pub remote_jid: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub push_name: Option<String>,
  pub status: SessionStatus,
  #[serde(default)]
  pub await_user: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub bot_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub parameters: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub created_at: Option<DateTime<Utc>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_keyword_trigger_needs_operator_and_value() {
    assert!(BotOptions::keyword(TriggerOperator::Equals, "hi").validate().is_ok());

    let mut options = BotOptions::keyword(TriggerOperator::Equals, " ");
    assert_eq!(options.validate().unwrap_err().field(), Some("triggerValue"));

    options.trigger_value = Some("hi".into());
    options.trigger_operator = None;
    assert_eq!(options.validate().unwrap_err().field(), Some("triggerOperator"));
  }

  #[test]
  fn test_all_trigger_needs_nothing() {
    assert!(BotOptions::all().validate().is_ok());
  }

  #[test]
  fn test_operator_wire_names() {
    let value = serde_json::to_value(BotOptions::keyword(TriggerOperator::StartsWith, "x")).unwrap();
    assert_eq!(value["triggerOperator"], "startsWith");
    assert_eq!(value["triggerType"], "keyword");
  }

  #[test]
  fn test_settings_fallback_per_provider() {
    let settings = BotSettings { expire: Some(20), ..Default::default() }.with_fallback::<OpenAi>("bot-1");
    let value = serde_json::to_value(&settings).unwrap();
    assert_eq!(value, json!({"expire": 20, "openaiIdFallback": "bot-1"}));
    assert_eq!(settings.fallback::<OpenAi>(), Some("bot-1"));
    assert_eq!(settings.fallback::<Dify>(), None);

    let back: BotSettings = serde_json::from_value(value).unwrap();
    assert_eq!(back, settings);
  }

  #[test]
  fn test_change_status_wire_shape() {
    let req = ChangeStatusRequest { remote_jid: "5511@s.whatsapp.net".into(), status: SessionStatus::Paused };
    assert_eq!(
      serde_json::to_value(&req).unwrap(),
      json!({"remoteJid": "5511@s.whatsapp.net", "status": "paused"})
    );
  }
}
