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

//! Event delivery integrations: webhook, WebSocket, RabbitMQ and Amazon SQS
//!
//! All four subscribe to the same fixed set of [`Event`] names. Event lists
//! are typed, so an unknown name can only enter through [`Event::from_str`] or
//! [`parse_events`], both of which reject it with a validation error.

use chrono::{DateTime, Utc};
use evo_core::validation::{self, Validate};
use evo_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Server events an integration can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Event {
  ApplicationStartup,
  QrcodeUpdated,
  MessagesSet,
  MessagesUpsert,
  MessagesEdited,
  MessagesUpdate,
  MessagesDelete,
  SendMessage,
  SendMessageUpdate,
  ContactsSet,
  ContactsUpsert,
  ContactsUpdate,
  PresenceUpdate,
  ChatsSet,
  ChatsUpsert,
  ChatsUpdate,
  ChatsDelete,
  GroupsUpsert,
  GroupUpdate,
  GroupParticipantsUpdate,
  ConnectionUpdate,
  LabelsEdit,
  LabelsAssociation,
  Call,
  TypebotStart,
  TypebotChangeStatus,
  RemoveInstance,
  LogoutInstance,
  InstanceCreate,
  InstanceDelete,
  StatusInstance,
}

impl Event {
  pub const ALL: [Event; 31] = [
    Event::ApplicationStartup,
    Event::QrcodeUpdated,
    Event::MessagesSet,
    Event::MessagesUpsert,
    Event::MessagesEdited,
    Event::MessagesUpdate,
    Event::MessagesDelete,
    Event::SendMessage,
    Event::SendMessageUpdate,
    Event::ContactsSet,
    Event::ContactsUpsert,
    Event::ContactsUpdate,
    Event::PresenceUpdate,
    Event::ChatsSet,
    Event::ChatsUpsert,
    Event::ChatsUpdate,
    Event::ChatsDelete,
    Event::GroupsUpsert,
    Event::GroupUpdate,
    Event::GroupParticipantsUpdate,
    Event::ConnectionUpdate,
    Event::LabelsEdit,
    Event::LabelsAssociation,
    Event::Call,
    Event::TypebotStart,
    Event::TypebotChangeStatus,
    Event::RemoveInstance,
    Event::LogoutInstance,
    Event::InstanceCreate,
    Event::InstanceDelete,
    Event::StatusInstance,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Event::ApplicationStartup => "APPLICATION_STARTUP",
      Event::QrcodeUpdated => "QRCODE_UPDATED",
      Event::MessagesSet => "MESSAGES_SET",
      Event::MessagesUpsert => "MESSAGES_UPSERT",
      Event::MessagesEdited => "MESSAGES_EDITED",
      Event::MessagesUpdate => "MESSAGES_UPDATE",
      Event::MessagesDelete => "MESSAGES_DELETE",
      Event::SendMessage => "SEND_MESSAGE",
      Event::SendMessageUpdate => "SEND_MESSAGE_UPDATE",
      Event::ContactsSet => "CONTACTS_SET",
      Event::ContactsUpsert => "CONTACTS_UPSERT",
      Event::ContactsUpdate => "CONTACTS_UPDATE",
      Event::PresenceUpdate => "PRESENCE_UPDATE",
      Event::ChatsSet => "CHATS_SET",
      Event::ChatsUpsert => "CHATS_UPSERT",
      Event::ChatsUpdate => "CHATS_UPDATE",
      Event::ChatsDelete => "CHATS_DELETE",
      Event::GroupsUpsert => "GROUPS_UPSERT",
      Event::GroupUpdate => "GROUP_UPDATE",
      Event::GroupParticipantsUpdate => "GROUP_PARTICIPANTS_UPDATE",
      Event::ConnectionUpdate => "CONNECTION_UPDATE",
      Event::LabelsEdit => "LABELS_EDIT",
      Event::LabelsAssociation => "LABELS_ASSOCIATION",
      Event::Call => "CALL",
      Event::TypebotStart => "TYPEBOT_START",
      Event::TypebotChangeStatus => "TYPEBOT_CHANGE_STATUS",
      Event::RemoveInstance => "REMOVE_INSTANCE",
      Event::LogoutInstance => "LOGOUT_INSTANCE",
      Event::InstanceCreate => "INSTANCE_CREATE",
      Event::InstanceDelete => "INSTANCE_DELETE",
      Event::StatusInstance => "STATUS_INSTANCE",
    }
  }
}

impl std::fmt::Display for Event {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Event {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let wanted = s.trim();
    Event::ALL
      .iter()
      .copied()
      .find(|e| e.as_str().eq_ignore_ascii_case(wanted))
      .ok_or_else(|| Error::validation("events", format!("unknown event {}", wanted)))
  }
}

/// Parse a list of event names, failing on the first unknown one
pub fn parse_events<S: AsRef<str>>(names: &[S]) -> Result<Vec<Event>> {
  names.iter().map(|n| n.as_ref().parse()).collect()
}

fn check_events(enabled: bool, events: &[Event]) -> Result<()> {
  if enabled {
    validation::not_empty("events", events)?;
  }
  Ok(())
}

/// Webhook delivery settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookConfig {
  pub enabled: bool,
  pub url: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub headers: Option<BTreeMap<String, String>>,
  /// Append the event name to the URL path
  #[serde(default)]
  pub by_events: bool,
  /// Embed media as base64 in the payload
  #[serde(default)]
  pub base64: bool,
  #[serde(default)]
  pub events: Vec<Event>,
}

impl Validate for WebhookConfig {
  fn validate(&self) -> Result<()> {
    if self.enabled {
      validation::absolute_url("url", &self.url)?;
    }
    check_events(self.enabled, &self.events)
  }
}

/// Body of `webhook/set`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetWebhookRequest {
  pub webhook: WebhookConfig,
}

/// Bounds for the WebSocket connection timeout, in seconds
pub const WEBSOCKET_TIMEOUT_RANGE: std::ops::RangeInclusive<u32> = 1..=300;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsocketConfig {
  pub enabled: bool,
  #[serde(default)]
  pub events: Vec<Event>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub connection_timeout: Option<u32>,
}

impl Validate for WebsocketConfig {
  fn validate(&self) -> Result<()> {
    validation::optional_in_range("connectionTimeout", self.connection_timeout, WEBSOCKET_TIMEOUT_RANGE)?;
    check_events(self.enabled, &self.events)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetWebsocketRequest {
  pub websocket: WebsocketConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RabbitmqConfig {
  pub enabled: bool,
  #[serde(default)]
  pub events: Vec<Event>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub exchange_name: Option<String>,
}

impl Validate for RabbitmqConfig {
  fn validate(&self) -> Result<()> {
    validation::optional_not_blank("exchangeName", self.exchange_name.as_deref())?;
    check_events(self.enabled, &self.events)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetRabbitmqRequest {
  pub rabbitmq: RabbitmqConfig,
}

/// Amazon SQS limits
pub const SQS_DELAY_RANGE: std::ops::RangeInclusive<u32> = 0..=900;
pub const SQS_VISIBILITY_TIMEOUT_RANGE: std::ops::RangeInclusive<u32> = 0..=43_200;
pub const SQS_RETENTION_RANGE: std::ops::RangeInclusive<u32> = 60..=1_209_600;
pub const SQS_MESSAGE_SIZE_RANGE: std::ops::RangeInclusive<u32> = 1_024..=262_144;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqsConfig {
  pub enabled: bool,
  #[serde(default)]
  pub events: Vec<Event>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub queue_url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub region: Option<String>,
  #[serde(default)]
  pub fifo: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub delay_seconds: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub visibility_timeout_seconds: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message_retention_period: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub maximum_message_size: Option<u32>,
}

impl Validate for SqsConfig {
  fn validate(&self) -> Result<()> {
    if self.fifo {
      validation::required("queueUrl", self.queue_url.as_deref())?;
    }
    if let Some(queue_url) = &self.queue_url {
      let url = validation::absolute_url("queueUrl", queue_url)?;
      if self.fifo && !url.path().trim_end_matches('/').ends_with(".fifo") {
        return Err(Error::validation("queueUrl", "FIFO queues must end with .fifo"));
      }
    }
    if self.enabled {
      validation::required("region", self.region.as_deref())?;
    }
    validation::optional_in_range("delaySeconds", self.delay_seconds, SQS_DELAY_RANGE)?;
    validation::optional_in_range(
      "visibilityTimeoutSeconds",
      self.visibility_timeout_seconds,
      SQS_VISIBILITY_TIMEOUT_RANGE,
    )?;
    validation::optional_in_range(
      "messageRetentionPeriod",
      self.message_retention_period,
      SQS_RETENTION_RANGE,
    )?;
    validation::optional_in_range("maximumMessageSize", self.maximum_message_size, SQS_MESSAGE_SIZE_RANGE)?;
    check_events(self.enabled, &self.events)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetSqsRequest {
  pub sqs: SqsConfig,
}

/// Stored webhook as returned by `webhook/set` and `webhook/find`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default)]
  pub url: String,
  #[serde(default)]
  pub enabled: bool,
  /// Kept as strings so newer server events do not break decoding
  #[serde(default)]
  pub events: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub headers: Option<BTreeMap<String, String>>,
  #[serde(default)]
  pub webhook_by_events: bool,
  #[serde(default)]
  pub webhook_base64: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub instance_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub created_at: Option<DateTime<Utc>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<DateTime<Utc>>,
}

/// Stored WebSocket / RabbitMQ / SQS subscription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSubscription {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default)]
  pub enabled: bool,
  #[serde(default)]
  pub events: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub instance_id: Option<String>,
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
  fn test_event_names_round_trip() {
    for event in Event::ALL {
      let value = serde_json::to_value(event).unwrap();
      assert_eq!(value, json!(event.as_str()));
      assert_eq!(event.as_str().parse::<Event>().unwrap(), event);
    }
  }

  #[test]
  fn test_unknown_event_rejected() {
    let err = parse_events(&["MESSAGES_UPSERT", "NOT_AN_EVENT"]).unwrap_err();
    assert_eq!(err.field(), Some("events"));
    assert_eq!(parse_events(&["messages_upsert"]).unwrap(), vec![Event::MessagesUpsert]);
  }

  #[test]
  fn test_webhook_requires_url_when_enabled() {
    let mut hook = WebhookConfig {
      enabled: true,
      url: "not a url".into(),
      events: vec![Event::MessagesUpsert],
      ..Default::default()
    };
    assert_eq!(hook.validate().unwrap_err().field(), Some("url"));
    hook.url = "https://example.com/hook".into();
    assert!(hook.validate().is_ok());
    hook.events.clear();
    assert_eq!(hook.validate().unwrap_err().field(), Some("events"));
    hook.enabled = false;
    hook.url.clear();
    assert!(hook.validate().is_ok());
  }

  #[test]
  fn test_websocket_timeout_boundaries() {
    let mut ws = WebsocketConfig { enabled: true, events: vec![Event::Call], connection_timeout: Some(1) };
    assert!(ws.validate().is_ok());
    ws.connection_timeout = Some(300);
    assert!(ws.validate().is_ok());
    ws.connection_timeout = Some(0);
    assert_eq!(ws.validate().unwrap_err().field(), Some("connectionTimeout"));
    ws.connection_timeout = Some(301);
    assert!(ws.validate().is_err());
  }

  fn sqs() -> SqsConfig {
    SqsConfig {
      enabled: true,
      events: vec![Event::MessagesUpsert],
      queue_url: Some("https://sqs.us-east-1.amazonaws.com/123456789012/evolution".into()),
      region: Some("us-east-1".into()),
      ..Default::default()
    }
  }

  #[test]
  fn test_sqs_delay_boundaries() {
    let mut cfg = sqs();
    for (value, ok) in [(0, true), (900, true), (901, false)] {
      cfg.delay_seconds = Some(value);
      assert_eq!(cfg.validate().is_ok(), ok, "delaySeconds = {}", value);
    }
    cfg.delay_seconds = Some(901);
    assert_eq!(cfg.validate().unwrap_err().field(), Some("delaySeconds"));
  }

  #[test]
  fn test_sqs_visibility_boundaries() {
    let mut cfg = sqs();
    for (value, ok) in [(0, true), (43_200, true), (43_201, false)] {
      cfg.visibility_timeout_seconds = Some(value);
      assert_eq!(cfg.validate().is_ok(), ok, "visibilityTimeoutSeconds = {}", value);
    }
  }

  #[test]
  fn test_sqs_retention_and_size_boundaries() {
    let mut cfg = sqs();
    for (value, ok) in [(59, false), (60, true), (1_209_600, true), (1_209_601, false)] {
      cfg.message_retention_period = Some(value);
      assert_eq!(cfg.validate().is_ok(), ok, "messageRetentionPeriod = {}", value);
    }
    cfg.message_retention_period = None;
    for (value, ok) in [(1_023, false), (1_024, true), (262_144, true), (262_145, false)] {
      cfg.maximum_message_size = Some(value);
      assert_eq!(cfg.validate().is_ok(), ok, "maximumMessageSize = {}", value);
    }
  }

  #[test]
  fn test_sqs_fifo_queue_url() {
    let mut cfg = sqs();
    cfg.fifo = true;
    assert_eq!(cfg.validate().unwrap_err().field(), Some("queueUrl"));

    cfg.queue_url = Some("https://sqs.us-east-1.amazonaws.com/123456789012/evolution.fifo".into());
    assert!(cfg.validate().is_ok());

    cfg.queue_url = Some("evolution.fifo".into());
    assert_eq!(cfg.validate().unwrap_err().field(), Some("queueUrl"));

    cfg.queue_url = None;
    assert_eq!(cfg.validate().unwrap_err().field(), Some("queueUrl"));
  }

  #[test]
  fn test_sqs_region_required_when_enabled() {
    let mut cfg = sqs();
    cfg.region = None;
    assert_eq!(cfg.validate().unwrap_err().field(), Some("region"));

    cfg.region = Some(" ".into());
    assert_eq!(cfg.validate().unwrap_err().field(), Some("region"));

    cfg.region = None;
    cfg.enabled = false;
    assert!(cfg.validate().is_ok());
  }

  #[test]
  fn test_sqs_round_trip() {
    let mut cfg = sqs();
    cfg.delay_seconds = Some(5);
    let json = serde_json::to_string(&SetSqsRequest { sqs: cfg.clone() }).unwrap();
    assert!(json.contains("\"delaySeconds\":5"));
    let back: SetSqsRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(back.sqs, cfg);
  }
}
