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

//! Instance lifecycle models
//!
//! An instance is one named WhatsApp session hosted by the gateway.

use chrono::{DateTime, Utc};
use evo_core::validation::{self, Validate};
use evo_core::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Connector backing an instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Integration {
  #[serde(rename = "WHATSAPP-BAILEYS")]
  WhatsappBaileys,
  #[serde(rename = "WHATSAPP-BUSINESS")]
  WhatsappBusiness,
  #[serde(rename = "EVOLUTION")]
  Evolution,
}

/// Body of `POST instance/create`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstanceRequest {
  pub instance_name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub token: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub number: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub qrcode: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub integration: Option<Integration>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub reject_call: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub msg_call: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub groups_ignore: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub always_online: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub read_messages: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub read_status: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sync_full_history: Option<bool>,
}

impl CreateInstanceRequest {
  pub fn new(instance_name: impl Into<String>) -> Self {
    Self { instance_name: instance_name.into(), ..Default::default() }
  }

  pub fn with_qrcode(mut self, qrcode: bool) -> Self {
    self.qrcode = Some(qrcode);
    self
  }

  pub fn with_integration(mut self, integration: Integration) -> Self {
    self.integration = Some(integration);
    self
  }
}

impl Validate for CreateInstanceRequest {
  fn validate(&self) -> Result<()> {
    validation::not_blank("instanceName", &self.instance_name)?;
    validation::optional_not_blank("token", self.token.as_deref())?;
    validation::optional_not_blank("number", self.number.as_deref())?;

    // Cloud API instances are bound to a business phone number and its token
    if self.integration == Some(Integration::WhatsappBusiness) {
      validation::required("token", self.token.as_deref())?;
      validation::required("number", self.number.as_deref())?;
    }
    if self.reject_call == Some(true) {
      validation::required("msgCall", self.msg_call.as_deref())?;
    }
    Ok(())
  }
}

/// Short instance descriptor nested in create responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceSummary {
  pub instance_name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub instance_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub integration: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub access_token_wa_business: Option<String>,
}

/// QR code or pairing code used to link a phone to an instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionQr {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pairing_code: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub code: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub base64: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub count: Option<u32>,
}

/// Instance as reported by `instance/create` and `instance/fetchInstances`
///
/// The two operations return differently shaped documents, so every field
/// is optional and only what the server sent is serialized back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceInfo {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub instance: Option<InstanceSummary>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub hash: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub qrcode: Option<ConnectionQr>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub settings: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub connection_status: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub owner_jid: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub profile_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub profile_pic_url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub integration: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub number: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub token: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub created_at: Option<DateTime<Utc>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<DateTime<Utc>>,
}

impl InstanceInfo {
  /// Instance name regardless of which response shape carried it
  pub fn instance_name(&self) -> Option<&str> {
    self
      .name
      .as_deref()
      .or_else(|| self.instance.as_ref().map(|i| i.instance_name.as_str()))
  }
}

/// WhatsApp socket state of an instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
  Open,
  Connecting,
  Close,
  #[serde(other)]
  Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceState {
  pub instance_name: String,
  pub state: State,
}

/// Response of `GET instance/connectionState/{instance}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionState {
  pub instance: InstanceState,
}

impl ConnectionState {
  pub fn is_open(&self) -> bool {
    self.instance.state == State::Open
  }
}

/// Presence broadcast for the whole instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
  Available,
  Unavailable,
}

/// Body of `POST instance/setPresence/{instance}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetPresenceRequest {
  pub presence: Presence,
}

/// Number used to request a pairing code instead of a QR image
pub fn pairing_number(number: Option<&str>) -> Result<Option<&str>> {
  match number {
    Some(n) if !n.chars().all(|c| c.is_ascii_digit()) || n.is_empty() => {
      Err(Error::validation("number", "must contain digits only"))
    }
    other => Ok(other),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_create_request_minimal_body() {
    let req = CreateInstanceRequest::new("TestInstance");
    assert_eq!(serde_json::to_value(&req).unwrap(), json!({"instanceName": "TestInstance"}));
    assert!(req.validate().is_ok());
  }

  #[test]
  fn test_create_request_business_requires_token_and_number() {
    let req = CreateInstanceRequest::new("biz").with_integration(Integration::WhatsappBusiness);
    assert_eq!(req.validate().unwrap_err().field(), Some("token"));

    let mut req = req;
    req.token = Some("EAAG".into());
    assert_eq!(req.validate().unwrap_err().field(), Some("number"));

    req.number = Some("5511999999999".into());
    assert!(req.validate().is_ok());
  }

  #[test]
  fn test_create_request_blank_name() {
    let err = CreateInstanceRequest::new(" ").validate().unwrap_err();
    assert_eq!(err.field(), Some("instanceName"));
  }

  #[test]
  fn test_create_request_reject_call_needs_message() {
    let mut req = CreateInstanceRequest::new("x");
    req.reject_call = Some(true);
    assert_eq!(req.validate().unwrap_err().field(), Some("msgCall"));

    req.msg_call = Some("Calls are not answered here".into());
    assert!(req.validate().is_ok());
  }

  #[test]
  fn test_integration_wire_names() {
    let req = CreateInstanceRequest::new("x").with_integration(Integration::WhatsappBaileys);
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["integration"], "WHATSAPP-BAILEYS");
  }

  #[test]
  fn test_connection_state_unknown_state() {
    let state: ConnectionState =
      serde_json::from_value(json!({"instance": {"instanceName": "a", "state": "refused"}}))
        .unwrap();
    assert_eq!(state.instance.state, State::Unknown);
    assert!(!state.is_open());
  }

  #[test]
  fn test_instance_name_from_either_shape() {
    let flat: InstanceInfo = serde_json::from_value(json!({"name": "a"})).unwrap();
    assert_eq!(flat.instance_name(), Some("a"));
    let nested: InstanceInfo =
      serde_json::from_value(json!({"instance": {"instanceName": "b"}})).unwrap();
    assert_eq!(nested.instance_name(), Some("b"));
  }

  #[test]
  fn test_pairing_number() {
    assert_eq!(pairing_number(None).unwrap(), None);
    assert_eq!(pairing_number(Some("5511")).unwrap(), Some("5511"));
    assert!(pairing_number(Some("+55 11")).is_err());
  }
}
