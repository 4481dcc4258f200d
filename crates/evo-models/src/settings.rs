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

//! Per-instance behaviour settings

use evo_core::validation::{self, Validate};
use evo_core::Result;
use serde::{Deserialize, Serialize};

/// Body of `settings/set` and result of `settings/find`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceSettings {
  #[serde(default)]
  pub reject_call: bool,
  /// Reply sent to rejected callers
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub msg_call: Option<String>,
  #[serde(default)]
  pub groups_ignore: bool,
  #[serde(default)]
  pub always_online: bool,
  #[serde(default)]
  pub read_messages: bool,
  #[serde(default)]
  pub read_status: bool,
  #[serde(default)]
  pub sync_full_history: bool,
}

impl Validate for InstanceSettings {
  fn validate(&self) -> Result<()> {
    if self.reject_call {
      validation::required("msgCall", self.msg_call.as_deref())?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_reject_call_needs_message() {
    let mut settings = InstanceSettings { reject_call: true, ..Default::default() };
    assert_eq!(settings.validate().unwrap_err().field(), Some("msgCall"));
    settings.msg_call = Some("Calls are not answered here".into());
    assert!(settings.validate().is_ok());
  }

  #[test]
  fn test_round_trip() {
    let settings = InstanceSettings {
      reject_call: true,
      msg_call: Some("busy".into()),
      always_online: true,
      ..Default::default()
    };
    let json = serde_json::to_string(&settings).unwrap();
    assert!(json.contains("\"rejectCall\":true"));
    let back: InstanceSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(back, settings);
  }
}
