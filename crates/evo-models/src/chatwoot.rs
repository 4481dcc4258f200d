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

use evo_core::validation::{self, Validate};
use evo_core::Result;
use serde::{Deserialize, Serialize};

/// Chatwoot inbox bridge; used as both request body and `find` result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatwootConfig {
  pub enabled: bool,
  #[serde(default)]
  pub account_id: String,
  #[serde(default)]
  pub token: String,
  #[serde(default)]
  pub url: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sign_msg: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sign_delimiter: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub reopen_conversation: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub conversation_pending: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name_inbox: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub merge_brazil_contacts: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub import_contacts: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub import_messages: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub days_limit_import_messages: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub auto_create: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub organization: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub logo: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub ignore_jids: Option<Vec<String>>,
  /// Only present in server responses
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub webhook_url: Option<String>,
}

impl Validate for ChatwootConfig {
  fn validate(&self) -> Result<()> {
    if !self.enabled {
      return Ok(());
    }
    validation::not_blank("accountId", &self.account_id)?;
    validation::not_blank("token", &self.token)?;
    validation::absolute_url("url", &self.url)?;
    validation::optional_absolute_url("logo", self.logo.as_deref())?;
    if self.sign_msg == Some(true) {
      validation::optional_not_blank("signDelimiter", self.sign_delimiter.as_deref())?;
    }
    Ok(())
  }
}
