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

use super::{BotOptions, Provider};
use evo_core::validation::{self, Validate};
use evo_core::{Resource, Result};
use serde::{Deserialize, Serialize};

pub enum N8n {}

impl Provider for N8n {
  const RESOURCE: Resource = Resource::N8n;
  const FALLBACK_FIELD: &'static str = "n8nIdFallback";
  type Bot = N8nBot;
}

/// n8n workflow triggered through a webhook node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct N8nBot {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  pub webhook_url: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub basic_auth_user: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub basic_auth_pass: Option<String>,
  #[serde(flatten)]
  pub options: BotOptions,
}

impl Validate for N8nBot {
  fn validate(&self) -> Result<()> {
    validation::absolute_url("webhookUrl", &self.webhook_url)?;
    if self.basic_auth_user.is_some() {
      validation::required("basicAuthPass", self.basic_auth_pass.as_deref())?;
    }
    self.options.validate()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_basic_auth_pair() {
    let mut bot = N8nBot {
      id: None,
      webhook_url: "https://n8n.example.com/webhook/abc".into(),
      basic_auth_user: Some("user".into()),
      basic_auth_pass: None,
      options: BotOptions::all(),
    };
    assert_eq!(bot.validate().unwrap_err().field(), Some("basicAuthPass"));
    bot.basic_auth_pass = Some("pass".into());
    assert!(bot.validate().is_ok());
  }
}
