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

pub enum Typebot {}

impl Provider for Typebot {
  const RESOURCE: Resource = Resource::Typebot;
  const FALLBACK_FIELD: &'static str = "typebotIdFallback";
  type Bot = TypebotBot;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypebotBot {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  /// Typebot viewer URL
  pub url: String,
  /// Public id of the flow
  pub typebot: String,
  #[serde(flatten)]
  pub options: BotOptions,
}

impl Validate for TypebotBot {
  fn validate(&self) -> Result<()> {
    validation::absolute_url("url", &self.url)?;
    validation::not_blank("typebot", &self.typebot)?;
    self.options.validate()
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypebotVariable {
  pub name: String,
  pub value: String,
}

/// Body of `typebot/start`: opens a session outside of trigger matching
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTypebotRequest {
  pub url: String,
  pub typebot: String,
  pub remote_jid: String,
  #[serde(default)]
  pub start_session: bool,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub variables: Vec<TypebotVariable>,
}

impl Validate for StartTypebotRequest {
  fn validate(&self) -> Result<()> {
    validation::absolute_url("url", &self.url)?;
    validation::not_blank("typebot", &self.typebot)?;
    validation::not_blank("remoteJid", &self.remote_jid)?;
    for variable in &self.variables {
      validation::not_blank("variables.name", &variable.name)?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_start_request() {
    let mut req = StartTypebotRequest {
      url: "https://typebot.example.com".into(),
      typebot: "lead-capture".into(),
      remote_jid: "5511@s.whatsapp.net".into(),
      start_session: true,
      variables: vec![TypebotVariable { name: "pushName".into(), value: "Ana".into() }],
    };
    assert!(req.validate().is_ok());
    req.variables[0].name.clear();
    assert_eq!(req.validate().unwrap_err().field(), Some("variables.name"));
  }
}
