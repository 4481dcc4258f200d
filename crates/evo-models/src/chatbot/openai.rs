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

//! OpenAI assistants and chat completions

use super::{BotOptions, Provider};
use evo_core::validation::{self, Validate};
use evo_core::{Resource, Result};
use serde::{Deserialize, Serialize};

/// Upper bound on `maxTokens` accepted for completions
pub const MAX_TOKENS: u32 = 128_000;

pub enum OpenAi {}

impl Provider for OpenAi {
  const RESOURCE: Resource = Resource::OpenAi;
  const FALLBACK_FIELD: &'static str = "openaiIdFallback";
  type Bot = OpenAiBot;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OpenAiBotType {
  Assistant,
  ChatCompletion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenAiBot {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  pub openai_creds_id: String,
  pub bot_type: OpenAiBotType,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub assistant_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub function_url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub model: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub system_messages: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub assistant_messages: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub user_messages: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub max_tokens: Option<u32>,
  #[serde(flatten)]
  pub options: BotOptions,
}

impl OpenAiBot {
  pub fn assistant(creds_id: impl Into<String>, assistant_id: impl Into<String>) -> Self {
    Self {
      id: None,
      openai_creds_id: creds_id.into(),
      bot_type: OpenAiBotType::Assistant,
      assistant_id: Some(assistant_id.into()),
      function_url: None,
      model: None,
      system_messages: None,
      assistant_messages: None,
      user_messages: None,
      max_tokens: None,
      options: BotOptions::all(),
    }
  }

  pub fn chat_completion(creds_id: impl Into<String>, model: impl Into<String>) -> Self {
    Self {
      bot_type: OpenAiBotType::ChatCompletion,
      assistant_id: None,
      model: Some(model.into()),
      ..Self::assistant(creds_id, String::new())
    }
  }
}

impl Validate for OpenAiBot {
  fn validate(&self) -> Result<()> {
    validation::not_blank("openaiCredsId", &self.openai_creds_id)?;
    match self.bot_type {
      OpenAiBotType::Assistant => validation::required("assistantId", self.assistant_id.as_deref())?,
      OpenAiBotType::ChatCompletion => validation::required("model", self.model.as_deref())?,
    }
    validation::optional_absolute_url("functionUrl", self.function_url.as_deref())?;
    validation::optional_in_range("maxTokens", self.max_tokens, 1..=MAX_TOKENS)?;
    self.options.validate()
  }
}

/// Stored OpenAI API key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenAiCreds {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  pub name: String,
  pub api_key: String,
}

impl Validate for OpenAiCreds {
  fn validate(&self) -> Result<()> {
    validation::not_blank("name", &self.name)?;
    validation::not_blank("apiKey", &self.api_key)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_bot_type_requirements() {
    assert!(OpenAiBot::assistant("creds", "asst_123").validate().is_ok());
    assert!(OpenAiBot::chat_completion("creds", "gpt-4o").validate().is_ok());

    let mut bot = OpenAiBot::chat_completion("creds", "gpt-4o");
    bot.model = None;
    assert_eq!(bot.validate().unwrap_err().field(), Some("model"));

    let mut bot = OpenAiBot::assistant("creds", "asst_123");
    bot.assistant_id = None;
    assert_eq!(bot.validate().unwrap_err().field(), Some("assistantId"));
  }

  #[test]
  fn test_max_tokens_range() {
    let mut bot = OpenAiBot::chat_completion("creds", "gpt-4o");
    bot.max_tokens = Some(1);
    assert!(bot.validate().is_ok());
    bot.max_tokens = Some(MAX_TOKENS);
    assert!(bot.validate().is_ok());
    bot.max_tokens = Some(0);
    assert_eq!(bot.validate().unwrap_err().field(), Some("maxTokens"));
    bot.max_tokens = Some(MAX_TOKENS + 1);
    assert!(bot.validate().is_err());
  }

  #[test]
  fn test_bot_round_trip_keeps_flattened_options() {
    let mut bot = OpenAiBot::chat_completion("creds", "gpt-4o");
    bot.system_messages = Some(vec!["Be brief".into()]);
    let value = serde_json::to_value(&bot).unwrap();
    assert_eq!(value["botType"], "chatCompletion");
    assert_eq!(value["triggerType"], "all");
    let back: OpenAiBot = serde_json::from_value(value).unwrap();
    assert_eq!(back, bot);
  }
}
