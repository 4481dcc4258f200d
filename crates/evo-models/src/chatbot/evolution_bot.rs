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

/// Generic HTTP bot speaking the gateway's own bot protocol
pub enum EvolutionBot {}

impl Provider for EvolutionBot {
  const RESOURCE: Resource = Resource::EvolutionBot;
  const FALLBACK_FIELD: &'static str = "botIdFallback";
  type Bot = EvolutionBotConfig;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionBotConfig {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  pub api_url: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub api_key: Option<String>,
  #[serde(flatten)]
  pub options: BotOptions,
}

impl Validate for EvolutionBotConfig {
  fn validate(&self) -> Result<()> {
    validation::absolute_url("apiUrl", &self.api_url)?;
    validation::optional_not_blank("apiKey", self.api_key.as_deref())?;
    self.options.validate()
  }
}
