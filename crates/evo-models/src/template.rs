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

//! Message templates (WhatsApp Cloud API instances only)

use evo_core::validation::{self, Validate};
use evo_core::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TemplateCategory {
  Authentication,
  Marketing,
  Utility,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplateRequest {
  pub name: String,
  pub category: TemplateCategory,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub allow_category_change: Option<bool>,
  /// e.g. `en_US`
  pub language: String,
  pub components: Vec<Value>,
}

impl Validate for CreateTemplateRequest {
  fn validate(&self) -> Result<()> {
    validation::not_blank("name", &self.name)?;
    if !self.name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
      return Err(Error::validation("name", "only lowercase letters, digits and underscores"));
    }
    validation::not_blank("language", &self.language)?;
    validation::not_empty("components", &self.components)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub language: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub components: Option<Vec<Value>>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn template(name: &str) -> CreateTemplateRequest {
    CreateTemplateRequest {
      name: name.into(),
      category: TemplateCategory::Utility,
      allow_category_change: None,
      language: "en_US".into(),
      components: vec![json!({"type": "BODY", "text": "Your order {{1}} shipped"})],
    }
  }

  #[test]
  fn test_template_name_charset() {
    assert!(template("order_shipped_2").validate().is_ok());
    assert_eq!(template("Order Shipped").validate().unwrap_err().field(), Some("name"));
  }

  #[test]
  fn test_category_wire_name() {
    let value = serde_json::to_value(template("a")).unwrap();
    assert_eq!(value["category"], "UTILITY");
  }
}
