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

//! Own-profile and privacy models (served under the `chat` resource)

use evo_core::validation::{self, Validate};
use evo_core::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// WhatsApp caps profile names at 25 characters
pub const MAX_PROFILE_NAME: usize = 25;
/// and the "about" text at 139
pub const MAX_PROFILE_STATUS: usize = 139;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
  pub wuid: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub number_exists: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub picture: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_business: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub website: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub wid: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub website: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub address: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub business_hours: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProfileName {
  pub name: String,
}

impl Validate for UpdateProfileName {
  fn validate(&self) -> Result<()> {
    validation::not_blank("name", &self.name)?;
    validation::max_chars("name", &self.name, MAX_PROFILE_NAME)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProfileStatus {
  pub status: String,
}

impl Validate for UpdateProfileStatus {
  fn validate(&self) -> Result<()> {
    validation::not_blank("status", &self.status)?;
    validation::max_chars("status", &self.status, MAX_PROFILE_STATUS)
  }
}

/// New avatar as a public URL or base64 image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProfilePicture {
  pub picture: String,
}

impl Validate for UpdateProfilePicture {
  fn validate(&self) -> Result<()> {
    validation::not_blank("picture", &self.picture)?;
    if self.picture.starts_with("http://") || self.picture.starts_with("https://") {
      validation::absolute_url("picture", &self.picture)?;
    }
    Ok(())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
  All,
  Contacts,
  ContactBlacklist,
  None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadReceipts {
  All,
  None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnlineVisibility {
  All,
  MatchLastSeen,
}

/// Privacy settings; the same shape is read and written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySettings {
  pub readreceipts: ReadReceipts,
  pub profile: Visibility,
  pub status: Visibility,
  pub online: OnlineVisibility,
  pub last: Visibility,
  pub groupadd: Visibility,
}

impl Validate for PrivacySettings {
  fn validate(&self) -> Result<()> {
    // Everyone must be addable by someone
    if self.groupadd == Visibility::None {
      return Err(Error::validation("groupadd", "none is not accepted for group adds"));
    }
    Ok(())
  }
}
