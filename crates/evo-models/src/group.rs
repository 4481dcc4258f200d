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

//! Group management models

use evo_core::validation::{self, Validate};
use evo_core::Result;
use serde::{Deserialize, Serialize};

/// Disappearing-message timers accepted by WhatsApp (off, 24h, 7d, 90d)
pub const EPHEMERAL_EXPIRATIONS: [u32; 4] = [0, 86_400, 604_800, 7_776_000];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGroupRequest {
  pub subject: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub participants: Vec<String>,
}

impl Validate for CreateGroupRequest {
  fn validate(&self) -> Result<()> {
    validation::not_blank("subject", &self.subject)?;
    validation::not_empty("participants", &self.participants)?;
    for participant in &self.participants {
      validation::not_blank("participants", participant)?;
    }
    Ok(())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
  pub id: String,
  /// `admin`, `superadmin` or absent
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub admin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupInfo {
  pub id: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub subject: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub subject_owner: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub subject_time: Option<i64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub picture_url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub size: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub creation: Option<i64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub owner: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub desc: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub desc_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub restrict: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub announce: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub participants: Option<Vec<Participant>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGroupPicture {
  /// URL or base64 image
  pub image: String,
}

impl Validate for UpdateGroupPicture {
  fn validate(&self) -> Result<()> {
    validation::not_blank("image", &self.image)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGroupSubject {
  pub subject: String,
}

impl Validate for UpdateGroupSubject {
  fn validate(&self) -> Result<()> {
    validation::not_blank("subject", &self.subject)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGroupDescription {
  pub description: String,
}

impl Validate for UpdateGroupDescription {
  fn validate(&self) -> Result<()> {
    validation::not_blank("description", &self.description)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteCode {
  pub invite_code: String,
  pub invite_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendInviteRequest {
  pub group_jid: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub numbers: Vec<String>,
}

impl Validate for SendInviteRequest {
  fn validate(&self) -> Result<()> {
    validation::group_jid("groupJid", &self.group_jid)?;
    validation::not_empty("numbers", &self.numbers)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendInviteResponse {
  pub send: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub invite_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptInviteResponse {
  #[serde(default)]
  pub accepted: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub group_jid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participants {
  pub participants: Vec<Participant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantAction {
  Add,
  Remove,
  Promote,
  Demote,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateParticipantRequest {
  pub action: ParticipantAction,
  pub participants: Vec<String>,
}

impl Validate for UpdateParticipantRequest {
  fn validate(&self) -> Result<()> {
    validation::not_empty("participants", &self.participants)?;
    for participant in &self.participants {
      validation::not_blank("participants", participant)?;
    }
    Ok(())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantUpdate {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status: Option<String>,
  pub jid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParticipantResponse {
  pub update_participants: Vec<ParticipantUpdate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupSettingAction {
  /// Only admins send messages
  Announcement,
  NotAnnouncement,
  /// Only admins edit group info
  Locked,
  Unlocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSettingRequest {
  pub action: GroupSettingAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleEphemeralRequest {
  /// Seconds; one of [`EPHEMERAL_EXPIRATIONS`]
  pub expiration: u32,
}

impl Validate for ToggleEphemeralRequest {
  fn validate(&self) -> Result<()> {
    validation::one_of("expiration", self.expiration, &EPHEMERAL_EXPIRATIONS)
  }
}

/// Acknowledgement returned by the group mutation endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupUpdate {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub update: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub success: Option<bool>,
}
