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

//! Group management endpoints
//!
//! Operations on an existing group carry its JID in the `groupJid` query
//! parameter; it is checked locally before anything is sent.

use super::{check_request, impl_endpoint_base, EndpointBase};
use crate::transport::{Route, Transport};
use evo_core::validation::{self, Validate};
use evo_core::{Resource, Result};
use evo_models::group::*;
use reqwest::Method;
use std::sync::Arc;
use tracing::instrument;

/// Group endpoints
pub struct GroupEndpoints {
  transport: Arc<Transport>,
}

impl GroupEndpoints {
  /// Create a new group endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  fn route(operation: &'static str, instance: &str) -> Route {
    Route::new(Resource::Group, operation).instance(instance)
  }

  fn group_route(operation: &'static str, instance: &str, group_jid: &str) -> Result<Route> {
    validation::instance_name(instance)?;
    validation::group_jid("groupJid", group_jid)?;
    Ok(Self::route(operation, instance).query("groupJid", group_jid))
  }

  fn invite_route(operation: &'static str, instance: &str, invite_code: &str) -> Result<Route> {
    validation::instance_name(instance)?;
    validation::not_blank("inviteCode", invite_code)?;
    Ok(Self::route(operation, instance).query("inviteCode", invite_code))
  }

  /// Create a group with the given participants
  #[instrument(skip(self, request))]
  pub async fn create(&self, instance: &str, request: &CreateGroupRequest) -> Result<GroupInfo> {
    check_request(instance, request)?;
    self.transport().post(&Self::route("create", instance), request).await
  }

  #[instrument(skip(self, request))]
  pub async fn update_picture(
    &self,
    instance: &str,
    group_jid: &str,
    request: &UpdateGroupPicture,
  ) -> Result<GroupUpdate> {
    let route = Self::group_route("updateGroupPicture", instance, group_jid)?;
    request.validate()?;
    self.transport().post(&route, request).await
  }

  #[instrument(skip(self, request))]
  pub async fn update_subject(
    &self,
    instance: &str,
    group_jid: &str,
    request: &UpdateGroupSubject,
  ) -> Result<GroupUpdate> {
    let route = Self::group_route("updateGroupSubject", instance, group_jid)?;
    request.validate()?;
    self.transport().post(&route, request).await
  }

  #[instrument(skip(self, request))]
  pub async fn update_description(
    &self,
    instance: &str,
    group_jid: &str,
    request: &UpdateGroupDescription,
  ) -> Result<GroupUpdate> {
    let route = Self::group_route("updateGroupDescription", instance, group_jid)?;
    request.validate()?;
    self.transport().post(&route, request).await
  }

  /// Current invite code and link of a group
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use evo_client::EvolutionClient;
  /// # async fn run(client: EvolutionClient) -> evo_core::Result<()> {
  /// let invite = client.group().invite_code("sales", "120363025246125486@g.us").await?;
  /// println!("{}", invite.invite_url);
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn invite_code(&self, instance: &str, group_jid: &str) -> Result<InviteCode> {
    let route = Self::group_route("inviteCode", instance, group_jid)?;
    self.transport().get(&route).await
  }

  /// Invalidate the current invite link and issue a new one
  #[instrument(skip(self))]
  pub async fn revoke_invite_code(&self, instance: &str, group_jid: &str) -> Result<InviteCode> {
    let route = Self::group_route("revokeInviteCode", instance, group_jid)?;
    self.transport().post(&route, &serde_json::json!({})).await
  }

  #[instrument(skip(self, request))]
  pub async fn send_invite(&self, instance: &str, request: &SendInviteRequest) -> Result<SendInviteResponse> {
    check_request(instance, request)?;
    self.transport().post(&Self::route("sendInvite", instance), request).await
  }

  #[instrument(skip(self))]
  pub async fn accept_invite_code(&self, instance: &str, invite_code: &str) -> Result<AcceptInviteResponse> {
    let route = Self::invite_route("acceptInviteCode", instance, invite_code)?;
    self.transport().get(&route).await
  }

  /// Group metadata behind an invite code, without joining
  #[instrument(skip(self))]
  pub async fn invite_info(&self, instance: &str, invite_code: &str) -> Result<GroupInfo> {
    let route = Self::invite_route("inviteInfo", instance, invite_code)?;
    self.transport().get(&route).await
  }

  #[instrument(skip(self))]
  pub async fn find_group_info(&self, instance: &str, group_jid: &str) -> Result<GroupInfo> {
    let route = Self::group_route("findGroupInfos", instance, group_jid)?;
    self.transport().get(&route).await
  }

  /// Every group the instance belongs to
  #[instrument(skip(self))]
  pub async fn fetch_all_groups(&self, instance: &str, get_participants: bool) -> Result<Vec<GroupInfo>> {
    validation::instance_name(instance)?;
    let route = Self::route("fetchAllGroups", instance).query("getParticipants", get_participants);
    Ok(self.transport().get_optional(&route).await?.unwrap_or_default())
  }

  #[instrument(skip(self))]
  pub async fn participants(&self, instance: &str, group_jid: &str) -> Result<Participants> {
    let route = Self::group_route("participants", instance, group_jid)?;
    self.transport().get(&route).await
  }

  /// Add, remove, promote or demote members
  #[instrument(skip(self, request))]
  pub async fn update_participant(
    &self,
    instance: &str,
    group_jid: &str,
    request: &UpdateParticipantRequest,
  ) -> Result<UpdateParticipantResponse> {
    let route = Self::group_route("updateParticipant", instance, group_jid)?;
    request.validate()?;
    self.transport().post(&route, request).await
  }

  #[instrument(skip(self))]
  pub async fn update_setting(
    &self,
    instance: &str,
    group_jid: &str,
    action: GroupSettingAction,
  ) -> Result<GroupUpdate> {
    let route = Self::group_route("updateSetting", instance, group_jid)?;
    self.transport().post(&route, &UpdateSettingRequest { action }).await
  }

  /// Set disappearing messages; `expiration` is one of [`EPHEMERAL_EXPIRATIONS`]
  #[instrument(skip(self))]
  pub async fn toggle_ephemeral(&self, instance: &str, group_jid: &str, expiration: u32) -> Result<GroupUpdate> {
    let route = Self::group_route("toggleEphemeral", instance, group_jid)?;
    let request = ToggleEphemeralRequest { expiration };
    request.validate()?;
    self.transport().post(&route, &request).await
  }

  #[instrument(skip(self))]
  pub async fn leave(&self, instance: &str, group_jid: &str) -> Result<()> {
    let route = Self::group_route("leaveGroup", instance, group_jid)?;
    self.transport().execute(Method::DELETE, &route, None).await
  }
}

impl_endpoint_base!(GroupEndpoints);
