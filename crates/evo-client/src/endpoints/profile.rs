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

use super::{check_request, impl_endpoint_base, EndpointBase};
use crate::transport::{Route, Transport};
use evo_core::validation;
use evo_core::{Resource, Result};
use evo_models::chat::NumberRequest;
use evo_models::profile::*;
use reqwest::Method;
use std::sync::Arc;
use tracing::instrument;

/// Own profile and privacy endpoints; served under the `chat` prefix
pub struct ProfileEndpoints {
  transport: Arc<Transport>,
}

impl ProfileEndpoints {
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  fn route(operation: &'static str, instance: &str) -> Route {
    Route::new(Resource::Chat, operation).instance(instance)
  }

  #[instrument(skip(self, request))]
  pub async fn fetch_business_profile(
    &self,
    instance: &str,
    request: &NumberRequest,
  ) -> Result<BusinessProfile> {
    check_request(instance, request)?;
    self.transport().post(&Self::route("fetchBusinessProfile", instance), request).await
  }

  #[instrument(skip(self, request))]
  pub async fn fetch_profile(&self, instance: &str, request: &NumberRequest) -> Result<Profile> {
    check_request(instance, request)?;
    self.transport().post(&Self::route("fetchProfile", instance), request).await
  }

  #[instrument(skip(self, request))]
  pub async fn update_profile_name(&self, instance: &str, request: &UpdateProfileName) -> Result<()> {
    check_request(instance, request)?;
    let body = Transport::to_body(request)?;
    self.transport().execute(Method::POST, &Self::route("updateProfileName", instance), Some(body)).await
  }

  #[instrument(skip(self, request))]
  pub async fn update_profile_status(&self, instance: &str, request: &UpdateProfileStatus) -> Result<()> {
    check_request(instance, request)?;
    let body = Transport::to_body(request)?;
    self.transport().execute(Method::POST, &Self::route("updateProfileStatus", instance), Some(body)).await
  }

  #[instrument(skip(self, request))]
  pub async fn update_profile_picture(&self, instance: &str, request: &UpdateProfilePicture) -> Result<()> {
    check_request(instance, request)?;
    let body = Transport::to_body(request)?;
    self.transport().execute(Method::POST, &Self::route("updateProfilePicture", instance), Some(body)).await
  }

  #[instrument(skip(self))]
  pub async fn remove_profile_picture(&self, instance: &str) -> Result<()> {
    validation::instance_name(instance)?;
    self.transport().execute(Method::DELETE, &Self::route("removeProfilePicture", instance), None).await
  }

  #[instrument(skip(self))]
  pub async fn fetch_privacy_settings(&self, instance: &str) -> Result<PrivacySettings> {
    validation::instance_name(instance)?;
    self.transport().get(&Self::route("fetchPrivacySettings", instance)).await
  }

  #[instrument(skip(self, settings))]
  pub async fn update_privacy_settings(&self, instance: &str, settings: &PrivacySettings) -> Result<()> {
    check_request(instance, settings)?;
    let body = Transport::to_body(settings)?;
    self.transport().execute(Method::POST, &Self::route("updatePrivacySettings", instance), Some(body)).await
  }
}

impl_endpoint_base!(ProfileEndpoints);
