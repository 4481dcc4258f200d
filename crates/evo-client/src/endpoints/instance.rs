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

//! Instance lifecycle endpoints
//!
//! Create, connect, inspect and tear down WhatsApp sessions.

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::{Route, Transport};
use evo_core::validation::{self, Validate};
use evo_core::{Resource, Result};
use evo_models::instance::*;
use reqwest::Method;
use std::sync::Arc;
use tracing::instrument;

/// Instance management endpoints
pub struct InstanceEndpoints {
  transport: Arc<Transport>,
}

impl InstanceEndpoints {
  /// Create a new instance endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Create an instance on the gateway
  ///
  /// The instance name travels in the body, so the route has no instance
  /// segment.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use evo_client::EvolutionClient;
  /// # use evo_models::instance::CreateInstanceRequest;
  /// # async fn run(client: EvolutionClient) -> evo_core::Result<()> {
  /// let created = client
  ///   .instance()
  ///   .create(&CreateInstanceRequest::new("sales").with_qrcode(true))
  ///   .await?;
  /// println!("{:?}", created.instance_name());
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, request), fields(instance = %request.instance_name))]
  pub async fn create(&self, request: &CreateInstanceRequest) -> Result<InstanceInfo> {
    request.validate()?;
    self.transport().post(&Route::new(Resource::Instance, "create"), request).await
  }

  /// List instances, optionally narrowed to one name
  #[instrument(skip(self))]
  pub async fn fetch_instances(&self, instance_name: Option<&str>) -> Result<Vec<InstanceInfo>> {
    validation::optional_not_blank("instanceName", instance_name)?;
    let route = Route::new(Resource::Instance, "fetchInstances").query_opt("instanceName", instance_name);
    Ok(self.transport().get_optional(&route).await?.unwrap_or_default())
  }

  /// Start the connection and get a QR code, or a pairing code when `number` is given
  #[instrument(skip(self))]
  pub async fn connect(&self, instance: &str, number: Option<&str>) -> Result<ConnectionQr> {
    validation::instance_name(instance)?;
    let number = pairing_number(number)?;
    let route = Route::new(Resource::Instance, "connect").instance(instance).query_opt("number", number);
    self.transport().get(&route).await
  }

  #[instrument(skip(self))]
  pub async fn restart(&self, instance: &str) -> Result<()> {
    validation::instance_name(instance)?;
    let route = Route::new(Resource::Instance, "restart").instance(instance);
    self.transport().execute(Method::POST, &route, None).await
  }

  #[instrument(skip(self))]
  pub async fn connection_state(&self, instance: &str) -> Result<ConnectionState> {
    validation::instance_name(instance)?;
    self.transport().get(&Route::new(Resource::Instance, "connectionState").instance(instance)).await
  }

  #[instrument(skip(self))]
  pub async fn set_presence(&self, instance: &str, presence: Presence) -> Result<()> {
    validation::instance_name(instance)?;
    let body = Transport::to_body(&SetPresenceRequest { presence })?;
    let route = Route::new(Resource::Instance, "setPresence").instance(instance);
    self.transport().execute(Method::POST, &route, Some(body)).await
  }

  /// Log the WhatsApp session out; the instance itself is kept
  #[instrument(skip(self))]
  pub async fn logout(&self, instance: &str) -> Result<()> {
    validation::instance_name(instance)?;
    let route = Route::new(Resource::Instance, "logout").instance(instance);
    self.transport().execute(Method::DELETE, &route, None).await
  }

  #[instrument(skip(self))]
  pub async fn delete(&self, instance: &str) -> Result<()> {
    validation::instance_name(instance)?;
    let route = Route::new(Resource::Instance, "delete").instance(instance);
    self.transport().execute(Method::DELETE, &route, None).await
  }
}

impl_endpoint_base!(InstanceEndpoints);
