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
use evo_models::chatwoot::ChatwootConfig;
use std::sync::Arc;
use tracing::instrument;

/// Chatwoot inbox bridge endpoints
pub struct ChatwootEndpoints {
  transport: Arc<Transport>,
}

impl ChatwootEndpoints {
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  #[instrument(skip(self, config))]
  pub async fn set(&self, instance: &str, config: &ChatwootConfig) -> Result<ChatwootConfig> {
    check_request(instance, config)?;
    self.transport().post(&Route::new(Resource::Chatwoot, "set").instance(instance), config).await
  }

  #[instrument(skip(self))]
  pub async fn find(&self, instance: &str) -> Result<Option<ChatwootConfig>> {
    validation::instance_name(instance)?;
    self.transport().get_optional(&Route::new(Resource::Chatwoot, "find").instance(instance)).await
  }
}

impl_endpoint_base!(ChatwootEndpoints);
