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
use evo_core::{Resource, Result};
use evo_models::call::{OfferCallRequest, OfferCallResponse};
use std::sync::Arc;
use tracing::instrument;

pub struct CallEndpoints {
  transport: Arc<Transport>,
}

impl CallEndpoints {
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Ring a number with a fake call lasting `callDuration` seconds
  #[instrument(skip(self, request))]
  pub async fn offer(&self, instance: &str, request: &OfferCallRequest) -> Result<OfferCallResponse> {
    check_request(instance, request)?;
    self.transport().post(&Route::new(Resource::Call, "offer").instance(instance), request).await
  }
}

impl_endpoint_base!(CallEndpoints);
