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

pub mod call;
pub mod chat;
pub mod chatbot;
pub mod chatwoot;
pub mod events;
pub mod group;
pub mod instance;
pub mod label;
pub mod message;
pub mod profile;
pub mod proxy;
pub mod settings;
pub mod template;

use crate::transport::Transport;
use evo_core::validation::{self, Validate};
use evo_core::Result;
use std::sync::Arc;

/// Base trait for endpoint implementations
///
/// Provides common functionality needed by all endpoint modules
pub trait EndpointBase {
  /// Get a reference to the transport layer
  fn transport(&self) -> &Arc<Transport>;
}

/// Macro to implement the EndpointBase trait for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl EndpointBase for $struct_name {
      fn transport(&self) -> &Arc<Transport> {
        &self.transport
      }
    }
  };
}

pub(crate) use impl_endpoint_base;

/// Local checks shared by every instance-scoped operation with a body.
///
/// Runs before serialization, so a rejected call never reaches the network.
pub(crate) fn check_request<R: Validate + ?Sized>(instance: &str, request: &R) -> Result<()> {
  validation::instance_name(instance)?;
  request.validate()
}

#[cfg(test)]
mod tests {
  use super::*;
  use evo_models::message::SendText;

  #[test]
  fn test_check_request_order() {
    let bad_both = SendText::new("", "");
    assert_eq!(check_request(" ", &bad_both).unwrap_err().field(), Some("instance"));
    assert_eq!(check_request("main", &bad_both).unwrap_err().field(), Some("number"));
    assert!(check_request("main", &SendText::new("55", "hi")).is_ok());
  }
}
