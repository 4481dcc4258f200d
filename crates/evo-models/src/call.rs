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

use evo_core::validation::{self, Validate};
use evo_core::Result;
use serde::{Deserialize, Serialize};

/// Longest fake call the server will ring for, in seconds
pub const MAX_CALL_DURATION: u32 = 3600;

/// Body of `call/offer`: rings a number without media
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferCallRequest {
  pub number: String,
  #[serde(default)]
  pub is_video: bool,
  pub call_duration: u32,
}

impl Validate for OfferCallRequest {
  fn validate(&self) -> Result<()> {
    validation::not_blank("number", &self.number)?;
    validation::in_range("callDuration", self.call_duration, 1..=MAX_CALL_DURATION)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferCallResponse {
  pub id: String,
  pub to: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_call_duration_boundaries() {
    let mut req = OfferCallRequest { number: "55".into(), is_video: false, call_duration: 1 };
    assert!(req.validate().is_ok());
    req.call_duration = MAX_CALL_DURATION;
    assert!(req.validate().is_ok());
    req.call_duration = 0;
    assert_eq!(req.validate().unwrap_err().field(), Some("callDuration"));
    req.call_duration = MAX_CALL_DURATION + 1;
    assert!(req.validate().is_err());
  }
}
