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

use thiserror::Error;

/// The main error type for evo-* crates
///
/// Local validation failures never reach the network. Remote failures are
/// split so callers can tell a missing resource (`NotFound`) apart from any
/// other non-success status (`RequestFailed`).
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// A request argument failed local validation
  #[error("Validation failed for `{field}`: {message}")]
  Validation { field: String, message: String },

  /// Base URL or a URL-typed field could not be parsed
  #[error("Invalid URL: {0}")]
  InvalidUrl(#[from] url::ParseError),

  /// Serialization of a request body failed
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// A response body could not be decoded into the expected model
  #[error("Parse error: {0}")]
  Parse(String),

  /// A success status arrived without a body where one was required
  #[error("Empty response from {0}")]
  EmptyResponse(String),

  /// Remote API answered 404
  #[error("Resource not found: {path}")]
  NotFound { path: String, body: String },

  /// Remote API answered with any other non-success status
  #[error("Request failed with status {status}: {body}")]
  RequestFailed { status: u16, body: String },

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// The request did not complete within the configured timeout
  #[error("Request timed out: {0}")]
  Timeout(String),
}

impl Error {
  /// Build a validation error for `field`
  pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
    Error::Validation { field: field.into(), message: message.into() }
  }

  /// True for locally detected argument errors
  pub fn is_validation(&self) -> bool {
    matches!(self, Error::Validation { .. })
  }

  /// True when the remote API reported the resource as missing
  pub fn is_not_found(&self) -> bool {
    matches!(self, Error::NotFound { .. })
  }

  /// HTTP status carried by remote failures
  pub fn status(&self) -> Option<u16> {
    match self {
      Error::NotFound { .. } => Some(404),
      Error::RequestFailed { status, .. } => Some(*status),
      _ => None,
    }
  }

  /// Name of the offending field for validation errors
  pub fn field(&self) -> Option<&str> {
    match self {
      Error::Validation { field, .. } => Some(field),
      _ => None,
    }
  }
}

/// Result type alias for evo-* crates
pub type Result<T> = std::result::Result<T, Error>;
