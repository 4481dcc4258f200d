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

//! Configuration management for the Evolution API client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Main configuration struct for the Evolution API client
///
/// Read once when the client is constructed; nothing here is refreshed later.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
  /// Global or instance API key, sent as the `apikey` header
  pub api_key: String,

  /// Base URL of the Evolution API server
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Config {
  /// Create a config with the default timeout
  pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
    Config {
      api_key: api_key.into(),
      base_url: base_url.into(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
    }
  }

  /// Override the request timeout
  pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
    self.timeout_secs = timeout_secs;
    self
  }

  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key = env::var("EVOLUTION_API_KEY")
      .map_err(|_| Error::Config("EVOLUTION_API_KEY not set".to_string()))?;

    let base_url =
      env::var("EVOLUTION_BASE_URL").unwrap_or_else(|_| crate::DEFAULT_BASE_URL.to_string());

    let timeout_secs = env::var("EVOLUTION_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid EVOLUTION_TIMEOUT_SECS".to_string()))?;

    let config = Config { api_key, base_url, timeout_secs };
    config.validate()?;
    Ok(config)
  }

  /// Check the values before a client is built from them
  pub fn validate(&self) -> Result<()> {
    if self.api_key.trim().is_empty() {
      return Err(Error::Config("API key must not be blank".to_string()));
    }
    if self.timeout_secs == 0 {
      return Err(Error::Config("timeout must be at least one second".to_string()));
    }
    let url = Url::parse(&self.base_url)?;
    if !matches!(url.scheme(), "http" | "https") {
      return Err(Error::Config(format!("unsupported base URL scheme: {}", url.scheme())));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_uses_default_timeout() {
    let config = Config::new("http://localhost:8080", "secret");
    assert_eq!(config.timeout_secs, crate::DEFAULT_TIMEOUT_SECS);
    assert!(config.validate().is_ok());
  }

  #[test]
  fn test_validate_rejects_bad_values() {
    assert!(Config::new("http://localhost:8080", "  ").validate().is_err());
    assert!(Config::new("http://localhost:8080", "k").with_timeout(0).validate().is_err());
    assert!(Config::new("not a url", "k").validate().is_err());
    assert!(Config::new("ftp://example.com", "k").validate().is_err());
  }
}
