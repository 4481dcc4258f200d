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
use evo_core::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyProtocol {
  Http,
  Https,
  Socks4,
  Socks5,
}

/// Outbound proxy used by an instance's WhatsApp socket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyConfig {
  pub enabled: bool,
  #[serde(default)]
  pub host: String,
  /// Sent as a string, as the server expects
  #[serde(default)]
  pub port: String,
  pub protocol: ProxyProtocol,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub username: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub password: Option<String>,
}

impl ProxyConfig {
  pub fn new(host: impl Into<String>, port: u16, protocol: ProxyProtocol) -> Self {
    Self {
      enabled: true,
      host: host.into(),
      port: port.to_string(),
      protocol,
      username: None,
      password: None,
    }
  }

  pub fn disabled() -> Self {
    Self {
      enabled: false,
      host: String::new(),
      port: String::new(),
      protocol: ProxyProtocol::Http,
      username: None,
      password: None,
    }
  }
}

impl Validate for ProxyConfig {
  fn validate(&self) -> Result<()> {
    if !self.enabled {
      return Ok(());
    }
    validation::not_blank("host", &self.host)?;
    let port: u32 = self
      .port
      .trim()
      .parse()
      .map_err(|_| Error::validation("port", format!("{} is not a number", self.port)))?;
    validation::in_range("port", port, 1..=65_535)?;
    if self.username.is_some() {
      validation::required("password", self.password.as_deref())?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_proxy_port_range() {
    assert!(ProxyConfig::new("proxy.local", 1, ProxyProtocol::Http).validate().is_ok());
    assert!(ProxyConfig::new("proxy.local", 65_535, ProxyProtocol::Socks5).validate().is_ok());

    let mut proxy = ProxyConfig::new("proxy.local", 8080, ProxyProtocol::Https);
    proxy.port = "0".into();
    assert_eq!(proxy.validate().unwrap_err().field(), Some("port"));
    proxy.port = "65536".into();
    assert!(proxy.validate().is_err());
    proxy.port = "http".into();
    assert!(proxy.validate().is_err());
  }

  #[test]
  fn test_disabled_proxy_skips_checks() {
    assert!(ProxyConfig::disabled().validate().is_ok());
  }

  #[test]
  fn test_username_requires_password() {
    let mut proxy = ProxyConfig::new("proxy.local", 3128, ProxyProtocol::Http);
    proxy.username = Some("user".into());
    assert_eq!(proxy.validate().unwrap_err().field(), Some("password"));
  }
}
