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

//! HTTP transport layer for Evolution API requests
//!
//! One call in, at most one HTTP request out. There is no retry loop here;
//! callers that want one wrap the endpoint call themselves.

use evo_core::{Config, Error, Resource, Result, API_KEY_HEADER};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;

/// Longest body excerpt written to logs and parse errors
const BODY_EXCERPT: usize = 200;

/// Relative location of an operation: `{resource}/{operation}[/{id}][/{instance}][?query]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
  resource: Resource,
  operation: &'static str,
  id: Option<String>,
  instance: Option<String>,
  query: Vec<(&'static str, String)>,
}

impl Route {
  pub fn new(resource: Resource, operation: &'static str) -> Self {
    Self { resource, operation, id: None, instance: None, query: Vec::new() }
  }

  /// Record id segment placed before the instance name (bots, credentials)
  pub fn id(mut self, id: impl Into<String>) -> Self {
    self.id = Some(id.into());
    self
  }

  pub fn instance(mut self, instance: impl Into<String>) -> Self {
    self.instance = Some(instance.into());
    self
  }

  pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
    self.query.push((key, value.to_string()));
    self
  }

  /// Adds the pair only when a value is present
  pub fn query_opt(self, key: &'static str, value: Option<impl ToString>) -> Self {
    match value {
      Some(v) => self.query(key, v),
      None => self,
    }
  }

  fn segments(&self) -> impl Iterator<Item = &str> {
    [Some(self.resource.as_str()), Some(self.operation), self.id.as_deref(), self.instance.as_deref()]
      .into_iter()
      .flatten()
  }
}

impl fmt::Display for Route {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let path: Vec<&str> = self.segments().collect();
    write!(f, "{}", path.join("/"))?;
    for (i, (key, value)) in self.query.iter().enumerate() {
      write!(f, "{}{}={}", if i == 0 { '?' } else { '&' }, key, value)?;
    }
    Ok(())
  }
}

/// HTTP transport layer for making requests to the Evolution API
pub struct Transport {
  client: Client,
  base_url: Url,
  api_key: String,
  timeout: Duration,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    config.validate()?;
    let timeout = Duration::from_secs(config.timeout_secs);

    let client = Client::builder()
      .timeout(timeout)
      .user_agent(concat!("evo-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self {
      client,
      base_url: Url::parse(&config.base_url)?,
      api_key: config.api_key.clone(),
      timeout,
    })
  }

  /// Build the full URL for a route; path segments are percent-encoded
  pub fn build_url(&self, route: &Route) -> Result<Url> {
    let mut url = self.base_url.clone();
    {
      let mut segments = url
        .path_segments_mut()
        .map_err(|_| Error::Config(format!("base URL cannot be a base: {}", self.base_url)))?;
      segments.pop_if_empty();
      segments.extend(route.segments());
    }
    if !route.query.is_empty() {
      let mut pairs = url.query_pairs_mut();
      for (key, value) in &route.query {
        pairs.append_pair(key, value);
      }
    }
    Ok(url)
  }

  /// Serialize a request body before anything touches the network
  pub fn to_body<B: Serialize + ?Sized>(body: &B) -> Result<Value> {
    Ok(serde_json::to_value(body)?)
  }

  /// GET that requires a document in the response
  pub async fn get<T: DeserializeOwned>(&self, route: &Route) -> Result<T> {
    let url = self.build_url(route)?;
    self.require(route, self.request(Method::GET, url, None).await?)
  }

  /// GET whose result may legitimately be `null`
  pub async fn get_optional<T: DeserializeOwned>(&self, route: &Route) -> Result<Option<T>> {
    let url = self.build_url(route)?;
    self.request(Method::GET, url, None).await
  }

  pub async fn post<B, T>(&self, route: &Route, body: &B) -> Result<T>
  where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
  {
    let body = Self::to_body(body)?;
    let url = self.build_url(route)?;
    self.require(route, self.request(Method::POST, url, Some(body)).await?)
  }

  /// POST whose result may legitimately be `null`, such as list queries
  pub async fn post_optional<B, T>(&self, route: &Route, body: &B) -> Result<Option<T>>
  where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
  {
    let body = Self::to_body(body)?;
    let url = self.build_url(route)?;
    self.request(Method::POST, url, Some(body)).await
  }

  pub async fn put<B, T>(&self, route: &Route, body: &B) -> Result<T>
  where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
  {
    let body = Self::to_body(body)?;
    let url = self.build_url(route)?;
    self.require(route, self.request(Method::PUT, url, Some(body)).await?)
  }

  /// Fire-and-forget call: success status is all that matters
  pub async fn execute(&self, method: Method, route: &Route, body: Option<Value>) -> Result<()> {
    let url = self.build_url(route)?;
    self.dispatch(method, url, body).await.map(|_| ())
  }

  /// `GET /` on the server root
  pub async fn get_root<T: DeserializeOwned>(&self) -> Result<T> {
    let url = self.base_url.clone();
    let path = url.path().to_string();
    match self.request(Method::GET, url, None).await? {
      Some(data) => Ok(data),
      None => Err(Error::EmptyResponse(path)),
    }
  }

  /// Issue one request and decode the body; empty or `null` bodies become `None`
  #[instrument(skip_all, fields(method = %method, url = %url))]
  pub async fn request<T: DeserializeOwned>(
    &self,
    method: Method,
    url: Url,
    body: Option<Value>,
  ) -> Result<Option<T>> {
    let text = self.dispatch(method, url, body).await?;
    decode(&text)
  }

  async fn dispatch(&self, method: Method, url: Url, body: Option<Value>) -> Result<String> {
    debug!("Making {} request to: {}", method, url);
    let path = url.path().to_string();

    let mut request = self.client.request(method, url).header(API_KEY_HEADER, &self.api_key);
    if let Some(body) = &body {
      request = request.json(body);
    }

    let response = request.send().await.map_err(|e| {
      if e.is_timeout() {
        Error::Timeout(format!("{} after {:?}", path, self.timeout))
      } else {
        Error::Http(format!("Request failed: {}", e))
      }
    })?;

    let status = response.status();
    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;
    debug!("Response status {} with {} bytes", status, text.len());

    if status.is_success() {
      return Ok(text);
    }

    error!("Request to {} failed with status {}: {}", path, status, excerpt(&text));
    if status == StatusCode::NOT_FOUND {
      Err(Error::NotFound { path, body: text })
    } else {
      Err(Error::RequestFailed { status: status.as_u16(), body: text })
    }
  }

  fn require<T>(&self, route: &Route, data: Option<T>) -> Result<T> {
    data.ok_or_else(|| Error::EmptyResponse(route.to_string()))
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    self.base_url.as_str()
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }
}

impl fmt::Debug for Transport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Transport")
      .field("base_url", &self.base_url.as_str())
      .field("api_key", &"***")
      .field("timeout", &self.timeout)
      .finish()
  }
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<Option<T>> {
  let trimmed = text.trim();
  if trimmed.is_empty() || trimmed == "null" {
    return Ok(None);
  }
  serde_json::from_str::<T>(trimmed).map(Some).map_err(|e| {
    error!("Failed to parse JSON response: {}", e);
    Error::Parse(format!("Failed to parse response: {}. Response: {}", e, excerpt(trimmed)))
  })
}

fn excerpt(text: &str) -> &str {
  match text.char_indices().nth(BODY_EXCERPT) {
    Some((idx, _)) => &text[..idx],
    None => text,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;

  fn transport(base: &str) -> Transport {
    Transport::new(&Config::new(base, "test_key")).unwrap()
  }

  #[test]
  fn test_route_display() {
    let route = Route::new(Resource::Group, "inviteCode").instance("main").query("groupJid", "1@g.us");
    assert_eq!(route.to_string(), "group/inviteCode/main?groupJid=1@g.us");

    let route = Route::new(Resource::OpenAi, "fetch").id("bot-1").instance("main");
    assert_eq!(route.to_string(), "openai/fetch/bot-1/main");
  }

  #[test]
  fn test_build_url_encodes_segments() {
    let transport = transport("http://localhost:8080");
    let route = Route::new(Resource::Instance, "connect").instance("my instance/1");
    let url = transport.build_url(&route).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8080/instance/connect/my%20instance%2F1");
  }

  #[test]
  fn test_build_url_keeps_base_path_and_query() {
    let transport = transport("https://gateway.example.com/evolution/");
    let route = Route::new(Resource::Group, "fetchAllGroups")
      .instance("main")
      .query("getParticipants", true)
      .query_opt("missing", None::<&str>);
    let url = transport.build_url(&route).unwrap();
    assert_eq!(
      url.as_str(),
      "https://gateway.example.com/evolution/group/fetchAllGroups/main?getParticipants=true"
    );
  }

  #[test]
  fn test_new_rejects_invalid_config() {
    assert!(Transport::new(&Config::new("localhost", "key")).is_err());
    assert!(Transport::new(&Config::new("http://localhost", "")).is_err());
  }

  #[derive(Debug, Deserialize, PartialEq)]
  struct Payload {
    id: String,
  }

  #[test]
  fn test_decode_null_and_empty() {
    assert_eq!(decode::<Payload>("").unwrap(), None);
    assert_eq!(decode::<Payload>(" null ").unwrap(), None);
    assert_eq!(decode::<Payload>(r#"{"id":"1"}"#).unwrap(), Some(Payload { id: "1".into() }));
    assert!(matches!(decode::<Payload>("{not json"), Err(Error::Parse(_))));
  }

  #[test]
  fn test_debug_hides_api_key() {
    let rendered = format!("{:?}", transport("http://localhost:8080"));
    assert!(!rendered.contains("test_key"));
  }
}
