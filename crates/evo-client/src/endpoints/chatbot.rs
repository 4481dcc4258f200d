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

//! Chatbot integration endpoints
//!
//! All providers share one route layout under their own prefix, so a single
//! generic [`ChatbotEndpoints`] serves OpenAI, Dify, Flowise, Typebot,
//! EvolutionBot and n8n. Provider-only operations live in dedicated impl
//! blocks below.

use super::{check_request, EndpointBase};
use crate::transport::{Route, Transport};
use evo_core::validation;
use evo_core::Result;
use evo_models::chatbot::*;
use reqwest::Method;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::instrument;

/// Endpoints of one chatbot provider
pub struct ChatbotEndpoints<P: Provider> {
  transport: Arc<Transport>,
  provider: PhantomData<P>,
}

impl<P: Provider> ChatbotEndpoints<P> {
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport, provider: PhantomData }
  }

  fn route(operation: &'static str, instance: &str) -> Route {
    Route::new(P::RESOURCE, operation).instance(instance)
  }

  fn bot_route(operation: &'static str, instance: &str, bot_id: &str) -> Result<Route> {
    validation::instance_name(instance)?;
    validation::not_blank("id", bot_id)?;
    Ok(Route::new(P::RESOURCE, operation).id(bot_id).instance(instance))
  }

  /// Register a bot on the instance
  #[instrument(skip(self, bot), fields(provider = %P::RESOURCE))]
  pub async fn create(&self, instance: &str, bot: &P::Bot) -> Result<P::Bot> {
    check_request(instance, bot)?;
    self.transport().post(&Self::route("create", instance), bot).await
  }

  /// Every bot of this provider; an absent list reads as empty
  #[instrument(skip(self), fields(provider = %P::RESOURCE))]
  pub async fn find(&self, instance: &str) -> Result<Vec<P::Bot>> {
    validation::instance_name(instance)?;
    let bots = self.transport().get_optional(&Self::route("find", instance)).await?;
    Ok(bots.unwrap_or_default())
  }

  #[instrument(skip(self), fields(provider = %P::RESOURCE))]
  pub async fn fetch(&self, instance: &str, bot_id: &str) -> Result<Option<P::Bot>> {
    let route = Self::bot_route("fetch", instance, bot_id)?;
    self.transport().get_optional(&route).await
  }

  #[instrument(skip(self, bot), fields(provider = %P::RESOURCE))]
  pub async fn update(&self, instance: &str, bot_id: &str, bot: &P::Bot) -> Result<P::Bot> {
    let route = Self::bot_route("update", instance, bot_id)?;
    check_request(instance, bot)?;
    self.transport().put(&route, bot).await
  }

  #[instrument(skip(self), fields(provider = %P::RESOURCE))]
  pub async fn delete(&self, instance: &str, bot_id: &str) -> Result<()> {
    let route = Self::bot_route("delete", instance, bot_id)?;
    self.transport().execute(Method::DELETE, &route, None).await
  }

  /// Defaults applied to every bot of this provider on the instance
  #[instrument(skip(self, settings), fields(provider = %P::RESOURCE))]
  pub async fn settings(&self, instance: &str, settings: &BotSettings) -> Result<BotSettings> {
    check_request(instance, settings)?;
    self.transport().post(&Self::route("settings", instance), settings).await
  }

  #[instrument(skip(self), fields(provider = %P::RESOURCE))]
  pub async fn fetch_settings(&self, instance: &str) -> Result<Option<BotSettings>> {
    validation::instance_name(instance)?;
    self.transport().get_optional(&Self::route("fetchSettings", instance)).await
  }

  /// Open, pause, close or delete the session with one contact
  #[instrument(skip(self, request), fields(provider = %P::RESOURCE))]
  pub async fn change_status(&self, instance: &str, request: &ChangeStatusRequest) -> Result<()> {
    check_request(instance, request)?;
    let body = Transport::to_body(request)?;
    self.transport().execute(Method::POST, &Self::route("changeStatus", instance), Some(body)).await
  }

  #[instrument(skip(self), fields(provider = %P::RESOURCE))]
  pub async fn fetch_sessions(&self, instance: &str, bot_id: &str) -> Result<Vec<BotSession>> {
    let route = Self::bot_route("fetchSessions", instance, bot_id)?;
    let sessions = self.transport().get_optional(&route).await?;
    Ok(sessions.unwrap_or_default())
  }

  #[instrument(skip(self, request), fields(provider = %P::RESOURCE))]
  pub async fn ignore_jid(&self, instance: &str, request: &IgnoreJidRequest) -> Result<()> {
    check_request(instance, request)?;
    let body = Transport::to_body(request)?;
    self.transport().execute(Method::POST, &Self::route("ignoreJid", instance), Some(body)).await
  }
}

impl ChatbotEndpoints<OpenAi> {
  /// Store an OpenAI API key for later use by bots
  #[instrument(skip(self, creds))]
  pub async fn set_creds(&self, instance: &str, creds: &OpenAiCreds) -> Result<OpenAiCreds> {
    check_request(instance, creds)?;
    self.transport().post(&Self::route("creds", instance), creds).await
  }

  #[instrument(skip(self))]
  pub async fn find_creds(&self, instance: &str) -> Result<Vec<OpenAiCreds>> {
    validation::instance_name(instance)?;
    let creds = self.transport().get_optional(&Self::route("creds", instance)).await?;
    Ok(creds.unwrap_or_default())
  }

  #[instrument(skip(self))]
  pub async fn delete_creds(&self, instance: &str, creds_id: &str) -> Result<()> {
    let route = Self::bot_route("creds", instance, creds_id)?;
    self.transport().execute(Method::DELETE, &route, None).await
  }
}

impl ChatbotEndpoints<Typebot> {
  /// Start a flow for one contact regardless of triggers
  #[instrument(skip(self, request))]
  pub async fn start(&self, instance: &str, request: &StartTypebotRequest) -> Result<()> {
    check_request(instance, request)?;
    let body = Transport::to_body(request)?;
    self.transport().execute(Method::POST, &Self::route("start", instance), Some(body)).await
  }
}

impl<P: Provider> EndpointBase for ChatbotEndpoints<P> {
  fn transport(&self) -> &Arc<Transport> {
    &self.transport
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_routes_use_provider_prefix() {
    let route = ChatbotEndpoints::<EvolutionBot>::bot_route("fetch", "main", "b1").unwrap();
    assert_eq!(route.to_string(), "evolutionBot/fetch/b1/main");
    assert_eq!(ChatbotEndpoints::<N8n>::route("find", "main").to_string(), "n8n/find/main");
  }

  #[test]
  fn test_blank_bot_id_rejected() {
    let err = ChatbotEndpoints::<Dify>::bot_route("delete", "main", " ").unwrap_err();
    assert_eq!(err.field(), Some("id"));
  }
}
