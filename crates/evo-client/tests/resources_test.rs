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

mod common;

use common::{client_for, expect_no_requests};
use evo_models::chatbot::{DifyBot, DifyBotType, OpenAiBot, StartTypebotRequest};
use evo_models::common::MessageKey;
use evo_models::events::{Event, SqsConfig, WebhookConfig, WebsocketConfig};
use evo_models::group::{GroupSettingAction, SendInviteRequest};
use evo_models::message::{MediaType, SendMedia, SendPoll, SendText};
use evo_models::call::OfferCallRequest;
use evo_models::chat::{FindContactsRequest, NumberRequest, ReadMessagesRequest};
use evo_models::chatwoot::ChatwootConfig;
use evo_models::label::{HandleLabelRequest, LabelAction};
use evo_models::profile::{OnlineVisibility, PrivacySettings, ReadReceipts, UpdateProfileName, Visibility};
use evo_models::proxy::{ProxyConfig, ProxyProtocol};
use evo_models::settings::InstanceSettings;
use evo_models::template::{CreateTemplateRequest, TemplateCategory};
use evo_models::chatbot::BotOptions;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GROUP: &str = "120363025246125486@g.us";

fn sent(id: &str) -> serde_json::Value {
  json!({
    "key": {"remoteJid": "5511999999999@s.whatsapp.net", "fromMe": true, "id": id},
    "status": "PENDING",
    "messageType": "conversation"
  })
}

#[tokio::test]
async fn test_send_text() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/message/sendText/sales"))
    .and(body_partial_json(json!({"number": "5511999999999", "text": "Hello"})))
    .respond_with(ResponseTemplate::new(201).set_body_json(sent("3EB0A1")))
    .expect(1)
    .mount(&server)
    .await;

  let response = client_for(&server)
    .message()
    .send_text("sales", &SendText::new("5511999999999", "Hello"))
    .await
    .unwrap();
  assert_eq!(response.key.id, "3EB0A1");
  assert!(response.key.from_me);
}

#[tokio::test]
async fn test_invalid_messages_never_sent() {
  let server = MockServer::start().await;
  expect_no_requests(&server).await;
  let message = client_for(&server).message();

  let err = message.send_text("sales", &SendText::new("5511999999999", " ")).await.unwrap_err();
  assert_eq!(err.field(), Some("text"));

  let document = SendMedia::new("5511999999999", MediaType::Document, "https://example.com/a.pdf");
  let err = message.send_media("sales", &document).await.unwrap_err();
  assert_eq!(err.field(), Some("fileName"));

  let poll = SendPoll {
    number: "5511999999999".into(),
    name: "Lunch?".into(),
    selectable_count: 1,
    values: vec!["Yes".into()],
    options: Default::default(),
  };
  let err = message.send_poll("sales", &poll).await.unwrap_err();
  assert_eq!(err.field(), Some("values"));
}

#[tokio::test]
async fn test_group_invite_code() {
  let server = MockServer::start().await;
  let stub = json!({"inviteCode": "abc", "inviteUrl": "https://wa.me/abc"});
  Mock::given(method("GET"))
    .and(path("/group/inviteCode/sales"))
    .and(query_param("groupJid", GROUP))
    .respond_with(ResponseTemplate::new(200).set_body_json(stub.clone()))
    .expect(1)
    .mount(&server)
    .await;

  let invite = client_for(&server).group().invite_code("sales", GROUP).await.unwrap();
  assert_eq!(invite.invite_code, "abc");
  assert_eq!(invite.invite_url, "https://wa.me/abc");
  assert_eq!(serde_json::to_value(&invite).unwrap(), stub);
}

#[tokio::test]
async fn test_group_jid_checked_locally() {
  let server = MockServer::start().await;
  expect_no_requests(&server).await;
  let group = client_for(&server).group();

  let err = group.invite_code("sales", "5511999999999@s.whatsapp.net").await.unwrap_err();
  assert_eq!(err.field(), Some("groupJid"));
  assert!(group.leave("sales", "").await.unwrap_err().is_validation());

  let err = group.toggle_ephemeral("sales", GROUP, 3600).await.unwrap_err();
  assert_eq!(err.field(), Some("expiration"));

  let invite = SendInviteRequest { group_jid: GROUP.into(), description: None, numbers: vec![] };
  let err = group.send_invite("sales", &invite).await.unwrap_err();
  assert_eq!(err.field(), Some("numbers"));
}

#[tokio::test]
async fn test_group_queries_and_updates() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/group/fetchAllGroups/sales"))
    .and(query_param("getParticipants", "true"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([
      {"id": GROUP, "subject": "Team", "size": 2, "participants": [
        {"id": "5511999999999@s.whatsapp.net", "admin": "superadmin"},
        {"id": "5511888888888@s.whatsapp.net"}
      ]}
    ])))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("POST"))
    .and(path("/group/updateSetting/sales"))
    .and(query_param("groupJid", GROUP))
    .and(body_json(json!({"action": "not_announcement"})))
    .respond_with(ResponseTemplate::new(201).set_body_json(json!({"update": "success"})))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("DELETE"))
    .and(path("/group/leaveGroup/sales"))
    .and(query_param("groupJid", GROUP))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"groupJid": GROUP, "leave": true})))
    .expect(1)
    .mount(&server)
    .await;

  let group = client_for(&server).group();
  let groups = group.fetch_all_groups("sales", true).await.unwrap();
  assert_eq!(groups.len(), 1);
  assert_eq!(groups[0].participants.as_ref().map(Vec::len), Some(2));

  let update = group.update_setting("sales", GROUP, GroupSettingAction::NotAnnouncement).await.unwrap();
  assert_eq!(update.update.as_deref(), Some("success"));

  group.leave("sales", GROUP).await.unwrap();
}

#[tokio::test]
async fn test_chat_read_and_revoke() {
  let server = MockServer::start().await;
  let key = MessageKey::new("5511999999999@s.whatsapp.net", "3EB0A1", false);
  Mock::given(method("POST"))
    .and(path("/chat/markMessageAsRead/sales"))
    .and(body_json(json!({"readMessages": [
      {"remoteJid": "5511999999999@s.whatsapp.net", "fromMe": false, "id": "3EB0A1"}
    ]})))
    .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message": "Read messages", "read": "success"})))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("DELETE"))
    .and(path("/chat/deleteMessageForEveryone/sales"))
    .and(body_partial_json(json!({"id": "3EB0A1"})))
    .respond_with(ResponseTemplate::new(201))
    .expect(1)
    .mount(&server)
    .await;

  let chat = client_for(&server).chat();
  chat.mark_as_read("sales", &ReadMessagesRequest { read_messages: vec![key.clone()] }).await.unwrap();
  chat.delete_message_for_everyone("sales", &key).await.unwrap();

  let err = chat.mark_as_read("sales", &ReadMessagesRequest { read_messages: vec![] }).await.unwrap_err();
  assert_eq!(err.field(), Some("readMessages"));
}

#[tokio::test]
async fn test_webhook_set_and_find() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/webhook/set/sales"))
    .and(body_partial_json(json!({"webhook": {
      "enabled": true,
      "url": "https://hooks.example.com/wa",
      "events": ["MESSAGES_UPSERT"]
    }})))
    .respond_with(ResponseTemplate::new(201).set_body_json(json!({
      "id": "wh1",
      "url": "https://hooks.example.com/wa",
      "enabled": true,
      "events": ["MESSAGES_UPSERT"]
    })))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/webhook/find/fresh"))
    .respond_with(ResponseTemplate::new(200).set_body_string("null"))
    .mount(&server)
    .await;

  let webhook = client_for(&server).webhook();
  let config = WebhookConfig {
    enabled: true,
    url: "https://hooks.example.com/wa".into(),
    events: vec![Event::MessagesUpsert],
    ..Default::default()
  };
  let stored = webhook.set("sales", &config).await.unwrap();
  assert_eq!(stored.id.as_deref(), Some("wh1"));
  assert_eq!(stored.events, vec!["MESSAGES_UPSERT".to_string()]);

  assert_eq!(webhook.find("fresh").await.unwrap(), None);
}

#[tokio::test]
async fn test_event_integration_bounds() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/sqs/set/sales"))
    .and(body_partial_json(json!({"sqs": {"visibilityTimeoutSeconds": 43200}})))
    .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "s1", "enabled": true})))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("POST"))
    .and(path("/websocket/set/sales"))
    .respond_with(ResponseTemplate::new(201).set_body_json(json!({"enabled": true})))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);

  let mut sqs = SqsConfig {
    enabled: true,
    events: vec![Event::MessagesUpsert],
    queue_url: Some("https://sqs.us-east-1.amazonaws.com/123456789012/evo".into()),
    region: Some("us-east-1".into()),
    visibility_timeout_seconds: Some(43_200),
    ..Default::default()
  };
  let stored = client.sqs().set("sales", &sqs).await.unwrap();
  assert_eq!(stored.id.as_deref(), Some("s1"));

  sqs.visibility_timeout_seconds = Some(43_201);
  let err = client.sqs().set("sales", &sqs).await.unwrap_err();
  assert_eq!(err.field(), Some("visibilityTimeoutSeconds"));

  sqs.visibility_timeout_seconds = None;
  sqs.fifo = true;
  let err = client.sqs().set("sales", &sqs).await.unwrap_err();
  assert_eq!(err.field(), Some("queueUrl"));

  let mut websocket = WebsocketConfig { enabled: true, events: vec![Event::Call], connection_timeout: Some(301) };
  let err = client.websocket().set("sales", &websocket).await.unwrap_err();
  assert_eq!(err.field(), Some("connectionTimeout"));

  websocket.connection_timeout = Some(300);
  client.websocket().set("sales", &websocket).await.unwrap();
}

#[tokio::test]
async fn test_call_duration_checked_locally() {
  let server = MockServer::start().await;
  expect_no_requests(&server).await;

  let request = OfferCallRequest { number: "5511999999999".into(), is_video: false, call_duration: 3601 };
  let err = client_for(&server).call().offer("sales", &request).await.unwrap_err();
  assert_eq!(err.field(), Some("callDuration"));
}

#[tokio::test]
async fn test_chatbot_routes_per_provider() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/dify/fetch/bot-1/sales"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "id": "bot-1",
      "botType": "chatBot",
      "apiUrl": "https://dify.example.com/v1",
      "apiKey": "app-123",
      "enabled": true,
      "triggerType": "all"
    })))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("DELETE"))
    .and(path("/openai/creds/creds-1/sales"))
    .respond_with(ResponseTemplate::new(200))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("POST"))
    .and(path("/typebot/start/sales"))
    .and(body_partial_json(json!({"typebot": "my-flow", "remoteJid": "5511999999999@s.whatsapp.net"})))
    .respond_with(ResponseTemplate::new(201))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);

  let bot: DifyBot = client.dify().fetch("sales", "bot-1").await.unwrap().unwrap();
  assert_eq!(bot.bot_type, DifyBotType::ChatBot);
  assert_eq!(bot.options, BotOptions::all());

  client.openai().delete_creds("sales", "creds-1").await.unwrap();

  let start = StartTypebotRequest {
    url: "https://typebot.example.com".into(),
    typebot: "my-flow".into(),
    remote_jid: "5511999999999@s.whatsapp.net".into(),
    start_session: true,
    variables: vec![],
  };
  client.typebot().start("sales", &start).await.unwrap();
}

#[tokio::test]
async fn test_chatbot_validation_before_send() {
  let server = MockServer::start().await;
  expect_no_requests(&server).await;
  let client = client_for(&server);

  let mut bot = OpenAiBot::chat_completion("creds-1", "gpt-4o");
  bot.model = None;
  let err = client.openai().create("sales", &bot).await.unwrap_err();
  assert_eq!(err.field(), Some("model"));

  let mut bot = OpenAiBot::assistant("creds-1", "asst_1");
  bot.max_tokens = Some(0);
  let err = client.openai().update("sales", "bot-1", &bot).await.unwrap_err();
  assert_eq!(err.field(), Some("maxTokens"));

  let err = client.dify().delete("sales", " ").await.unwrap_err();
  assert_eq!(err.field(), Some("id"));
}

fn privacy() -> PrivacySettings {
  PrivacySettings {
    readreceipts: ReadReceipts::All,
    profile: Visibility::All,
    status: Visibility::Contacts,
    online: OnlineVisibility::MatchLastSeen,
    last: Visibility::Contacts,
    groupadd: Visibility::Contacts,
  }
}

fn order_template() -> CreateTemplateRequest {
  CreateTemplateRequest {
    name: "order_shipped".into(),
    category: TemplateCategory::Utility,
    allow_category_change: None,
    language: "en_US".into(),
    components: vec![json!({"type": "BODY", "text": "Your order {{1}} shipped"})],
  }
}

fn chatwoot() -> ChatwootConfig {
  ChatwootConfig {
    enabled: true,
    account_id: "1".into(),
    token: "cw-token".into(),
    url: "https://chatwoot.example.com".into(),
    ..Default::default()
  }
}

#[tokio::test]
async fn test_list_queries_treat_null_as_empty() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/label/findLabels/sales"))
    .respond_with(ResponseTemplate::new(200).set_body_string("null"))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/template/find/sales"))
    .respond_with(ResponseTemplate::new(200))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/group/fetchAllGroups/sales"))
    .and(query_param("getParticipants", "false"))
    .respond_with(ResponseTemplate::new(200).set_body_string("null"))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("POST"))
    .and(path("/chat/findChats/sales"))
    .respond_with(ResponseTemplate::new(200).set_body_string("null"))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("POST"))
    .and(path("/chat/findContacts/sales"))
    .respond_with(ResponseTemplate::new(200))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);
  assert!(client.label().find_labels("sales").await.unwrap().is_empty());
  assert!(client.template().find("sales").await.unwrap().is_empty());
  assert!(client.group().fetch_all_groups("sales", false).await.unwrap().is_empty());
  assert!(client.chat().find_chats("sales").await.unwrap().is_empty());
  let contacts = client.chat().find_contacts("sales", &FindContactsRequest::default()).await.unwrap();
  assert!(contacts.is_empty());
}

#[tokio::test]
async fn test_profile_routes() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/chat/fetchProfile/sales"))
    .and(body_json(json!({"number": "5511999999999"})))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "wuid": "5511999999999@s.whatsapp.net",
      "name": "Sales",
      "numberExists": true
    })))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("POST"))
    .and(path("/chat/updateProfileName/sales"))
    .and(body_json(json!({"name": "Sales Desk"})))
    .respond_with(ResponseTemplate::new(201).set_body_json(json!({"update": "success"})))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("DELETE"))
    .and(path("/chat/removeProfilePicture/sales"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"update": "success"})))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/chat/fetchPrivacySettings/sales"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "readreceipts": "all",
      "profile": "all",
      "status": "contacts",
      "online": "match_last_seen",
      "last": "contacts",
      "groupadd": "contacts"
    })))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("POST"))
    .and(path("/chat/updatePrivacySettings/sales"))
    .and(body_partial_json(json!({"online": "match_last_seen", "groupadd": "contacts"})))
    .respond_with(ResponseTemplate::new(201))
    .expect(1)
    .mount(&server)
    .await;

  let profile = client_for(&server).profile();

  let fetched = profile.fetch_profile("sales", &NumberRequest::new("5511999999999")).await.unwrap();
  assert_eq!(fetched.name.as_deref(), Some("Sales"));
  assert_eq!(fetched.number_exists, Some(true));

  profile.update_profile_name("sales", &UpdateProfileName { name: "Sales Desk".into() }).await.unwrap();
  profile.remove_profile_picture("sales").await.unwrap();
  assert_eq!(profile.fetch_privacy_settings("sales").await.unwrap(), privacy());
  profile.update_privacy_settings("sales", &privacy()).await.unwrap();

  let long = UpdateProfileName { name: "x".repeat(26) };
  assert_eq!(profile.update_profile_name("sales", &long).await.unwrap_err().field(), Some("name"));
}

#[tokio::test]
async fn test_label_routes() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/label/findLabels/sales"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([
      {"id": "1", "name": "New customer", "color": "#dfaef0", "predefinedId": "1"}
    ])))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("POST"))
    .and(path("/label/handleLabel/sales"))
    .and(body_json(json!({"number": "5511999999999", "labelId": "1", "action": "add"})))
    .respond_with(ResponseTemplate::new(201).set_body_json(json!({
      "numberJid": "5511999999999@s.whatsapp.net",
      "labelId": "1",
      "add": true
    })))
    .expect(1)
    .mount(&server)
    .await;

  let label = client_for(&server).label();
  let labels = label.find_labels("sales").await.unwrap();
  assert_eq!(labels.len(), 1);
  assert_eq!(labels[0].name, "New customer");

  let request = HandleLabelRequest {
    number: "5511999999999".into(),
    label_id: "1".into(),
    action: LabelAction::Add,
  };
  let handled = label.handle_label("sales", &request).await.unwrap();
  assert_eq!(handled.add, Some(true));
  assert_eq!(handled.number_jid, "5511999999999@s.whatsapp.net");
}

#[tokio::test]
async fn test_template_routes() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/template/create/sales"))
    .and(body_partial_json(json!({"name": "order_shipped", "category": "UTILITY", "language": "en_US"})))
    .respond_with(ResponseTemplate::new(201).set_body_json(json!({
      "id": "t1",
      "name": "order_shipped",
      "status": "PENDING",
      "category": "UTILITY"
    })))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/template/find/sales"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([
      {"id": "t1", "name": "order_shipped", "status": "APPROVED"}
    ])))
    .expect(1)
    .mount(&server)
    .await;

  let template = client_for(&server).template();
  let created = template.create("sales", &order_template()).await.unwrap();
  assert_eq!(created.status.as_deref(), Some("PENDING"));

  let found = template.find("sales").await.unwrap();
  assert_eq!(found.len(), 1);
  assert_eq!(found[0].status.as_deref(), Some("APPROVED"));

  let mut bad = order_template();
  bad.name = "Order Shipped".into();
  assert_eq!(template.create("sales", &bad).await.unwrap_err().field(), Some("name"));
}

#[tokio::test]
async fn test_chatwoot_routes() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/chatwoot/set/sales"))
    .and(body_partial_json(json!({"enabled": true, "accountId": "1", "url": "https://chatwoot.example.com"})))
    .respond_with(ResponseTemplate::new(201).set_body_json(json!({
      "enabled": true,
      "accountId": "1",
      "token": "cw-token",
      "url": "https://chatwoot.example.com",
      "webhookUrl": "http://localhost:8080/chatwoot/webhook/sales"
    })))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/chatwoot/find/fresh"))
    .respond_with(ResponseTemplate::new(200).set_body_string("null"))
    .expect(1)
    .mount(&server)
    .await;

  let chatwoot_endpoints = client_for(&server).chatwoot();
  let stored = chatwoot_endpoints.set("sales", &chatwoot()).await.unwrap();
  assert_eq!(stored.webhook_url.as_deref(), Some("http://localhost:8080/chatwoot/webhook/sales"));
  assert_eq!(chatwoot_endpoints.find("fresh").await.unwrap(), None);
}

#[tokio::test]
async fn test_proxy_and_settings_set() {
  let server = MockServer::start().await;
  let proxy_body = json!({"enabled": true, "host": "proxy.local", "port": "3128", "protocol": "http"});
  Mock::given(method("POST"))
    .and(path("/proxy/set/sales"))
    .and(body_json(proxy_body.clone()))
    .respond_with(ResponseTemplate::new(201).set_body_json(proxy_body))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("POST"))
    .and(path("/settings/set/sales"))
    .and(body_partial_json(json!({"rejectCall": true, "msgCall": "No calls, please"})))
    .respond_with(ResponseTemplate::new(201).set_body_json(json!({
      "rejectCall": true,
      "msgCall": "No calls, please",
      "alwaysOnline": true
    })))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);

  let proxy = ProxyConfig::new("proxy.local", 3128, ProxyProtocol::Http);
  assert_eq!(client.proxy().set("sales", &proxy).await.unwrap(), proxy);

  let mut settings = InstanceSettings { reject_call: true, always_online: true, ..Default::default() };
  assert_eq!(client.settings().set("sales", &settings).await.unwrap_err().field(), Some("msgCall"));

  settings.msg_call = Some("No calls, please".into());
  assert_eq!(client.settings().set("sales", &settings).await.unwrap(), settings);
}

#[tokio::test]
async fn test_blank_instance_rejected_by_every_module() {
  let server = MockServer::start().await;
  expect_no_requests(&server).await;
  let client = client_for(&server);

  let label_request = HandleLabelRequest {
    number: "5511999999999".into(),
    label_id: "1".into(),
    action: LabelAction::Remove,
  };
  let proxy = ProxyConfig::new("proxy.local", 3128, ProxyProtocol::Socks5);
  let call = OfferCallRequest { number: "5511999999999".into(), is_video: false, call_duration: 10 };

  let results = vec![
    client.profile().fetch_profile("", &NumberRequest::new("55")).await.map(|_| ()),
    client.profile().remove_profile_picture(" ").await,
    client.profile().fetch_privacy_settings("").await.map(|_| ()),
    client.profile().update_privacy_settings("", &privacy()).await,
    client.label().find_labels("").await.map(|_| ()),
    client.label().handle_label(" ", &label_request).await.map(|_| ()),
    client.template().create("", &order_template()).await.map(|_| ()),
    client.template().find("").await.map(|_| ()),
    client.chatwoot().set("", &chatwoot()).await.map(|_| ()),
    client.chatwoot().find(" ").await.map(|_| ()),
    client.proxy().set("", &proxy).await.map(|_| ()),
    client.proxy().find("").await.map(|_| ()),
    client.settings().set("", &InstanceSettings::default()).await.map(|_| ()),
    client.settings().find("").await.map(|_| ()),
    client.chat().find_chats("").await.map(|_| ()),
    client.call().offer("", &call).await.map(|_| ()),
    client.webhook().find("").await.map(|_| ()),
    client.rabbitmq().find("").await.map(|_| ()),
  ];

  for result in results {
    assert_eq!(result.unwrap_err().field(), Some("instance"));
  }
}
