//! Integration tests for the Discord REST client using wiremock

use application::{Embed, Reply};
use integration_discord::{
    DiscordClient, DiscordClientConfig, DiscordError, MessagePayload, command_definitions,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

fn create_test_client(mock_server: &MockServer, bot_token: Option<&str>) -> DiscordClient {
    let config = DiscordClientConfig {
        api_base_url: mock_server.uri(),
        application_id: "1234".to_string(),
        bot_token: bot_token.map(str::to_string),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    DiscordClient::new(config).expect("Failed to create client")
}

#[tokio::test]
async fn test_edit_original_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/webhooks/1234/tok-abc/messages/@original"))
        .and(body_partial_json(serde_json::json!({
            "content": "",
            "embeds": [{ "title": "⛅ Weather in Hanoi", "color": 16_766_720 }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "m1" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server, None);
    let reply: Reply = Embed::new("⛅ Weather in Hanoi", 0xFF_D7_00).into();
    let result = client
        .edit_original_response("tok-abc", &MessagePayload::from_reply(&reply))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_edit_original_response_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "Unknown Webhook",
            "code": 10015
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server, None);
    let result = client
        .edit_original_response("expired", &MessagePayload::text("late"))
        .await;

    assert!(matches!(
        result,
        Err(DiscordError::Api { status: 404, ref message }) if message == "Unknown Webhook"
    ));
}

#[tokio::test]
async fn test_register_global_commands() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/applications/1234/commands"))
        .and(header("authorization", "Bot bot-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": "1", "name": "weather" },
            { "id": "2", "name": "forecast" }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server, Some("bot-token"));
    let registered = client
        .register_commands(None, &command_definitions())
        .await
        .expect("registered");

    assert_eq!(registered.len(), 2);
    assert_eq!(registered[0].name, "weather");
}

#[tokio::test]
async fn test_register_guild_commands() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/applications/1234/guilds/999/commands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server, Some("bot-token"));
    let registered = client
        .register_commands(Some("999"), &command_definitions())
        .await
        .expect("registered");
    assert!(registered.is_empty());
}

#[tokio::test]
async fn test_register_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "401: Unauthorized",
            "code": 0
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server, Some("wrong"));
    let result = client.register_commands(None, &command_definitions()).await;
    assert!(matches!(result, Err(DiscordError::Api { status: 401, .. })));
}
