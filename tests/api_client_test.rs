//! API client tests against a local stub server

use std::io::Read;
use std::thread;

use tiny_http::{Header, Response, Server};

use pingarr::api::{ApiClient, ApiError};
use pingarr::domain::{AgentSet, DiscordSettingsUpdate, NotificationAgent, TelegramSettingsUpdate};

fn json_header() -> Header {
    Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap()
}

/// Start a stub server and return its base URL
fn stub_server() -> (Server, String) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    (server, format!("http://{addr}"))
}

fn has_api_key(request: &tiny_http::Request, expected: &str) -> bool {
    request
        .headers()
        .iter()
        .any(|h| h.field.equiv("x-api-key") && h.value.as_str() == expected)
}

#[test]
fn test_fetch_notification_settings() {
    let (server, base) = stub_server();

    let handle = thread::spawn(move || {
        let request = server.recv().unwrap();
        assert_eq!(request.method().to_string(), "GET");
        assert_eq!(request.url(), "/api/v1/user/7/settings/notifications");
        assert!(has_api_key(&request, "test-key"));

        let body = r#"{
            "enableDiscord": true,
            "discordId": "123456789012345678",
            "notificationAgents": 5,
            "telegramChatId": null,
            "telegramSendSilently": false
        }"#;
        request
            .respond(Response::from_string(body).with_header(json_header()))
            .unwrap();
    });

    let client = ApiClient::new(&base, "test-key");
    let settings = client.notification_settings(7).unwrap();

    assert!(settings.enable_discord);
    assert_eq!(settings.discord_id.as_deref(), Some("123456789012345678"));
    assert!(settings.agent_set().contains(NotificationAgent::Telegram));
    assert_eq!(settings.telegram_chat_id, None);

    handle.join().unwrap();
}

#[test]
fn test_discord_update_posts_owned_subset() {
    let (server, base) = stub_server();

    let handle = thread::spawn(move || {
        let mut request = server.recv().unwrap();
        assert_eq!(request.method().to_string(), "POST");
        assert_eq!(request.url(), "/api/v1/user/3/settings/notifications");

        let mut body = String::new();
        request.as_reader().read_to_string(&mut body).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "enableDiscord": true,
                "discordId": "123456789012345678",
            })
        );

        request
            .respond(Response::from_string("{}").with_header(json_header()))
            .unwrap();
    });

    let client = ApiClient::new(&base, "test-key");
    let update = DiscordSettingsUpdate {
        enable_discord: true,
        discord_id: Some("123456789012345678".to_string()),
    };
    client.update_discord_settings(3, &update).unwrap();

    handle.join().unwrap();
}

#[test]
fn test_telegram_update_carries_agent_bits() {
    let (server, base) = stub_server();

    let handle = thread::spawn(move || {
        let mut request = server.recv().unwrap();
        let mut body = String::new();
        request.as_reader().read_to_string(&mut body).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["notificationAgents"], 5);
        assert_eq!(value["telegramChatId"], "-100200300");

        request
            .respond(Response::from_string("{}").with_header(json_header()))
            .unwrap();
    });

    let mut agents = AgentSet::default();
    agents.insert(NotificationAgent::Telegram);

    let client = ApiClient::new(&base, "test-key");
    let update = TelegramSettingsUpdate {
        notification_agents: agents,
        telegram_chat_id: Some("-100200300".to_string()),
        telegram_send_silently: false,
    };
    client.update_telegram_settings(3, &update).unwrap();

    handle.join().unwrap();
}

#[test]
fn test_rejected_write_maps_to_status_error() {
    let (server, base) = stub_server();

    let handle = thread::spawn(move || {
        let request = server.recv().unwrap();
        request
            .respond(Response::from_string("{\"message\":\"bad\"}").with_status_code(403))
            .unwrap();
    });

    let client = ApiClient::new(&base, "wrong-key");
    let update = DiscordSettingsUpdate {
        enable_discord: false,
        discord_id: None,
    };
    let err = client.update_discord_settings(3, &update).unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 403 }));

    handle.join().unwrap();
}

#[test]
fn test_resolve_current_user() {
    let (server, base) = stub_server();

    let handle = thread::spawn(move || {
        let request = server.recv().unwrap();
        assert_eq!(request.url(), "/api/v1/auth/me");
        request
            .respond(
                Response::from_string(r#"{"id": 12, "displayName": "maia"}"#)
                    .with_header(json_header()),
            )
            .unwrap();
    });

    let client = ApiClient::new(&base, "test-key");
    let user = client.current_user().unwrap();
    assert_eq!(user.id, 12);
    assert_eq!(user.display_name.as_deref(), Some("maia"));

    handle.join().unwrap();
}

#[test]
fn test_public_settings_bot_username() {
    let (server, base) = stub_server();

    let handle = thread::spawn(move || {
        let request = server.recv().unwrap();
        assert_eq!(request.url(), "/api/v1/settings/public");
        request
            .respond(
                Response::from_string(
                    r#"{"applicationTitle": "Requests", "telegramBotUsername": "my_request_bot"}"#,
                )
                .with_header(json_header()),
            )
            .unwrap();
    });

    let client = ApiClient::new(&base, "test-key");
    let public = client.public_settings().unwrap();
    assert_eq!(public.application_title.as_deref(), Some("Requests"));
    assert_eq!(
        public.telegram_bot_username.as_deref(),
        Some("my_request_bot")
    );

    handle.join().unwrap();
}

#[test]
fn test_unreachable_server_is_a_transport_error() {
    // Port 1 is reserved and closed
    let client = ApiClient::new("http://127.0.0.1:1", "test-key");
    let err = client.current_user().unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
