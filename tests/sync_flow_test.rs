//! End-to-end submit lifecycle: controller -> sync worker -> stub server.
//!
//! Exercises the contract that a completed submit is followed by exactly
//! one reconciling refetch, with the worker owning all HTTP.

use std::io::Read;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tiny_http::{Header, Response, Server};

use pingarr::api::{start_sync_worker, ApiClient, FormKind, SyncEvent};
use pingarr::domain::NotificationSettings;
use pingarr::form::DiscordForm;

fn json_header() -> Header {
    Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap()
}

#[test]
fn test_submit_success_then_single_refetch() {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let base = format!("http://{addr}");

    // Stub: one write, then one read returning the stored state
    let server_handle = thread::spawn(move || {
        let mut request = server.recv().unwrap();
        assert_eq!(request.method().to_string(), "POST");
        let mut body = String::new();
        request.as_reader().read_to_string(&mut body).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["enableDiscord"], true);
        request
            .respond(Response::from_string("{}").with_header(json_header()))
            .unwrap();

        let request = server.recv().unwrap();
        assert_eq!(request.method().to_string(), "GET");
        assert_eq!(request.url(), "/api/v1/user/7/settings/notifications");
        request
            .respond(
                Response::from_string(
                    r#"{"enableDiscord": true, "discordId": "123456789012345678"}"#,
                )
                .with_header(json_header()),
            )
            .unwrap();
    });

    let (request_tx, request_rx) = mpsc::channel();
    let (event_tx, event_rx) = mpsc::channel();
    start_sync_worker(ApiClient::new(&base, "test-key"), request_rx, event_tx);

    let snapshot = NotificationSettings {
        enable_discord: true,
        discord_id: Some("123456789012345678".to_string()),
        ..NotificationSettings::default()
    };
    let mut form = DiscordForm::from_snapshot(&snapshot);

    assert!(form.submit(7, &request_tx));
    assert!(form.is_submitting());

    // The write completes...
    match event_rx.recv_timeout(Duration::from_secs(5)).unwrap() {
        SyncEvent::SubmitFinished { form: kind, result } => {
            assert_eq!(kind, FormKind::Discord);
            assert!(result.is_ok());
        }
        other => panic!("unexpected event: {other:?}"),
    }

    // ...and the follow-up refetch reconciles the displayed state
    form.finish_submit(7, &request_tx);
    match event_rx.recv_timeout(Duration::from_secs(5)).unwrap() {
        SyncEvent::Snapshot(fresh) => {
            assert!(fresh.enable_discord);
            form.reset(&fresh);
        }
        other => panic!("unexpected event: {other:?}"),
    }

    // No further traffic: the refetch happened exactly once
    assert!(event_rx.recv_timeout(Duration::from_millis(200)).is_err());

    server_handle.join().unwrap();
}

#[test]
fn test_failed_submit_still_reports_and_allows_refetch() {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let base = format!("http://{addr}");

    let server_handle = thread::spawn(move || {
        let request = server.recv().unwrap();
        request
            .respond(Response::from_string("{}").with_status_code(500))
            .unwrap();
    });

    let (request_tx, request_rx) = mpsc::channel();
    let (event_tx, event_rx) = mpsc::channel();
    start_sync_worker(ApiClient::new(&base, "test-key"), request_rx, event_tx);

    let mut form = DiscordForm::from_snapshot(&NotificationSettings::default());
    form.enable_discord = true;
    assert!(form.submit(7, &request_tx));

    match event_rx.recv_timeout(Duration::from_secs(5)).unwrap() {
        SyncEvent::SubmitFinished { result, .. } => {
            // Failure is reported, not fatal; the form stays editable
            assert!(result.is_err());
        }
        other => panic!("unexpected event: {other:?}"),
    }

    server_handle.join().unwrap();
}
