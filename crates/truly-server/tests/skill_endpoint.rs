//! Integration tests for `POST /` — the locally-served handlers.
//!
//! Each test drives the real router with `tower::ServiceExt::oneshot` and
//! asserts on the response envelope JSON. None of these names are eligible
//! for delegation, so the webhook is never contacted.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;
use truly_server::{app, AppState};
use truly_skill::{DelegationSettings, Skill};

fn test_app() -> axum::Router {
    let skill = Skill::new(DelegationSettings::default()).unwrap();
    app(AppState { skill })
}

async fn post_body(app: axum::Router, body: String) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_envelope(app: axum::Router, envelope: Value) -> (StatusCode, Value) {
    post_body(app, envelope.to_string()).await
}

fn typed_request(request_type: &str, locale: &str) -> Value {
    json!({
        "version": "1.0",
        "request": {
            "type": request_type,
            "requestId": "amzn1.echo-api.request.1",
            "locale": locale
        }
    })
}

fn intent_request(name: &str, locale: &str) -> Value {
    json!({
        "version": "1.0",
        "session": {
            "new": false,
            "sessionId": "amzn1.echo-api.session.1",
            "user": { "userId": "amzn1.ask.account.123" }
        },
        "request": {
            "type": "IntentRequest",
            "requestId": "amzn1.echo-api.request.1",
            "locale": locale,
            "intent": { "name": name }
        }
    })
}

#[tokio::test]
async fn health_check_returns_ok() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn launch_starts_playback_with_a_welcome() {
    let (status, out) = post_envelope(test_app(), typed_request("LaunchRequest", "en-US")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(out["version"], "1.0");

    let directive = &out["response"]["directives"][0];
    assert_eq!(directive["type"], "AudioPlayer.Play");
    assert_eq!(directive["audioItem"]["stream"]["offsetInMilliseconds"], 0);
    assert_eq!(out["response"]["shouldEndSession"], true);

    // The welcome message references the resolved card title.
    let title = out["response"]["card"]["title"].as_str().unwrap();
    let speech = out["response"]["outputSpeech"]["text"].as_str().unwrap();
    assert!(speech.contains(title));
}

#[tokio::test]
async fn polish_launch_resolves_the_polish_station() {
    let (status, out) = post_envelope(test_app(), typed_request("LaunchRequest", "pl-PL")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(out["response"]["card"]["title"], "Yours Truly Polska");
    let url = out["response"]["directives"][0]["audioItem"]["stream"]["url"]
        .as_str()
        .unwrap();
    assert!(url.contains("/pl/"));
}

#[tokio::test]
async fn help_speaks_and_keeps_the_session_open() {
    let (status, out) =
        post_envelope(test_app(), intent_request("AMAZON.HelpIntent", "en-US")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(out["response"]["shouldEndSession"], false);
    assert!(out["response"]["outputSpeech"]["text"].is_string());
    assert!(out["response"]["directives"].is_null());
}

#[tokio::test]
async fn stop_emits_a_stop_directive_and_message() {
    let (status, out) =
        post_envelope(test_app(), intent_request("AMAZON.StopIntent", "en-US")).await;

    assert_eq!(status, StatusCode::OK);
    let directives = out["response"]["directives"].as_array().unwrap();
    assert_eq!(directives.len(), 1);
    assert_eq!(directives[0]["type"], "AudioPlayer.Stop");
    assert_eq!(out["response"]["outputSpeech"]["text"], "Goodbye.");
}

#[tokio::test]
async fn unknown_intents_get_the_unhandled_response() {
    let (status, out) = post_envelope(test_app(), intent_request("Foo.Bar", "en-US")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        out["response"]["outputSpeech"]["text"],
        "Sorry, I didn't catch that. Goodbye."
    );
    assert_eq!(out["response"]["shouldEndSession"], true);
}

#[tokio::test]
async fn session_ended_gets_an_empty_response() {
    let (status, out) =
        post_envelope(test_app(), typed_request("SessionEndedRequest", "en-US")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(out["response"], json!({}));
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
    let (status, out) = post_body(test_app(), "{not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(out["error"].as_str().unwrap().contains("invalid request envelope"));
}
