mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn telegram_ok(mock_server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(SEND_MESSAGE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(expected_calls)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_payment_is_relayed_to_default_chat() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_MESSAGE_PATH))
        .and(body_json(json!({
            "chat_id": "-100500",
            "text": expected_payment_text(),
            "parse_mode": "Markdown"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = test_app(&mock_server, Some(BOT_TOKEN), Some("-100500"));
    let response = post_json(&app, "/webhook/payment", &payment_payload()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "status": "ok" }));
    assert!(response.headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_payload_chat_id_overrides_default() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_MESSAGE_PATH))
        .and(body_partial_json(json!({ "chat_id": "777" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = test_app(&mock_server, Some(BOT_TOKEN), Some("-100500"));
    let mut payload = payment_payload();
    payload["chat_id"] = json!("777");

    let response = post_json(&app, "/webhook/payment", &payload).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_empty_chat_id_uses_default() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_MESSAGE_PATH))
        .and(body_partial_json(json!({ "chat_id": "-100500" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = test_app(&mock_server, Some(BOT_TOKEN), Some("-100500"));
    let mut payload = payment_payload();
    payload["chat_id"] = json!("");

    let response = post_json(&app, "/webhook/payment", &payload).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_payload_chat_id_is_forwarded_verbatim() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_MESSAGE_PATH))
        .and(body_partial_json(json!({ "chat_id": " 777 " })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = test_app(&mock_server, Some(BOT_TOKEN), Some("-100500"));
    let mut payload = payment_payload();
    payload["chat_id"] = json!(" 777 ");

    let response = post_json(&app, "/webhook/payment", &payload).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_missing_required_fields_are_rejected_without_sending() {
    let mock_server = MockServer::start().await;
    telegram_ok(&mock_server, 0).await;
    let app = test_app(&mock_server, Some(BOT_TOKEN), Some("-100500"));

    let top_level = [
        "eventType",
        "product",
        "buyer",
        "contractId",
        "amount",
        "currency",
        "timestamp",
        "status",
        "errorMessage",
    ];
    for field in top_level {
        let mut payload = payment_payload();
        payload.as_object_mut().unwrap().remove(field);

        let response = post_json(&app, "/webhook/payment", &payload).await;
        assert_eq!(
            response.status,
            StatusCode::UNPROCESSABLE_ENTITY,
            "missing {} should be rejected",
            field
        );
        assert_eq!(response.body["error"]["code"], "VAL_3002");
        assert_eq!(response.body["error"]["field"], field);
    }

    for (parent, child) in [("product", "id"), ("product", "title"), ("buyer", "email")] {
        let mut payload = payment_payload();
        payload[parent].as_object_mut().unwrap().remove(child);

        let response = post_json(&app, "/webhook/payment", &payload).await;
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.body["error"]["field"],
            format!("{}.{}", parent, child)
        );
    }
}

#[tokio::test]
async fn test_mistyped_fields_are_rejected() {
    let mock_server = MockServer::start().await;
    telegram_ok(&mock_server, 0).await;
    let app = test_app(&mock_server, Some(BOT_TOKEN), Some("-100500"));

    let mut payload = payment_payload();
    payload["amount"] = json!("fifty");
    let response = post_json(&app, "/webhook/payment", &payload).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"]["code"], "VAL_3005");
    assert_eq!(response.body["error"]["field"], "amount");

    let mut payload = payment_payload();
    payload["currency"] = json!(643);
    let response = post_json(&app, "/webhook/payment", &payload).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"]["field"], "currency");

    let response = post_raw(&app, "/webhook/payment", "{not json".to_string(), &[]).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_body_without_content_type_is_parsed_as_json() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_MESSAGE_PATH))
        .and(body_partial_json(json!({ "text": expected_payment_text() })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = test_app(&mock_server, Some(BOT_TOKEN), Some("-100500"));
    let response =
        post_with_content_type(&app, "/webhook/payment", payment_payload().to_string(), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_body_without_content_type_is_still_validated() {
    let mock_server = MockServer::start().await;
    telegram_ok(&mock_server, 0).await;
    let app = test_app(&mock_server, Some(BOT_TOKEN), Some("-100500"));

    let mut payload = payment_payload();
    payload["buyer"].as_object_mut().unwrap().remove("email");
    let response = post_with_content_type(&app, "/webhook/payment", payload.to_string(), None).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"]["field"], "buyer.email");

    let response =
        post_with_content_type(&app, "/webhook/payment", "{not json".to_string(), None).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_non_json_content_type_is_rejected() {
    let mock_server = MockServer::start().await;
    telegram_ok(&mock_server, 0).await;
    let app = test_app(&mock_server, Some(BOT_TOKEN), Some("-100500"));

    let response = post_with_content_type(
        &app,
        "/webhook/payment",
        payment_payload().to_string(),
        Some("text/plain"),
    )
    .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"]["code"], "VAL_3003");
}

#[tokio::test]
async fn test_error_body_carries_the_response_request_id() {
    let mock_server = MockServer::start().await;
    telegram_ok(&mock_server, 0).await;
    let app = test_app(&mock_server, Some(BOT_TOKEN), Some("-100500"));

    let mut payload = payment_payload();
    payload.as_object_mut().unwrap().remove("contractId");
    let response = post_json(&app, "/webhook/payment", &payload).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let header = response.headers["x-request-id"].to_str().unwrap();
    assert_eq!(response.body["request_id"], header);
}

#[tokio::test]
async fn test_numeric_string_amount_is_accepted() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_MESSAGE_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = test_app(&mock_server, Some(BOT_TOKEN), Some("1"));
    let mut payload = payment_payload();
    payload["amount"] = json!("1500.50");

    let response = post_json(&app, "/webhook/payment", &payload).await;
    assert_eq!(response.status, StatusCode::OK);

    let requests = mock_server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(sent["text"].as_str().unwrap().contains("`1500.50 RUB`"));
}

#[tokio::test]
async fn test_upstream_failure_surfaces_as_500_with_detail() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_MESSAGE_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable: bot API maintenance"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = test_app(&mock_server, Some(BOT_TOKEN), Some("-100500"));
    let response = post_json(&app, "/webhook/payment", &payment_payload()).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let detail = response.body["detail"].as_str().unwrap();
    assert!(detail.starts_with("Failed to send Telegram message:"));
    assert!(detail.contains("Service Unavailable: bot API maintenance"));
    assert_eq!(response.body["error"]["code"], "EXT_8003");
}

#[tokio::test]
async fn test_missing_token_fails_without_network_call() {
    let mock_server = MockServer::start().await;
    telegram_ok(&mock_server, 0).await;

    let app = test_app(&mock_server, None, Some("-100500"));
    let response = post_json(&app, "/webhook/payment", &payment_payload()).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"]["code"], "INT_9998");
    assert!(response.body["detail"]
        .as_str()
        .unwrap()
        .contains("bot token is not configured"));
}

#[tokio::test]
async fn test_missing_destination_fails_without_network_call() {
    let mock_server = MockServer::start().await;
    telegram_ok(&mock_server, 0).await;

    let app = test_app(&mock_server, Some(BOT_TOKEN), None);
    let response = post_json(&app, "/webhook/payment", &payment_payload()).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"]["code"], "INT_9998");
}

#[tokio::test]
async fn test_authorization_header_is_not_checked() {
    let mock_server = MockServer::start().await;
    telegram_ok(&mock_server, 2).await;
    let app = test_app(&mock_server, Some(BOT_TOKEN), Some("-100500"));

    let body = payment_payload().to_string();
    let with_header = post_raw(
        &app,
        "/webhook/payment",
        body.clone(),
        &[("authorization", "test_signature")],
    )
    .await;
    let without_header = post_raw(&app, "/webhook/payment", body, &[]).await;

    assert_eq!(with_header.status, StatusCode::OK);
    assert_eq!(without_header.status, StatusCode::OK);
}

#[tokio::test]
async fn test_root_returns_greeting() {
    let mock_server = MockServer::start().await;
    telegram_ok(&mock_server, 0).await;

    for app in [
        test_app(&mock_server, Some(BOT_TOKEN), Some("1")),
        test_app(&mock_server, None, None),
    ] {
        let response = get(&app, "/").await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, json!({ "message": "Hello World" }));
    }
}

#[tokio::test]
async fn test_health_reports_configuration_without_secrets() {
    let mock_server = MockServer::start().await;
    let app = test_app(&mock_server, Some(BOT_TOKEN), None);

    let response = get(&app, "/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "healthy");
    assert_eq!(response.body["bot_token_configured"], true);
    assert_eq!(response.body["default_chat_configured"], false);
    assert!(!response.body.to_string().contains(BOT_TOKEN));

    let app = test_app(&mock_server, None, None);
    let response = get(&app, "/health").await;
    assert_eq!(response.body["status"], "degraded");
}

#[tokio::test]
async fn test_openapi_document_lists_webhooks() {
    let mock_server = MockServer::start().await;
    let app = test_app(&mock_server, None, None);

    let response = get(&app, "/openapi.json").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["paths"]["/webhook/payment"]["post"].is_object());
    assert!(response.body["paths"]["/telegram/webhook"]["post"].is_object());
    assert!(response.body["paths"]["/telegram/webhook"]["post"]["requestBody"]["content"]
        ["application/json"]
        .is_object());
    assert!(response.body["components"]["schemas"]["PaymentEvent"].is_object());
}
