//! Integration tests for the Telegram notification client against a
//! mock Bot API server.

mod helpers;

use assert_matches::assert_matches;
use uuid::Uuid;

use helpers::{test_settings, TelegramMockServer};
use ReportBuddy::services::telegram::{build_report_keyboard, TelegramService};
use ReportBuddy::utils::errors::{ReportBuddyError, TelegramError};

#[tokio::test]
async fn send_admin_message_returns_message_id_on_success() {
    let mock = TelegramMockServer::start().await;
    mock.mock_send_message_success(123).await;

    let service = TelegramService::new(test_settings(&mock.api_url())).unwrap();
    let response = service
        .send_admin_message("🚨 test alert", None)
        .await
        .unwrap();

    assert!(response.ok);
    assert_eq!(response.message_id(), Some(123));
}

#[tokio::test]
async fn send_admin_message_posts_html_payload_to_admin_chat() {
    let mock = TelegramMockServer::start().await;
    mock.mock_send_message_success(7).await;

    let report_id = Uuid::new_v4();
    let keyboard = build_report_keyboard(report_id, 222);

    let service = TelegramService::new(test_settings(&mock.api_url())).unwrap();
    service
        .send_admin_message("report body", Some(keyboard))
        .await
        .unwrap();

    let payloads = mock.received_payloads().await;
    assert_eq!(payloads.len(), 1);

    let payload = &payloads[0];
    assert_eq!(payload["chat_id"], helpers::test_admin_chat_id());
    assert_eq!(payload["parse_mode"], "HTML");
    assert_eq!(payload["text"], "report body");

    let rows = payload["reply_markup"]["inline_keyboard"]
        .as_array()
        .expect("keyboard rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].as_array().unwrap().len(), 2);
    assert_eq!(
        rows[0][0]["callback_data"],
        format!("user_report_done:{}", report_id)
    );
    assert_eq!(rows[0][1]["callback_data"], "block:222");
    assert_eq!(rows[1][0]["callback_data"], "user:222");
}

#[tokio::test]
async fn rejected_message_is_not_an_error() {
    let mock = TelegramMockServer::start().await;
    mock.mock_send_message_failure().await;

    let service = TelegramService::new(test_settings(&mock.api_url())).unwrap();
    let response = service.send_admin_message("alert", None).await.unwrap();

    assert!(!response.ok);
    assert_eq!(response.message_id(), None);
    assert!(response.description.is_some());
}

#[tokio::test]
async fn ok_response_without_result_yields_no_message_id() {
    let mock = TelegramMockServer::start().await;
    mock.mock_send_message_without_result().await;

    let service = TelegramService::new(test_settings(&mock.api_url())).unwrap();
    let response = service.send_admin_message("alert", None).await.unwrap();

    assert!(response.ok);
    assert_eq!(response.message_id(), None);
}

#[tokio::test]
async fn garbage_response_surfaces_as_invalid_response() {
    let mock = TelegramMockServer::start().await;
    mock.mock_send_message_garbage().await;

    let service = TelegramService::new(test_settings(&mock.api_url())).unwrap();
    let result = service.send_admin_message("alert", None).await;

    assert_matches!(
        result,
        Err(ReportBuddyError::Telegram(TelegramError::InvalidResponse(_)))
    );
}
