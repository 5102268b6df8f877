use contact_relay::client::form::{
    ERROR_FALLBACK, NETWORK_ERROR_MESSAGE, REQUIRED_FIELDS_MESSAGE, SENDING_LABEL,
    SUCCESS_AUTO_HIDE, SUCCESS_FALLBACK,
};
use contact_relay::client::{
    ButtonState, ContactFormClient, FormFields, FormState, MessageKind, SubmitOutcome,
};
use httpmock::prelude::*;
use std::time::Instant;

fn filled_form() -> FormState {
    FormState::new(FormFields::new("Ada", "ada@example.com", "Hello")).with_button_label("Send")
}

fn assert_button_cycled(form: &FormState) {
    assert_eq!(
        form.button_history(),
        &[ButtonState::busy(SENDING_LABEL), ButtonState::idle("Send")]
    );
}

#[tokio::test]
async fn test_empty_name_shows_error_without_request() {
    let server = MockServer::start();
    let endpoint = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(200);
    });

    let client = ContactFormClient::for_site(&server.base_url());
    let mut form = FormState::new(FormFields::new("", "ada@example.com", "Hello"));

    let outcome = client.submit(&mut form).await;

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(endpoint.hits(), 0);
    let message = form.message().unwrap();
    assert_eq!(message.kind, MessageKind::Error);
    assert_eq!(message.text, REQUIRED_FIELDS_MESSAGE);
    // 按鈕狀態沒有變動
    assert!(form.button_history().is_empty());
}

#[tokio::test]
async fn test_empty_email_shows_error_without_request() {
    let server = MockServer::start();
    let endpoint = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(200);
    });

    let client = ContactFormClient::for_site(&server.base_url());
    let mut form = FormState::new(FormFields::new("Ada", "", "Hello"));

    let outcome = client.submit(&mut form).await;

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(endpoint.hits(), 0);
    assert_eq!(form.message().unwrap().text, REQUIRED_FIELDS_MESSAGE);
    assert!(form.button_history().is_empty());
}

#[tokio::test]
async fn test_successful_submission_resets_form() {
    let server = MockServer::start();
    let endpoint = server.mock(|when, then| {
        when.method(POST)
            .path("/api/contact")
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hello"
            }));
        then.status(200).json_body(serde_json::json!({
            "success": true,
            "message": "Thanks, we'll be in touch.",
            "id": "email_1"
        }));
    });

    let client = ContactFormClient::for_site(&server.base_url());
    let mut form = filled_form();

    let outcome = client.submit(&mut form).await;

    endpoint.assert();
    assert_eq!(outcome, SubmitOutcome::Sent);
    assert_eq!(form.fields(), &FormFields::default());
    assert_button_cycled(&form);

    let message = form.message().unwrap();
    assert_eq!(message.kind, MessageKind::Success);
    assert_eq!(message.text, "Thanks, we'll be in touch.");
    assert_eq!(message.auto_hide_after, Some(SUCCESS_AUTO_HIDE));
    assert!(form
        .visible_message(Instant::now() + SUCCESS_AUTO_HIDE)
        .is_none());
}

#[tokio::test]
async fn test_server_error_message_is_shown() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(500)
            .json_body(serde_json::json!({"error": "Failed to send email"}));
    });

    let client = ContactFormClient::for_site(&server.base_url());
    let mut form = filled_form();

    let outcome = client.submit(&mut form).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(form.message().unwrap().text, "Failed to send email");
    assert_eq!(form.message().unwrap().kind, MessageKind::Error);
    // 失敗時欄位保留
    assert_eq!(form.fields().name, "Ada");
    assert_button_cycled(&form);
}

#[tokio::test]
async fn test_empty_error_falls_back_to_generic_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(500).json_body(serde_json::json!({"error": ""}));
    });

    let client = ContactFormClient::for_site(&server.base_url());
    let mut form = filled_form();

    let outcome = client.submit(&mut form).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(form.message().unwrap().text, ERROR_FALLBACK);
    assert_button_cycled(&form);
}

#[tokio::test]
async fn test_empty_success_message_falls_back() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(200)
            .json_body(serde_json::json!({"success": true, "message": "", "id": "email_1"}));
    });

    let client = ContactFormClient::for_site(&server.base_url());
    let mut form = filled_form();

    let outcome = client.submit(&mut form).await;

    assert_eq!(outcome, SubmitOutcome::Sent);
    assert_eq!(form.message().unwrap().text, SUCCESS_FALLBACK);
}

#[tokio::test]
async fn test_success_flag_is_required() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(200).json_body(serde_json::json!({"id": "email_1"}));
    });

    let client = ContactFormClient::for_site(&server.base_url());
    let mut form = filled_form();

    let outcome = client.submit(&mut form).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(form.message().unwrap().text, ERROR_FALLBACK);
    assert_button_cycled(&form);
}

#[tokio::test]
async fn test_non_json_response_is_network_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(502).body("<html>Bad Gateway</html>");
    });

    let client = ContactFormClient::for_site(&server.base_url());
    let mut form = filled_form();

    let outcome = client.submit(&mut form).await;

    assert_eq!(outcome, SubmitOutcome::NetworkError);
    assert_eq!(form.message().unwrap().text, NETWORK_ERROR_MESSAGE);
    assert_button_cycled(&form);
}

#[tokio::test]
async fn test_connection_failure_restores_button() {
    let client = ContactFormClient::for_site("http://127.0.0.1:1");
    let mut form = filled_form();

    let outcome = client.submit(&mut form).await;

    assert_eq!(outcome, SubmitOutcome::NetworkError);
    assert_eq!(form.message().unwrap().text, NETWORK_ERROR_MESSAGE);
    assert_button_cycled(&form);
}
