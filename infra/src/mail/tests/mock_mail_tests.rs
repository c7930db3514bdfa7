//! Unit tests for mock mail service

use crate::mail::{MailMessage, MailService, MockMailService};
use crate::InfrastructureError;

fn message(to: &str, subject: &str) -> MailMessage {
    MailMessage::new("no-reply@test.local", to, subject, "<p>hi</p>", "hi")
}

#[tokio::test]
async fn test_mock_mail_send_success() {
    let service = MockMailService::with_options(false, false);
    let result = service.send_mail(&message("jane@example.com", "Hello")).await;

    let message_id = result.unwrap();
    assert!(message_id.starts_with("mock_"));
    assert_eq!(service.get_message_count(), 1);
    assert_eq!(service.sent_messages().len(), 1);
}

#[tokio::test]
async fn test_mock_mail_simulate_failure() {
    let service = MockMailService::with_options(false, false);
    service.set_simulate_failure(true);

    let result = service.send_mail(&message("jane@example.com", "Hello")).await;
    assert!(matches!(result, Err(InfrastructureError::Mail(_))));
    assert!(!service.is_available().await);
    assert_eq!(service.get_message_count(), 0);
    assert!(service.sent_messages().is_empty());
}

#[tokio::test]
async fn test_mock_mail_last_message_to() {
    let service = MockMailService::with_options(false, false);
    service.send_mail(&message("a@example.com", "first")).await.unwrap();
    service.send_mail(&message("b@example.com", "other")).await.unwrap();
    service.send_mail(&message("a@example.com", "second")).await.unwrap();

    let last = service.last_message_to("a@example.com").unwrap();
    assert_eq!(last.subject, "second");
    assert!(service.last_message_to("c@example.com").is_none());
}

#[tokio::test]
async fn test_mock_mail_clones_share_outbox() {
    let service = MockMailService::with_options(false, false);
    let handle = service.clone();

    service.send_mail(&message("a@example.com", "x")).await.unwrap();
    assert_eq!(handle.get_message_count(), 1);

    handle.reset();
    assert_eq!(service.get_message_count(), 0);
    assert!(service.sent_messages().is_empty());
}
