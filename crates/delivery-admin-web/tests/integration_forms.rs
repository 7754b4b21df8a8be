//! Integration tests for form submission against a mock backend

#![allow(clippy::unwrap_used)]

mod common;

use common::*;
use delivery_admin_core::Error;
use delivery_admin_core::types::TargetType;
use delivery_admin_web::forms::SubmitGuard;
use delivery_admin_web::forms::notification::{NotificationDraft, save};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn draft(target_type: TargetType, custom_ids: &str) -> NotificationDraft {
    NotificationDraft {
        title: "Frete grátis".to_string(),
        content: "Só hoje, em todos os restaurantes".to_string(),
        target_type,
        custom_ids: custom_ids.to_string(),
    }
}

#[tokio::test]
async fn test_custom_audience_sends_parsed_ids() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/notifications"))
        .and(body_json(json!({
            "title": "Frete grátis",
            "content": "Só hoje, em todos os restaurantes",
            "target_type": "CUSTOM",
            "custom_user_ids": [3, 7]
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"message": "Enviada"})),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let ack = save(
        &backend.client,
        &SubmitGuard::default(),
        &draft(TargetType::Custom, "3, 7"),
    )
    .await
    .unwrap();

    assert_eq!(ack.message.as_deref(), Some("Enviada"));
}

#[tokio::test]
async fn test_broadcast_omits_recipient_list() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/notifications"))
        .and(body_json(json!({
            "title": "Frete grátis",
            "content": "Só hoje, em todos os restaurantes",
            "target_type": "ALL"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&backend.server)
        .await;

    save(
        &backend.client,
        &SubmitGuard::default(),
        &draft(TargetType::All, "3, 7"),
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_invalid_drafts_send_nothing() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&backend.server)
        .await;
    let guard = SubmitGuard::default();

    let err = save(&backend.client, &guard, &NotificationDraft::default())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        Error::MissingField {
            field: "Mensagem".to_string()
        }
    );

    let err = save(&backend.client, &guard, &draft(TargetType::Custom, "abc, 0"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation { ref field, .. } if field == "custom_ids"));
    assert!(!guard.is_busy());
}

#[tokio::test]
async fn test_whitespace_only_fields_send_nothing() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&backend.server)
        .await;
    let guard = SubmitGuard::default();

    let blank_title = NotificationDraft {
        title: "   ".to_string(),
        ..draft(TargetType::All, "")
    };
    let err = save(&backend.client, &guard, &blank_title)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        Error::MissingField {
            field: "Título".to_string()
        }
    );

    let all_blank = NotificationDraft {
        title: "   ".to_string(),
        content: "  \n".to_string(),
        target_type: TargetType::All,
        custom_ids: String::new(),
    };
    let err = save(&backend.client, &guard, &all_blank)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        Error::MissingField {
            field: "Mensagem".to_string()
        }
    );
}

#[tokio::test]
async fn test_double_submit_sends_one_request() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/notifications"))
        .respond_with(ResponseTemplate::new(201).set_delay(Duration::from_millis(200)))
        .expect(1)
        .mount(&backend.server)
        .await;

    let transitions = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&transitions);
    let guard = SubmitGuard::observed(move |busy| seen.lock().unwrap().push(busy));
    let form = draft(TargetType::Delivery, "");

    let (first, second) = futures::join!(
        save(&backend.client, &guard, &form),
        save(&backend.client, &guard, &form),
    );

    assert!(first.is_ok());
    assert_eq!(second.unwrap_err(), Error::AlreadySubmitting);
    assert!(!guard.is_busy());
    assert_eq!(*transitions.lock().unwrap(), vec![true, false]);
}

#[tokio::test]
async fn test_guard_is_released_after_backend_failure() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/notifications"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"error": "Título duplicado"})))
        .expect(2)
        .mount(&backend.server)
        .await;
    let guard = SubmitGuard::default();
    let form = draft(TargetType::Customer, "");

    let first = save(&backend.client, &guard, &form).await.unwrap_err();
    let second = save(&backend.client, &guard, &form).await.unwrap_err();

    assert_eq!(first.user_message(), "Título duplicado");
    assert_eq!(first, second);
}
