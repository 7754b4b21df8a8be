//! Integration tests for the HTTP client against a mock backend

#![allow(clippy::unwrap_used)]

mod common;

use common::*;
use delivery_admin_core::Error;
use delivery_admin_core::types::{ActivationStatus, StatusChange};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_backend_error_message_is_kept() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "Banco indisponível"})),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let err = backend
        .client
        .list::<delivery_admin_core::Order>("/orders")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        Error::Status {
            endpoint: "/orders".to_string(),
            status: 500,
            message: Some("Banco indisponível".to_string()),
        }
    );
    assert_eq!(err.user_message(), "Banco indisponível");
    assert!(err.is_remote());
}

#[tokio::test]
async fn test_status_without_body_uses_generic_message() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/dashboard"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&backend.server)
        .await;

    let err = backend.client.dashboard().await.unwrap_err();

    assert!(matches!(err, Error::Status { status: 503, message: None, .. }));
    assert_eq!(err.user_message(), "O servidor respondeu com erro (503).");
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/dashboard/weekly"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&backend.server)
        .await;

    let err = backend.client.dashboard_weekly().await.unwrap_err();

    assert!(matches!(err, Error::Decode { ref endpoint, .. } if endpoint == "/dashboard/weekly"));
}

#[tokio::test]
async fn test_lenient_decoding_of_listed_records() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(orders_json()))
        .mount(&backend.server)
        .await;

    let orders = backend
        .client
        .list::<delivery_admin_core::Order>("/orders")
        .await
        .unwrap();

    let summary: Vec<_> = orders
        .iter()
        .map(|o| (o.id.as_str(), o.value, o.status.code()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("1001", Some(89.9), "entregue"),
            ("1002", Some(156.5), "pendente"),
        ]
    );
}

#[tokio::test]
async fn test_dashboard_metrics() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dashboard_json()))
        .mount(&backend.server)
        .await;

    let metrics = backend.client.dashboard().await.unwrap();

    assert_eq!(metrics.orders_today, Some(1847.0));
    assert_eq!(metrics.revenue_percent, Some(-3.1));
}

#[tokio::test]
async fn test_status_toggle_sends_patch() {
    let backend = TestBackend::start().await;
    Mock::given(method("PATCH"))
        .and(path("/users/12/status"))
        .and(body_json(json!({"status": "banned"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Usuário banido"})),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let ack = backend
        .client
        .set_user_status(
            12,
            StatusChange {
                status: ActivationStatus::Banned,
            },
        )
        .await
        .unwrap();

    assert_eq!(ack.message.as_deref(), Some("Usuário banido"));
}

#[tokio::test]
async fn test_empty_acknowledgement_is_success() {
    let backend = TestBackend::start().await;
    Mock::given(method("DELETE"))
        .and(path("/notifications/9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&backend.server)
        .await;

    backend.client.delete_notification(9).await.unwrap();
}

#[tokio::test]
async fn test_unreachable_backend_is_a_transport_error() {
    init_test_logging();
    let config = TestConfigBuilder::new()
        .with_base_url("http://127.0.0.1:9")
        .with_timeout_secs(2)
        .build();
    let client = delivery_admin_web::api_client::ApiClient::from_config(&config);

    let err = client.dashboard().await.unwrap_err();

    assert!(matches!(err, Error::Transport { .. }));
    assert_eq!(
        err.user_message(),
        "Não foi possível conectar ao servidor. Tente novamente."
    );
}
