//! Integration tests for list screens: fetch then search and filter

#![allow(clippy::unwrap_used)]

mod common;

use common::*;
use delivery_admin_core::{Order, Restaurant};
use delivery_admin_web::filter::{ListQuery, StatusFilter, apply};
use delivery_admin_web::pages::resource_screen::{Resource, fetch};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_restaurant_status_filter_after_fetch() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/restaurants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(restaurants_json()))
        .expect(1)
        .mount(&backend.server)
        .await;

    let records = fetch::<Restaurant>(&backend.client).await.unwrap();
    assert_eq!(records.len(), 2);

    let active = ListQuery {
        search: String::new(),
        status: StatusFilter::from_selection("active", Restaurant::status_options()),
    };
    let ids: Vec<_> = apply(&records, &active).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1]);

    let by_city = ListQuery {
        search: "curitiba".to_string(),
        status: StatusFilter::All,
    };
    let ids: Vec<_> = apply(&records, &by_city).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2]);
}

#[tokio::test]
async fn test_order_search_and_table() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(orders_json()))
        .mount(&backend.server)
        .await;

    let records = fetch::<Order>(&backend.client).await.unwrap();
    let query = ListQuery {
        search: "sushi".to_string(),
        status: StatusFilter::from_selection("pendente", Order::status_options()),
    };
    let visible = apply(&records, &query);

    let table = Order::data_view().project(&visible).unwrap();
    let first: Vec<_> = table
        .rows
        .first()
        .map(|row| row.cells.iter().map(ToString::to_string).collect())
        .unwrap_or_default();
    assert_eq!(first.first().map(String::as_str), Some("#1002"));
    assert!(first.iter().any(|cell| cell == "R$ 156,50"));
}

#[tokio::test]
async fn test_failed_fetch_surfaces_backend_message() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/restaurants"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"error": "Erro ao buscar restaurantes"})),
        )
        .mount(&backend.server)
        .await;

    let err = fetch::<Restaurant>(&backend.client).await.unwrap_err();
    assert_eq!(err.user_message(), "Erro ao buscar restaurantes");
}

#[tokio::test]
async fn test_fixture_screens_never_hit_the_backend() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&backend.server)
        .await;

    let ads = fetch::<delivery_admin_core::Ad>(&backend.client).await.unwrap();
    assert_eq!(ads.len(), 3);
}
