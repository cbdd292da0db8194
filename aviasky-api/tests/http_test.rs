use aviasky_api::{app, TravelHandler};
use aviasky_core::ServiceConfig;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;

fn router() -> axum::Router {
    app(Arc::new(TravelHandler::new(ServiceConfig::default())))
}

#[tokio::test]
async fn test_get_cities_over_http() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/?action=cities&q=%D0%BC%D0%BE%D1%81%D0%BA%D0%B2%D0%B0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/json");
    assert_eq!(response.headers()["access-control-allow-origin"], "*");

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let cities = body["cities"].as_array().unwrap();
    assert!(!cities.is_empty());
    assert!(cities.iter().all(|c| c["name"].as_str().unwrap().contains("Москва")));
}

#[tokio::test]
async fn test_options_over_http() {
    let response = router()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/any/path")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-max-age"], "86400");
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_delete_over_http() {
    let response = router()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_action_over_http() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/?action=nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
