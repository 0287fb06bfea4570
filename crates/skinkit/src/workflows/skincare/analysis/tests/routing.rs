use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::skincare::analysis::router::analyze_handler;
use crate::workflows::skincare::analysis::SkinAnalysisService;
use crate::workflows::skincare::assessment::RawSignal;
use crate::workflows::skincare::catalog::ProductCatalog;
use crate::workflows::skincare::recommendation::RecommendationConfig;

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("serialize body")))
        .expect("request builds")
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request builds")
}

#[tokio::test]
async fn analyze_route_returns_created_assessment() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post_json(
            "/api/v1/analysis",
            &json!({ "beautyScore": 50.0, "age": 25 }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(body["skinScore"], 65);
    assert_eq!(body["assessment"]["concerns"], json!(["hydration"]));
    assert_eq!(body["assessment"]["pores"]["level"], "mild");
    assert!(body["analysisId"]
        .as_str()
        .expect("id is a string")
        .starts_with("analysis-"));
}

#[tokio::test]
async fn analyze_handler_rejects_out_of_range_scores() {
    let (service, _) = build_service();

    let response = analyze_handler(State(Arc::new(service)), axum::Json(RawSignal::new(-3.0, 30)))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn face_route_rejects_payload_without_faces() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post_json("/api/v1/analysis/face", &json!({ "faces": [] })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "face-analysis response contained no faces");
}

#[tokio::test]
async fn stored_analysis_serves_kit_and_recommendations() {
    let (service, _) = build_service();
    let record = service
        .analyze_face_response(&face_payload("Female", 55.0, 40.0, 55))
        .expect("analysis succeeds");
    let router = router_with_service(service);
    let id = record.analysis_id.0;

    let response = router
        .clone()
        .oneshot(get(&format!("/api/v1/analysis/{id}")))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["priorityConcerns"][0], "dark-circles");

    let response = router
        .clone()
        .oneshot(get(&format!("/api/v1/analysis/{id}/recommendations")))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body.as_array().expect("list").len(), 6);

    let response = router
        .oneshot(get(&format!("/api/v1/analysis/{id}/kit")))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let total = body["totalPrice"].as_f64().expect("total");
    let savings = body["savings"].as_f64().expect("savings");
    let bundle = body["bundlePrice"].as_f64().expect("bundle");
    assert_eq!(bundle, total - savings);
    assert_eq!(body["morningRoutine"][0]["step"], 1);
    assert_eq!(body["morningRoutine"][0]["timeOfDay"], "morning");
}

#[tokio::test]
async fn missing_analysis_returns_not_found() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(get("/api/v1/analysis/analysis-nope/kit"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn recommendations_route_accepts_concern_tags() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post_json(
            "/api/v1/recommendations",
            &json!({ "concerns": ["dark-circles"], "limit": 3 }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let ids: Vec<&str> = body
        .as_array()
        .expect("list")
        .iter()
        .filter_map(|product| product["id"].as_str())
        .collect();
    assert_eq!(
        ids,
        vec!["caffeine-eye-cream", "vitamin-c-serum", "mineral-spf50-sunscreen"]
    );
}

#[tokio::test]
async fn store_outage_maps_to_internal_error() {
    let service = SkinAnalysisService::new(
        Arc::new(UnavailableStore),
        Arc::new(ProductCatalog::standard()),
        RecommendationConfig::default(),
    );
    let router = crate::workflows::skincare::analysis::analysis_router(Arc::new(service));

    let response = router
        .oneshot(get("/api/v1/analysis/analysis-1"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
