// ABOUTME: HTTP integration tests for the classifier and suitability page routes
// ABOUTME: Drives the full middleware stack with oneshot requests against an in-memory source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! The router is built with `build_router`, so request IDs, CORS and
//! tracing are exercised alongside the handlers.

mod common;
mod helpers;

use axum::http::StatusCode;
use axum::Router;
use helpers::axum_test::AxumTestRequest;
use helpers::mock_source::{AnalysisBehavior, InMemorySource};
use nutricheck::config::ServerConfig;
use nutricheck::routes::{build_router, AppState};
use nutricheck::services::SuitabilityService;
use serde_json::{json, Value};
use std::sync::Arc;

fn app_with(source: InMemorySource, config: &ServerConfig) -> Router {
    common::init_test_logging();
    let service = SuitabilityService::new(Arc::new(source));
    build_router(Arc::new(AppState::new(service)), config)
}

fn app() -> Router {
    app_with(InMemorySource::new(), &ServerConfig::default())
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_and_ready() {
    let body: Value = AxumTestRequest::get("/health")
        .send(app())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "nutricheck");
    assert!(body["timestamp"].is_string());

    let body: Value = AxumTestRequest::get("/ready")
        .send(app())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(body["status"], "ready");
}

// ============================================================================
// POST /api/suitability/classify
// ============================================================================

#[tokio::test]
async fn test_classify_direct_match() {
    let body: Value = AxumTestRequest::post("/api/suitability/classify")
        .json(&json!({
            "userAllergies": "peanut,milk",
            "productAllergens": "wheat, milk",
            "productIndirectAllergens": "peanut"
        }))
        .send(app())
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["verdict"], "unsuitable");
    assert_eq!(body["matchedDirect"], json!(["milk"]));
    assert_eq!(body["matchedIndirect"], json!(["peanut"]));
    assert_eq!(body["directNote"], "❌ This product contains milk.");
    assert!(body["indirectNote"].is_string());
}

#[tokio::test]
async fn test_classify_missing_and_null_fields_are_empty() {
    let body: Value = AxumTestRequest::post("/api/suitability/classify")
        .json(&json!({ "userAllergies": "soy", "productAllergens": null }))
        .send(app())
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["verdict"], "suitable");
    assert!(body["indirectNote"].is_null());
}

#[tokio::test]
async fn test_classify_korean_locale() {
    let body: Value = AxumTestRequest::post("/api/suitability/classify?locale=ko")
        .json(&json!({ "userAllergies": "egg", "productIndirectAllergens": "egg" }))
        .send(app())
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["verdict"], "caution");
    assert_eq!(body["directNote"], "✅ egg 성분이 함유되어 있지 않아요.");
}

#[tokio::test]
async fn test_classify_rejects_non_string_field() {
    let body: Value = AxumTestRequest::post("/api/suitability/classify")
        .json(&json!({ "userAllergies": "peanut", "productAllergens": ["peanut"] }))
        .send(app())
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();

    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert_eq!(body["error"]["details"]["field"], "productAllergens");
    assert!(body["error"]["request_id"].is_string());
}

#[tokio::test]
async fn test_classify_rejects_malformed_json() {
    let body: Value = AxumTestRequest::post("/api/suitability/classify")
        .raw_json("{\"userAllergies\": ")
        .send(app())
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

// ============================================================================
// GET /api/products/:id/suitability
// ============================================================================

#[tokio::test]
async fn test_page_requires_user_header() {
    let body: Value = AxumTestRequest::get("/api/products/1/suitability")
        .send(app())
        .await
        .assert_status(StatusCode::UNAUTHORIZED)
        .json();
    assert_eq!(body["error"]["code"], "AUTH_REQUIRED");

    AxumTestRequest::get("/api/products/1/suitability")
        .header("x-user-id", "   ")
        .send(app())
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_page_for_unsuitable_product() {
    let body: Value = AxumTestRequest::get("/api/products/3/suitability")
        .header("x-user-id", "u-1")
        .send(app())
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["assessment"]["userName"], "Kimmy");
    assert_eq!(body["assessment"]["verdictLabel"], "unsuitable");
    assert_eq!(body["assessment"]["report"]["verdict"], "unsuitable");
    assert_eq!(body["nutrition"]["productName"], "Peanut Bar");
    assert_eq!(body["nutrition"]["rows"].as_array().unwrap().len(), 9);
    assert!(body.get("analysis").is_none());
}

#[tokio::test]
async fn test_page_with_analysis_and_insights() {
    let body: Value = AxumTestRequest::get("/api/products/1/suitability?analyze=true&insights=true")
        .header("x-user-id", "u-1")
        .send(app())
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["analysis"]["available"], true);
    assert_eq!(body["recommendationHeading"], "also");
    assert_eq!(body["insights"]["conditions"], json!(["hypertension"]));
    assert_eq!(body["insights"]["alternatives"][0]["name"], "Mild Ramen");
}

#[tokio::test]
async fn test_page_analysis_outage_still_renders() {
    let router = app_with(
        InMemorySource::new().with_analysis(AnalysisBehavior::Unavailable),
        &ServerConfig::default(),
    );
    let body: Value = AxumTestRequest::get("/api/products/4/suitability?analyze=true")
        .header("x-user-id", "u-1")
        .send(router)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["assessment"]["report"]["verdict"], "caution");
    assert_eq!(body["analysis"]["available"], false);
    assert_eq!(body["recommendationHeading"], "empty");
}

#[tokio::test]
async fn test_page_unknown_product_is_404() {
    let body: Value = AxumTestRequest::get("/api/products/999/suitability")
        .header("x-user-id", "u-1")
        .send(app())
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_page_non_numeric_id_is_400() {
    let body: Value = AxumTestRequest::get("/api/products/abc/suitability")
        .header("x-user-id", "u-1")
        .send(app())
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_page_catalog_outage_is_502() {
    let router = app_with(InMemorySource::new().without_catalog(), &ServerConfig::default());
    let body: Value = AxumTestRequest::get("/api/products/1/suitability?insights=true")
        .header("x-user-id", "u-1")
        .send(router)
        .await
        .assert_status(StatusCode::BAD_GATEWAY)
        .json();
    assert_eq!(body["error"]["code"], "EXTERNAL_SERVICE_UNAVAILABLE");
}

// ============================================================================
// Middleware
// ============================================================================

#[tokio::test]
async fn test_request_id_is_echoed_and_tagged_on_errors() {
    let response = AxumTestRequest::get("/api/products/999/suitability")
        .header("x-user-id", "u-1")
        .header("x-request-id", "req-42")
        .send(app())
        .await;

    assert_eq!(response.header("x-request-id"), Some("req-42"));
    let body: Value = response.json();
    assert_eq!(body["error"]["request_id"], "req-42");
}

#[tokio::test]
async fn test_request_id_is_generated_when_absent() {
    let response = AxumTestRequest::get("/health").send(app()).await;
    let request_id = response.header("x-request-id").unwrap();
    assert!(!request_id.is_empty());
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let config = ServerConfig {
        cors_allowed_origins: "https://app.example.com".to_owned(),
        ..ServerConfig::default()
    };
    let response = AxumTestRequest::get("/health")
        .header("origin", "https://app.example.com")
        .send(app_with(InMemorySource::new(), &config))
        .await;
    assert_eq!(
        response.header("access-control-allow-origin"),
        Some("https://app.example.com")
    );

    let response = AxumTestRequest::get("/health")
        .header("origin", "https://evil.example.com")
        .send(app_with(InMemorySource::new(), &config))
        .await;
    assert_eq!(response.header("access-control-allow-origin"), None);
}
