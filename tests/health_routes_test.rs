// ABOUTME: HTTP integration tests for the liveness probe, fallback, and CORS layer
// ABOUTME: Drives the fully assembled router without binding a socket
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::http::Method;
use helpers::axum_test::AxumTestRequest;
use helpers::fixtures::{app, resources_with_llm, resources_without_wearable};
use serde_json::Value;

// ============================================================================
// GET /health
// ============================================================================

#[tokio::test]
async fn test_health_endpoint_reports_ok() {
    let response = AxumTestRequest::get("/health")
        .send(app(resources_with_llm(None)))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_health_endpoint_does_not_need_credentials() {
    let response = AxumTestRequest::get("/health")
        .send(app(resources_without_wearable(None)))
        .await;

    assert_eq!(response.status(), 200);
}

// ============================================================================
// Fallback
// ============================================================================

#[tokio::test]
async fn test_unknown_route_returns_json_not_found() {
    let response = AxumTestRequest::get("/api/unknown")
        .send(app(resources_with_llm(None)))
        .await;

    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"], "Not found");
    assert_eq!(body["message"], "Route GET /api/unknown not found");
}

#[tokio::test]
async fn test_not_found_message_ignores_query_string() {
    let response = AxumTestRequest::method(Method::DELETE, "/nothing/here?x=1")
        .send(app(resources_with_llm(None)))
        .await;

    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["message"], "Route DELETE /nothing/here not found");
}

// ============================================================================
// CORS
// ============================================================================

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let response = AxumTestRequest::get("/health")
        .header("origin", "http://localhost:3000")
        .send(app(resources_with_llm(None)))
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
}
