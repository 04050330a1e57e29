// ABOUTME: HTTP integration tests for the dashboard overview, actions, and history endpoints
// ABOUTME: Uses a pinned-date synthetic wearable and a scripted LLM for reproducible payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use health_copilot::errors::ErrorCode;
use health_copilot::llm::MessageRole;
use helpers::axum_test::AxumTestRequest;
use helpers::fixtures::{
    app, as_llm, resources_with_llm, resources_without_wearable, StubLlm,
};
use serde_json::{json, Value};

const TWO_ACTIONS: &str = r#"Here are your recommendations:
```json
[
  {
    "category": "sleep",
    "title": "Wind down earlier",
    "description": "Start your bedtime routine 30 minutes earlier tonight.",
    "evidenceSummary": "Consistent sleep timing improves sleep quality.",
    "evidenceSources": ["Sleep Foundation"],
    "priority": "high",
    "timeHorizon": "today"
  },
  {
    "category": "hydration",
    "title": "",
    "priority": "urgent"
  }
]
```"#;

fn dates(series: &Value) -> Vec<String> {
    series
        .as_array()
        .unwrap()
        .iter()
        .map(|point| point["date"].as_str().unwrap().to_owned())
        .collect()
}

// ============================================================================
// GET /api/health/overview
// ============================================================================

#[tokio::test]
async fn test_overview_returns_trends_and_recovery() {
    let response = AxumTestRequest::get("/api/health/overview")
        .send(app(resources_with_llm(None)))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();

    assert_eq!(body["today"]["date"], "2025-03-15");

    let sleep_7 = dates(&body["trends"]["sleep7Day"]);
    let sleep_30 = dates(&body["trends"]["sleep30Day"]);
    assert_eq!(sleep_7.len(), 7);
    assert_eq!(sleep_30.len(), 30);
    assert_eq!(sleep_7.first().unwrap(), "2025-03-09");
    assert_eq!(sleep_7.last().unwrap(), "2025-03-15");
    assert_eq!(sleep_30.first().unwrap(), "2025-02-14");
    assert_eq!(&sleep_30[23..], &sleep_7[..]);

    for key in ["hrv7Day", "hrv30Day", "rhr7Day", "rhr30Day"] {
        assert!(body["trends"][key].is_array(), "missing trend {key}");
    }
}

#[tokio::test]
async fn test_overview_replaces_readiness_with_composite_score() {
    let response = AxumTestRequest::get("/api/health/overview")
        .send(app(resources_with_llm(None)))
        .await;
    let body: Value = response.json();

    let score = body["recovery"]["score"].as_u64().unwrap();
    assert!(score <= 100);
    assert_eq!(body["today"]["recovery"]["readinessScore"].as_u64().unwrap(), score);

    let expected_band = match score {
        80..=100 => "green",
        60..=79 => "amber",
        _ => "red",
    };
    assert_eq!(body["recovery"]["band"], expected_band);
}

#[tokio::test]
async fn test_overview_baseline_is_seven_day_hrv_mean() {
    let response = AxumTestRequest::get("/api/health/overview")
        .send(app(resources_with_llm(None)))
        .await;
    let body: Value = response.json();

    let hrv: Vec<f64> = body["trends"]["hrv7Day"]
        .as_array()
        .unwrap()
        .iter()
        .map(|point| point["value"].as_f64().unwrap())
        .collect();
    let mean = hrv.iter().sum::<f64>() / hrv.len() as f64;

    let avg_hrv = body["recovery"]["baseline"]["avgHrv"].as_f64().unwrap();
    assert!((avg_hrv - mean).abs() < 1e-9);
    assert_eq!(
        body["recovery"]["baseline"]["avgRhr"].as_f64().unwrap(),
        body["today"]["recovery"]["restingHeartRate"].as_f64().unwrap()
    );
}

#[tokio::test]
async fn test_overview_without_wearable_credentials_is_unavailable() {
    let response = AxumTestRequest::get("/api/health/overview")
        .send(app(resources_without_wearable(None)))
        .await;

    assert_eq!(response.status(), 503);
    let body: Value = response.json();
    assert_eq!(body["code"], "CONFIG_MISSING");
    assert!(body["message"].as_str().unwrap().contains("not configured"));
}

// ============================================================================
// GET /api/health/history
// ============================================================================

#[tokio::test]
async fn test_history_defaults_to_thirty_days() {
    let response = AxumTestRequest::get("/api/health/history")
        .send(app(resources_with_llm(None)))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["sleep"].as_array().unwrap().len(), 30);
    assert_eq!(body["hrv"].as_array().unwrap().len(), 30);
    assert_eq!(body["activity"].as_array().unwrap().len(), 30);
}

#[tokio::test]
async fn test_history_honours_days_parameter() {
    let response = AxumTestRequest::get("/api/health/history?days=5")
        .send(app(resources_with_llm(None)))
        .await;
    let body: Value = response.json();

    assert_eq!(
        dates(&body["activity"]),
        vec!["2025-03-11", "2025-03-12", "2025-03-13", "2025-03-14", "2025-03-15"]
    );
}

#[tokio::test]
async fn test_history_activity_series_carries_step_counts() {
    let response = AxumTestRequest::get("/api/health/history?days=1")
        .send(app(resources_with_llm(None)))
        .await;
    let body: Value = response.json();

    let steps = body["activity"][0]["value"].as_f64().unwrap();
    assert!((4_000.0..=15_000.0).contains(&steps));
}

#[tokio::test]
async fn test_history_invalid_days_falls_back_to_default() {
    for query in ["days=abc", "days=0", "days=-3"] {
        let response = AxumTestRequest::get(&format!("/api/health/history?{query}"))
            .send(app(resources_with_llm(None)))
            .await;

        assert_eq!(response.status(), 200, "query {query}");
        let body: Value = response.json();
        assert_eq!(body["sleep"].as_array().unwrap().len(), 30, "query {query}");
    }
}

// ============================================================================
// POST /api/health/actions
// ============================================================================

#[tokio::test]
async fn test_actions_are_parsed_and_normalized() {
    let stub = StubLlm::replying(TWO_ACTIONS);
    let response = AxumTestRequest::post("/api/health/actions")
        .json(&json!({}))
        .send(app(resources_with_llm(as_llm(&stub))))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();

    let actions = body["actions"].as_array().unwrap();
    assert_eq!(actions.len(), 2);

    assert_eq!(actions[0]["category"], "sleep");
    assert_eq!(actions[0]["priority"], "high");
    assert_eq!(actions[0]["evidenceSources"], json!(["Sleep Foundation"]));

    assert_eq!(actions[1]["category"], "general");
    assert_eq!(actions[1]["priority"], "medium");
    assert_eq!(actions[1]["timeHorizon"], "this_week");
    assert_eq!(actions[1]["title"], "Health Recommendation");
    assert_eq!(actions[1]["evidenceSources"], json!([]));

    assert_ne!(actions[0]["id"], actions[1]["id"]);
    assert_eq!(body["metrics"]["date"], "2025-03-15");
    assert!(body["generatedAt"].is_string());
}

#[tokio::test]
async fn test_actions_focus_is_passed_to_prompt() {
    let stub = StubLlm::replying("[]");
    let response = AxumTestRequest::post("/api/health/actions")
        .json(&json!({ "focus": "sleep" }))
        .send(app(resources_with_llm(as_llm(&stub))))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["actions"], json!([]));

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].messages.len(), 1);
    assert_eq!(requests[0].messages[0].role, MessageRole::User);
    assert!(requests[0].messages[0]
        .content
        .contains("actionable recommendations with a focus on sleep."));
}

#[tokio::test]
async fn test_actions_accepts_empty_body() {
    let stub = StubLlm::replying("[]");
    let response = AxumTestRequest::post("/api/health/actions")
        .send(app(resources_with_llm(as_llm(&stub))))
        .await;

    assert_eq!(response.status(), 200);
    assert!(!stub.requests()[0].messages[0].content.contains("with a focus on"));
}

#[tokio::test]
async fn test_actions_unknown_focus_is_rejected() {
    let stub = StubLlm::replying("[]");
    let response = AxumTestRequest::post("/api/health/actions")
        .json(&json!({ "focus": "astrology" }))
        .send(app(resources_with_llm(as_llm(&stub))))
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn test_actions_malformed_body_is_rejected() {
    let stub = StubLlm::replying("[]");
    let response = AxumTestRequest::post("/api/health/actions")
        .raw_body("{not json")
        .send(app(resources_with_llm(as_llm(&stub))))
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_actions_provider_failure_yields_fallback() {
    let stub = StubLlm::failing(ErrorCode::ExternalRateLimited);
    let response = AxumTestRequest::post("/api/health/actions")
        .json(&json!({}))
        .send(app(resources_with_llm(as_llm(&stub))))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    let actions = body["actions"].as_array().unwrap();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0]["title"], "Review your health metrics");
    assert_eq!(actions[0]["category"], "general");
    assert_eq!(actions[0]["priority"], "medium");
}

#[tokio::test]
async fn test_actions_without_llm_is_unavailable() {
    let response = AxumTestRequest::post("/api/health/actions")
        .json(&json!({}))
        .send(app(resources_with_llm(None)))
        .await;

    assert_eq!(response.status(), 503);
    let body: Value = response.json();
    assert_eq!(body["code"], "CONFIG_MISSING");
    assert!(body["message"].as_str().unwrap().contains("OPENAI_API_KEY"));
}
