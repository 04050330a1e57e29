// ABOUTME: Tests for environment-driven server configuration and LLM provider selection
// ABOUTME: Serialized because they mutate process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use health_copilot::config::{
    Environment, GeminiSettings, LlmProviderType, LlmSelection, OpenAiSettings, ServerConfig,
};
use serial_test::serial;

const MANAGED_VARS: &[&str] = &[
    "PORT",
    "HTTP_PORT",
    "HOST",
    "ENVIRONMENT",
    "CORS_ALLOWED_ORIGINS",
    "ULTRAHUMAN_AUTH_TOKEN",
    "ULTRAHUMAN_USER_EMAIL",
    "OPENAI_API_KEY",
    "OPENAI_MODEL",
    "OPENAI_BASE_URL",
    "GEMINI_API_KEY",
    "GEMINI_MODEL",
    "GEMINI_BASE_URL",
    "HEALTH_COPILOT_LLM_PROVIDER",
];

fn clear_env() {
    for key in MANAGED_VARS {
        env::remove_var(key);
    }
}

fn openai() -> OpenAiSettings {
    OpenAiSettings {
        api_key: "sk-test".to_owned(),
        model: None,
        base_url: None,
    }
}

fn gemini() -> GeminiSettings {
    GeminiSettings {
        api_key: "gm-test".to_owned(),
        model: None,
        base_url: None,
    }
}

// ============================================================================
// ServerConfig::from_env
// ============================================================================

#[test]
#[serial]
fn test_defaults_without_any_variables() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 4000);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.cors.allowed_origins, "*");
    assert!(config.wearable.is_err());
    assert_eq!(config.llm, LlmSelection::Unconfigured);
}

#[test]
#[serial]
fn test_port_prefers_port_over_http_port() {
    clear_env();
    env::set_var("PORT", "8080");
    env::set_var("HTTP_PORT", "9090");

    assert_eq!(ServerConfig::from_env().unwrap().http_port, 8080);

    env::remove_var("PORT");
    assert_eq!(ServerConfig::from_env().unwrap().http_port, 9090);

    clear_env();
}

#[test]
#[serial]
fn test_malformed_port_is_rejected() {
    clear_env();
    env::set_var("PORT", "not-a-port");

    let error = ServerConfig::from_env().unwrap_err();
    assert!(error.to_string().contains("PORT"));

    clear_env();
}

#[test]
#[serial]
fn test_wearable_credentials_require_both_variables() {
    clear_env();
    env::set_var("ULTRAHUMAN_AUTH_TOKEN", "token");

    assert!(ServerConfig::from_env().unwrap().wearable.is_err());

    env::set_var("ULTRAHUMAN_USER_EMAIL", "me@example.com");
    let credentials = ServerConfig::from_env().unwrap().wearable.unwrap();
    assert_eq!(credentials.user_email, "me@example.com");

    clear_env();
}

#[test]
#[serial]
fn test_openai_key_takes_precedence_over_gemini() {
    clear_env();
    env::set_var("OPENAI_API_KEY", "sk-env");
    env::set_var("GEMINI_API_KEY", "gm-env");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.llm.provider_type(), Some(LlmProviderType::OpenAi));

    clear_env();
}

#[test]
#[serial]
fn test_explicit_provider_selects_gemini() {
    clear_env();
    env::set_var("OPENAI_API_KEY", "sk-env");
    env::set_var("GEMINI_API_KEY", "gm-env");
    env::set_var("GEMINI_MODEL", "gemini-1.5-pro");
    env::set_var("GEMINI_BASE_URL", "http://127.0.0.1:8089/v1beta");
    env::set_var("HEALTH_COPILOT_LLM_PROVIDER", "Gemini");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(
        config.llm,
        LlmSelection::Gemini(GeminiSettings {
            api_key: "gm-env".to_owned(),
            model: Some("gemini-1.5-pro".to_owned()),
            base_url: Some("http://127.0.0.1:8089/v1beta".to_owned()),
        })
    );

    clear_env();
}

#[test]
#[serial]
fn test_unknown_explicit_provider_is_rejected() {
    clear_env();
    env::set_var("HEALTH_COPILOT_LLM_PROVIDER", "claude");

    let error = ServerConfig::from_env().unwrap_err();
    assert!(error.to_string().contains("HEALTH_COPILOT_LLM_PROVIDER"));

    clear_env();
}

#[test]
#[serial]
fn test_blank_keys_count_as_missing() {
    clear_env();
    env::set_var("OPENAI_API_KEY", "   ");

    assert_eq!(
        ServerConfig::from_env().unwrap().llm,
        LlmSelection::Unconfigured
    );

    clear_env();
}

#[test]
#[serial]
fn test_summary_never_contains_secrets() {
    clear_env();
    env::set_var("OPENAI_API_KEY", "sk-very-secret");
    env::set_var("ULTRAHUMAN_AUTH_TOKEN", "uh-very-secret");
    env::set_var("ULTRAHUMAN_USER_EMAIL", "me@example.com");

    let config = ServerConfig::from_env().unwrap();
    let summary = config.summary();
    let debug = format!("{config:?}");

    assert!(summary.contains("openai"));
    for rendered in [summary, debug] {
        assert!(!rendered.contains("sk-very-secret"));
        assert!(!rendered.contains("uh-very-secret"));
    }

    clear_env();
}

// ============================================================================
// LlmSelection::resolve
// ============================================================================

#[test]
fn test_resolve_explicit_choice_without_key_is_unconfigured() {
    assert_eq!(
        LlmSelection::resolve(Some(LlmProviderType::Gemini), Some(openai()), None),
        LlmSelection::Unconfigured
    );
}

#[test]
fn test_resolve_falls_back_to_gemini() {
    assert_eq!(
        LlmSelection::resolve(None, None, Some(gemini())),
        LlmSelection::Gemini(gemini())
    );
    assert_eq!(
        LlmSelection::resolve(None, Some(openai()), Some(gemini())),
        LlmSelection::OpenAi(openai())
    );
}

#[test]
fn test_provider_type_parsing() {
    assert_eq!(LlmProviderType::parse("OpenAI"), Some(LlmProviderType::OpenAi));
    assert_eq!(LlmProviderType::parse("google"), Some(LlmProviderType::Gemini));
    assert_eq!(LlmProviderType::parse("claude"), None);
}
