// ABOUTME: Deterministic fixtures for route and service tests
// ABOUTME: Scripted LLM provider, pinned-date wearable source, and resource builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

use std::env;
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use chrono::NaiveDate;
use health_copilot::config::{CorsConfig, Environment, LlmSelection, ServerConfig};
use health_copilot::errors::{AppError, ErrorCode, ProviderError};
use health_copilot::llm::{ChatRequest, ChatResponse, LlmProvider};
use health_copilot::resources::ServerResources;
use health_copilot::server::build_router;
use health_copilot_providers::{
    SyntheticWearableProvider, WearableCredentials, WearableProvider,
};

static INIT_LOGGING: Once = Once::new();

/// Quiet tracing output for tests; `TEST_LOG=debug` turns it up
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let level = env::var("TEST_LOG").unwrap_or_else(|_| "warn".to_owned());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(level)
            .with_test_writer()
            .try_init();
    });
}

/// Date every fixture treats as "today"
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).expect("valid date")
}

/// LLM provider that returns a scripted reply and records every request
pub struct StubLlm {
    reply: Result<String, ErrorCode>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl StubLlm {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_owned()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(code: ErrorCode) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(code),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for StubLlm {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn display_name(&self) -> &'static str {
        "Stub LLM"
    }

    fn default_model(&self) -> &str {
        "stub-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(content) => Ok(ChatResponse {
                content: content.clone(),
                model: "stub-model".to_owned(),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            Err(code) => Err(AppError::new(*code, "scripted failure")),
        }
    }
}

/// Erase a stub to the provider trait object the resources hold
pub fn as_llm(stub: &Arc<StubLlm>) -> Option<Arc<dyn LlmProvider>> {
    Some(Arc::clone(stub) as Arc<dyn LlmProvider>)
}

pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        host: "127.0.0.1".to_owned(),
        environment: Environment::Testing,
        cors: CorsConfig::default(),
        wearable: Ok(test_credentials()),
        llm: LlmSelection::Unconfigured,
    }
}

pub fn test_credentials() -> WearableCredentials {
    WearableCredentials::new("test-token", "athlete@example.com")
}

pub fn pinned_wearable() -> Arc<dyn WearableProvider> {
    Arc::new(SyntheticWearableProvider::new(test_credentials()).with_today(fixed_today()))
}

pub fn missing_wearable() -> Result<Arc<dyn WearableProvider>, ProviderError> {
    Err(ProviderError::ConfigurationError {
        provider: "ultrahuman".to_owned(),
        details: "ULTRAHUMAN_AUTH_TOKEN and ULTRAHUMAN_USER_EMAIL must be set".to_owned(),
    })
}

/// Resources with a pinned wearable and the given LLM
pub fn resources_with_llm(llm: Option<Arc<dyn LlmProvider>>) -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::with_providers(
        test_config(),
        Ok(pinned_wearable()),
        llm,
    ))
}

/// Resources without wearable credentials
pub fn resources_without_wearable(llm: Option<Arc<dyn LlmProvider>>) -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::with_providers(
        test_config(),
        missing_wearable(),
        llm,
    ))
}

/// Full application router over the given resources
pub fn app(resources: Arc<ServerResources>) -> axum::Router {
    build_router(resources)
}
