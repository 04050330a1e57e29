// ABOUTME: Unified LLM provider selector built from the startup configuration
// ABOUTME: Wraps the OpenAI and Gemini providers behind a single LlmProvider implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

//! # LLM Provider Selector
//!
//! [`ChatProvider::from_selection`] turns the [`LlmSelection`] resolved at startup
//! into a concrete provider. It is never re-evaluated per request.
//!
//! ```rust,no_run
//! use health_copilot::config::LlmSelection;
//! use health_copilot::llm::{ChatMessage, ChatProvider, ChatRequest, LlmProvider};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! if let Some(provider) = ChatProvider::from_selection(&LlmSelection::from_env()?)? {
//!     let request = ChatRequest::new(vec![ChatMessage::user("Hello!")]);
//!     let response = provider.complete(&request).await?;
//!     println!("{}", response.content);
//! }
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use tracing::info;

use super::{ChatRequest, ChatResponse, GeminiProvider, LlmProvider, OpenAiProvider};
use crate::config::{LlmProviderType, LlmSelection};
use crate::errors::AppError;

/// Configured chat provider
#[derive(Debug)]
pub enum ChatProvider {
    /// `OpenAI` chat completions
    OpenAi(OpenAiProvider),
    /// Google Gemini
    Gemini(GeminiProvider),
}

impl ChatProvider {
    /// Build the provider for a startup selection, `None` when unconfigured
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client for the selected provider cannot be created.
    pub fn from_selection(selection: &LlmSelection) -> Result<Option<Self>, AppError> {
        let provider = match selection {
            LlmSelection::OpenAi(settings) => Self::OpenAi(OpenAiProvider::from_settings(settings)?),
            LlmSelection::Gemini(settings) => Self::Gemini(GeminiProvider::from_settings(settings)?),
            LlmSelection::Unconfigured => return Ok(None),
        };

        info!(
            "Initialized LLM provider: {} (model {}, set {} to change)",
            provider.display_name(),
            provider.default_model(),
            LlmProviderType::ENV_VAR
        );

        Ok(Some(provider))
    }

    fn inner(&self) -> &dyn LlmProvider {
        match self {
            Self::OpenAi(provider) => provider,
            Self::Gemini(provider) => provider,
        }
    }
}

#[async_trait]
impl LlmProvider for ChatProvider {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn display_name(&self) -> &'static str {
        self.inner().display_name()
    }

    fn default_model(&self) -> &str {
        self.inner().default_model()
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.inner().complete(request).await
    }
}
