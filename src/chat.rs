// ABOUTME: Health chat service grounding LLM conversations in today's wearable metrics
// ABOUTME: Validates messages, builds the health-context system prompt, and reports availability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::errors::{AppError, AppResult};
use crate::llm::prompts::build_chat_system_prompt;
use crate::llm::{ChatMessage, ChatRequest, MessageRole};
use crate::resources::ServerResources;

/// Sampling temperature for chat replies
pub const CHAT_TEMPERATURE: f32 = 0.7;

/// Completion budget for chat replies
pub const CHAT_MAX_TOKENS: u32 = 1000;

/// Reply used when the provider returns no text
pub const EMPTY_REPLY: &str = "Sorry, I could not generate a response.";

/// Error message when no generative text credential is configured
pub const NOT_CONFIGURED_MESSAGE: &str =
    "No AI API key configured. Please set OPENAI_API_KEY or GEMINI_API_KEY.";

/// Chat availability as reported to the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatStatus {
    /// Whether a provider is configured
    pub available: bool,
    /// Provider identifier, `null` when unavailable
    pub provider: Option<String>,
}

/// Chat over the shared server resources
pub struct ChatService<'a> {
    resources: &'a ServerResources,
}

impl<'a> ChatService<'a> {
    /// Chat service backed by the given resources
    #[must_use]
    pub const fn new(resources: &'a ServerResources) -> Self {
        Self { resources }
    }

    /// Whether chat is available and through which provider
    #[must_use]
    pub fn status(&self) -> ChatStatus {
        let provider = self.resources.llm().map(|p| p.name().to_owned());
        ChatStatus {
            available: provider.is_some(),
            provider,
        }
    }

    /// Send one user message with prior history and return the assistant reply
    ///
    /// System entries in `history` are dropped; the server supplies its own.
    ///
    /// # Errors
    ///
    /// - `INVALID_INPUT` if `message` is empty or whitespace
    /// - `CONFIG_MISSING` if no LLM provider or no wearable source is configured
    /// - `EXTERNAL_*` if the metrics source or the LLM call fails
    #[instrument(skip_all, fields(message_len = message.len(), history_len = history.len()))]
    pub async fn send_message(&self, message: &str, history: &[ChatMessage]) -> AppResult<String> {
        if message.trim().is_empty() {
            return Err(AppError::invalid_input(
                "Message is required and must be a string",
            ));
        }

        let provider = self
            .resources
            .llm()
            .ok_or_else(|| AppError::config_missing(NOT_CONFIGURED_MESSAGE))?;

        info!(provider = provider.name(), "Processing chat message");

        let metrics = self.resources.wearable()?.get_today_summary().await?;
        let request = Self::build_request(build_chat_system_prompt(&metrics), message, history);

        let reply = provider.complete(&request).await?.content;
        if reply.trim().is_empty() {
            warn!(provider = provider.name(), "Empty chat completion");
            return Ok(EMPTY_REPLY.to_owned());
        }

        Ok(reply)
    }

    fn build_request(system_prompt: String, message: &str, history: &[ChatMessage]) -> ChatRequest {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatMessage::system(system_prompt));
        messages.extend(
            history
                .iter()
                .filter(|entry| entry.role != MessageRole::System)
                .cloned(),
        );
        messages.push(ChatMessage::user(message));

        ChatRequest::new(messages)
            .with_temperature(CHAT_TEMPERATURE)
            .with_max_tokens(CHAT_MAX_TOKENS)
    }
}
