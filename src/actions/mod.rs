// ABOUTME: Evidence-based health action generation through an external LLM
// ABOUTME: Builds the metrics prompt, calls the provider, and degrades to a fallback on any failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

//! # Action Generator
//!
//! [`ActionGenerator::generate`] never fails. Transport errors and unparseable
//! output are logged and replaced by a single "review your metrics" action, so
//! the dashboard always receives a renderable list.

/// Generator output parsing and normalization
pub mod parser;

use chrono::Utc;
use health_copilot_core::models::{Focus, HealthAction, MetricsSummary};
use tracing::{error, info, instrument};

pub use parser::{fallback_actions, parse_actions, ActionParseError};

use crate::llm::prompts::build_action_prompt;
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};

/// Sampling temperature for action generation
const ACTION_TEMPERATURE: f32 = 0.7;

/// Generates recommendations from one day's metrics
pub struct ActionGenerator<'a> {
    provider: &'a dyn LlmProvider,
}

impl<'a> ActionGenerator<'a> {
    /// Generate through the given provider
    #[must_use]
    pub const fn new(provider: &'a dyn LlmProvider) -> Self {
        Self { provider }
    }

    /// Ask the provider for actions, falling back on any failure
    #[instrument(skip(self, metrics), fields(provider = self.provider.name(), date = %metrics.date))]
    pub async fn generate(&self, metrics: &MetricsSummary, focus: Option<Focus>) -> Vec<HealthAction> {
        info!(focus = ?focus, "Generating health actions");

        let id_seed = Utc::now().timestamp_millis();
        let request = ChatRequest::new(vec![ChatMessage::user(build_action_prompt(
            metrics, focus,
        ))])
        .with_temperature(ACTION_TEMPERATURE);

        let text = match self.provider.complete(&request).await {
            Ok(response) => response.content,
            Err(e) => {
                error!(error = %e, "Failed to generate actions, using fallback");
                return fallback_actions(id_seed);
            }
        };

        match parse_actions(&text, id_seed) {
            Ok(actions) => {
                info!(count = actions.len(), "Generated health actions");
                actions
            }
            Err(e) => {
                error!(error = %e, "Failed to parse actions response, using fallback");
                fallback_actions(id_seed)
            }
        }
    }
}
