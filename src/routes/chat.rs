// ABOUTME: Chat route handlers for the health-aware conversational assistant
// ABOUTME: Decodes message and history, delegates to the chat service, reports availability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::parse_json_body;
use crate::constants::endpoints;
use crate::chat::ChatService;
use crate::errors::AppError;
use crate::llm::ChatMessage;
use crate::resources::ServerResources;

/// Body of `POST /api/chat/message`
#[derive(Debug, Default, Deserialize)]
pub struct ChatMessageRequest {
    /// User message; any non-string value is rejected during validation
    #[serde(default)]
    pub message: Option<Value>,
    /// Prior turns, oldest first
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

/// Reply of `POST /api/chat/message`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessageResponse {
    /// Assistant reply
    pub message: String,
    /// ISO-8601 reply time
    pub timestamp: String,
}

/// Chat routes implementation
pub struct ChatRoutes;

impl ChatRoutes {
    /// Create all chat routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::CHAT_MESSAGE, post(Self::handle_message))
            .route(endpoints::CHAT_STATUS, get(Self::handle_status))
            .with_state(resources)
    }

    async fn handle_message(
        State(resources): State<Arc<ServerResources>>,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let request: ChatMessageRequest = parse_json_body(&body)?;
        let message = request
            .message
            .as_ref()
            .and_then(Value::as_str)
            .unwrap_or_default();

        let reply = ChatService::new(&resources)
            .send_message(message, &request.history)
            .await?;

        let response = ChatMessageResponse {
            message: reply,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    async fn handle_status(State(resources): State<Arc<ServerResources>>) -> Response {
        (StatusCode::OK, Json(ChatService::new(&resources).status())).into_response()
    }
}
