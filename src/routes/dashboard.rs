// ABOUTME: Dashboard route handlers for health overview, action generation, and history
// ABOUTME: Thin HTTP layer that decodes parameters and delegates to the dashboard service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

//! Dashboard routes
//!
//! - `GET  /api/health/overview`: today's metrics, trends, and recovery score
//! - `POST /api/health/actions`: generated recommendations, optional `focus`
//! - `GET  /api/health/history?days=N`: chart series

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use super::parse_json_body;
use crate::constants::endpoints;
use crate::dashboard::{history_days, parse_focus, DashboardService};
use crate::errors::AppError;
use crate::resources::ServerResources;

/// Body of `POST /api/health/actions`
#[derive(Debug, Default, Deserialize)]
pub struct GenerateActionsRequest {
    /// Optional focus area
    #[serde(default)]
    pub focus: Option<String>,
}

/// Query of `GET /api/health/history`
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    /// Window length in days, kept as text so bad values fall back instead of rejecting
    pub days: Option<String>,
}

/// Dashboard routes implementation
pub struct DashboardRoutes;

impl DashboardRoutes {
    /// Create all dashboard routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::HEALTH_OVERVIEW, get(Self::handle_overview))
            .route(endpoints::HEALTH_ACTIONS, post(Self::handle_actions))
            .route(endpoints::HEALTH_HISTORY, get(Self::handle_history))
            .with_state(resources)
    }

    async fn handle_overview(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let overview = DashboardService::new(&resources).overview().await?;
        Ok((StatusCode::OK, Json(overview)).into_response())
    }

    async fn handle_actions(
        State(resources): State<Arc<ServerResources>>,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let request: GenerateActionsRequest = parse_json_body(&body)?;
        let focus = parse_focus(request.focus.as_deref())?;

        let response = DashboardService::new(&resources)
            .generate_actions(focus)
            .await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    async fn handle_history(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<HistoryQuery>,
    ) -> Result<Response, AppError> {
        let days = history_days(params.days.as_deref());
        let history = DashboardService::new(&resources).history(days).await?;
        Ok((StatusCode::OK, Json(history)).into_response())
    }
}
