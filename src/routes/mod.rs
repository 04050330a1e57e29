// ABOUTME: Route module organization for the Health Copilot HTTP API
// ABOUTME: Domain route groups plus request body decoding shared by POST handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

//! Route module for the Health Copilot server
//!
//! Each submodule exposes a `*Routes` struct whose `routes` function returns an
//! axum `Router` for its domain:
//!
//! - `health`: liveness probe
//! - `dashboard`: overview, actions, and history
//! - `chat`: conversational assistant

/// Conversational assistant routes
pub mod chat;
/// Dashboard data routes
pub mod dashboard;
/// Liveness probe
pub mod health;

pub use chat::ChatRoutes;
pub use dashboard::DashboardRoutes;
pub use health::HealthRoutes;

use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::errors::{AppError, AppResult};

/// Decode a JSON request body, treating an empty body as the default value
///
/// Bodies are decoded leniently with respect to `Content-Type` so that browser
/// clients posting plain text still reach validation.
///
/// # Errors
///
/// Returns `INVALID_INPUT` if the body is present but not valid JSON for `T`.
pub fn parse_json_body<T>(body: &Bytes) -> AppResult<T>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::invalid_input(format!("Invalid JSON body: {e}")))
}
