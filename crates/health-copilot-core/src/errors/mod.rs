// ABOUTME: Unified error handling with error codes, HTTP status mapping, and response bodies
// ABOUTME: Every handler-level failure is expressed as an AppError before reaching the client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

//! # Unified Error Handling System
//!
//! This module provides a centralized error handling system for the Health Copilot
//! backend. It defines standard error codes and the JSON body returned to the
//! dashboard so that no failure ever escapes a request handler as a crash.
//!
//! The taxonomy maps onto three families:
//!
//! - **Configuration** (`CONFIG_MISSING`): a feature is unavailable because
//!   credentials are absent. Reported as 503 so the UI can show "unavailable".
//! - **Upstream** (`EXTERNAL_*`): the wearable API or the LLM provider failed. Not retried.
//! - **Input** (`INVALID_INPUT`, `INVALID_BASELINE`): the request or scoring inputs are unusable.

/// Structured errors raised by wearable metrics providers
pub mod provider;

use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use provider::{ProviderError, ProviderResult};

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Request payload or query is invalid
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Scoring baseline cannot be used (zero or non-finite denominator)
    #[serde(rename = "INVALID_BASELINE")]
    InvalidBaseline = 3004,

    // External Services (5000-5999)
    /// External service returned malformed or unexpected data
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    /// External service could not be reached or returned an error status
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,
    /// External service rejected our credentials
    #[serde(rename = "EXTERNAL_AUTH_FAILED")]
    ExternalAuthFailed = 5002,
    /// External service rate limit exceeded
    #[serde(rename = "EXTERNAL_RATE_LIMITED")]
    ExternalRateLimited = 5003,

    // Configuration (6000-6999)
    /// Required credential or setting is not configured
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 6001,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::InvalidInput => 400,

            // 422 Unprocessable Entity
            Self::InvalidBaseline => 422,

            // 503 Service Unavailable - feature disabled by missing credentials
            Self::ConfigMissing => 503,

            // 500 Internal Server Error - upstream failures are never retried
            Self::ExternalServiceError
            | Self::ExternalServiceUnavailable
            | Self::ExternalAuthFailed
            | Self::ExternalRateLimited
            | Self::InternalError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid request",
            Self::InvalidBaseline => "Recovery baseline is unusable",
            Self::ExternalServiceError => "An external service returned invalid data",
            Self::ExternalServiceUnavailable => "An external service is currently unavailable",
            Self::ExternalAuthFailed => "Authentication with external service failed",
            Self::ExternalRateLimited => "External service rate limit exceeded",
            Self::ConfigMissing => "Feature unavailable",
            Self::InternalError => "Internal server error",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Unusable scoring baseline
    #[must_use]
    pub fn invalid_baseline(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidBaseline, message)
    }

    /// Required configuration is missing
    #[must_use]
    pub fn config_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigMissing, message)
    }

    /// External service failure
    #[must_use]
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Internal server error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response body
///
/// Always carries a human-readable `message` so the dashboard can display it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short summary of the failure class
    pub error: String,
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable detail
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: error.code.description().to_owned(),
            code: error.code,
            message: error.message.clone(),
        }
    }
}

#[cfg(feature = "http-response")]
mod http_response {
    use axum::response::{IntoResponse, Response};
    use axum::Json;
    use http::StatusCode;
    use tracing::{debug, error};

    use super::{AppError, ErrorResponse};

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            if status.is_server_error() {
                error!(code = ?self.code, message = %self.message, "Request failed");
            } else {
                debug!(code = ?self.code, message = %self.message, "Request rejected");
            }

            (status, Json(ErrorResponse::from(&self))).into_response()
        }
    }
}
