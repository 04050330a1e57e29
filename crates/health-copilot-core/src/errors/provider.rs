// ABOUTME: Structured error types for wearable metrics provider operations
// ABOUTME: Distinguishes missing credentials from upstream failures and malformed data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

use thiserror::Error;

use super::{AppError, ErrorCode};

/// Errors raised while fetching metrics from a wearable provider
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// Required credentials or environment are absent
    #[error("{provider} is not configured: {details}")]
    ConfigurationError {
        /// Provider name
        provider: String,
        /// What is missing
        details: String,
    },

    /// Network or API failure from the upstream service
    #[error("{provider} API error ({status_code}): {message}")]
    ApiError {
        /// Provider name
        provider: String,
        /// HTTP status code returned upstream (0 when no response was received)
        status_code: u16,
        /// Upstream error message
        message: String,
    },

    /// Upstream returned data that violates the metrics invariants
    #[error("{provider} returned invalid {field}: {reason}")]
    InvalidData {
        /// Provider name
        provider: String,
        /// Offending field
        field: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Result alias for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        let code = match &error {
            ProviderError::ConfigurationError { .. } => ErrorCode::ConfigMissing,
            ProviderError::ApiError { .. } => ErrorCode::ExternalServiceUnavailable,
            ProviderError::InvalidData { .. } => ErrorCode::ExternalServiceError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
