// ABOUTME: Error types for the Health Copilot server crate
// ABOUTME: Re-exports the shared error model so handlers and services use one vocabulary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

//! # Error Handling
//!
//! [`AppError`] converts into an HTTP response with the status derived from its
//! [`ErrorCode`] and a `{error, code, message}` JSON body.

pub use health_copilot_core::errors::{
    AppError, AppResult, ErrorCode, ErrorResponse, ProviderError, ProviderResult,
};
