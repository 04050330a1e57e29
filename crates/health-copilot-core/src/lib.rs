// ABOUTME: Core types and constants for the Health Copilot dashboard backend
// ABOUTME: Foundation crate with error handling, health metric models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

#![deny(unsafe_code)]

//! # Health Copilot Core
//!
//! Foundation crate providing shared types and constants for the Health Copilot
//! dashboard backend. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ProviderError`
//! - **models**: Daily metrics summaries, trend points, and health actions
//! - **constants**: Environment variable names, defaults, and provider identifiers

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`MetricsSummary`, `TrendPoint`, `HealthAction`)
pub mod models;
