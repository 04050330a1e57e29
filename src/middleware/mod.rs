// ABOUTME: HTTP middleware for the Health Copilot API
// ABOUTME: Cross-origin policy applied to every route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

/// Cross-origin resource sharing
pub mod cors;

pub use cors::setup_cors;
