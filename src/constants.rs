// ABOUTME: Application constants for the Health Copilot server crate
// ABOUTME: Re-exports the shared constant domains defined alongside the core models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

pub use health_copilot_core::constants::{endpoints, env_vars, limits, network, providers, trends};
