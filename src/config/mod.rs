// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-only configuration resolved once at startup and shared with handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

//! Configuration module for the Health Copilot backend
//!
//! - **Environment**: Server configuration from environment variables
//! - **Types**: Log level, deployment environment, and LLM provider enums

/// Environment and server configuration
pub mod environment;
/// Core configuration enums
pub mod types;

pub use environment::{
    ConfigError, CorsConfig, GeminiSettings, LlmSelection, OpenAiSettings, ServerConfig,
};
pub use types::{Environment, LlmProviderType, LogLevel};
