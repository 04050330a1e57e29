// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Environment variable names, defaults, and provider identifiers for Health Copilot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large list.

/// API endpoints
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Dashboard overview
    pub const HEALTH_OVERVIEW: &str = "/api/health/overview";
    /// Action generation
    pub const HEALTH_ACTIONS: &str = "/api/health/actions";
    /// Historical trends
    pub const HEALTH_HISTORY: &str = "/api/health/history";
    /// Chat message exchange
    pub const CHAT_MESSAGE: &str = "/api/chat/message";
    /// Chat availability
    pub const CHAT_STATUS: &str = "/api/chat/status";
}

/// Network defaults
pub mod network {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 4000;
    /// Default bind address
    pub const DEFAULT_HOST: &str = "0.0.0.0";
}

/// Environment variable names
pub mod env_vars {
    /// Primary HTTP port variable
    pub const PORT: &str = "PORT";
    /// Alternate HTTP port variable
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Comma-separated list of allowed CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Wearable API bearer token
    pub const WEARABLE_AUTH_TOKEN: &str = "ULTRAHUMAN_AUTH_TOKEN";
    /// Wearable account email
    pub const WEARABLE_USER_EMAIL: &str = "ULTRAHUMAN_USER_EMAIL";
    /// `OpenAI` API key
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    /// `OpenAI` model override
    pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
    /// `OpenAI` base URL override (any chat-completions compatible endpoint)
    pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
    /// Gemini API key
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Gemini model override
    pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
    /// Gemini API base URL override
    pub const GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
    /// Explicit LLM provider selection
    pub const LLM_PROVIDER: &str = "HEALTH_COPILOT_LLM_PROVIDER";
}

/// Provider identifiers
pub mod providers {
    /// Wearable metrics provider
    pub const WEARABLE: &str = "ultrahuman";
    /// `OpenAI` chat provider
    pub const OPENAI: &str = "openai";
    /// Google Gemini provider
    pub const GEMINI: &str = "gemini";
}

/// Trend and history windows
pub mod trends {
    /// Short trend window (days)
    pub const SHORT_RANGE_DAYS: u32 = 7;
    /// Long trend window (days)
    pub const LONG_RANGE_DAYS: u32 = 30;
    /// History window used when `days` is absent or unusable
    pub const DEFAULT_HISTORY_DAYS: u32 = 30;
    /// Largest history window served
    pub const MAX_HISTORY_DAYS: u32 = 365;
}

/// Metric value bounds
pub mod limits {
    /// Upper bound for sleep, readiness, and recovery scores
    pub const MAX_SCORE: u8 = 100;
}
