// ABOUTME: Environment configuration for the dashboard backend
// ABOUTME: Resolves network settings, wearable credentials, and the LLM provider once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

//! Environment-based configuration
//!
//! There are no configuration files. Every setting is read from the process
//! environment by [`ServerConfig::from_env`] exactly once, and the resulting value
//! is handed to request handlers through shared server resources. Missing feature
//! credentials are not fatal: the affected endpoints report themselves unavailable.

use std::env;
use std::fmt;

use anyhow::Result;
use health_copilot_core::constants::{env_vars, network};
use health_copilot_providers::{ProviderResult, WearableCredentials};
use thiserror::Error;
use tracing::{info, warn};

use super::types::{Environment, LlmProviderType};

/// Invalid configuration values that prevent startup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A numeric variable could not be parsed
    #[error("Invalid {key} value '{value}': expected a port number")]
    InvalidPort {
        /// Variable name
        key: &'static str,
        /// Raw value
        value: String,
    },

    /// Explicit provider selection names an unknown provider
    #[error("Invalid {key} value '{value}': expected 'openai' or 'gemini'")]
    UnknownLlmProvider {
        /// Variable name
        key: &'static str,
        /// Raw value
        value: String,
    },
}

/// `OpenAI` connection settings
#[derive(Clone, PartialEq, Eq)]
pub struct OpenAiSettings {
    /// API key sent as a bearer token
    pub api_key: String,
    /// Model override
    pub model: Option<String>,
    /// Base URL override for compatible endpoints
    pub base_url: Option<String>,
}

impl fmt::Debug for OpenAiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiSettings")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Gemini connection settings
#[derive(Clone, PartialEq, Eq)]
pub struct GeminiSettings {
    /// API key sent in the `x-goog-api-key` header
    pub api_key: String,
    /// Model override
    pub model: Option<String>,
    /// Base URL override
    pub base_url: Option<String>,
}

impl fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Generative text provider chosen at startup
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LlmSelection {
    /// Chat and action generation go to `OpenAI`
    OpenAi(OpenAiSettings),
    /// Chat and action generation go to Gemini
    Gemini(GeminiSettings),
    /// No credential is configured; chat reports itself unavailable
    #[default]
    Unconfigured,
}

impl LlmSelection {
    /// Resolve the provider from already-loaded settings
    ///
    /// An explicit choice wins when its credential is present. Without an explicit
    /// choice an `OpenAI` key takes precedence over a Gemini key.
    #[must_use]
    pub fn resolve(
        explicit: Option<LlmProviderType>,
        openai: Option<OpenAiSettings>,
        gemini: Option<GeminiSettings>,
    ) -> Self {
        match explicit {
            Some(LlmProviderType::OpenAi) => openai.map_or_else(
                || {
                    warn!(
                        "{} selects openai but {} is not set",
                        LlmProviderType::ENV_VAR,
                        env_vars::OPENAI_API_KEY
                    );
                    Self::Unconfigured
                },
                Self::OpenAi,
            ),
            Some(LlmProviderType::Gemini) => gemini.map_or_else(
                || {
                    warn!(
                        "{} selects gemini but {} is not set",
                        LlmProviderType::ENV_VAR,
                        env_vars::GEMINI_API_KEY
                    );
                    Self::Unconfigured
                },
                Self::Gemini,
            ),
            None => match (openai, gemini) {
                (Some(settings), _) => Self::OpenAi(settings),
                (None, Some(settings)) => Self::Gemini(settings),
                (None, None) => Self::Unconfigured,
            },
        }
    }

    /// Read keys, model overrides, and explicit selection from the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownLlmProvider` if the explicit selection is not recognized.
    pub fn from_env() -> Result<Self, ConfigError> {
        let explicit = match non_blank_env(LlmProviderType::ENV_VAR) {
            Some(value) => Some(LlmProviderType::parse(&value).ok_or(
                ConfigError::UnknownLlmProvider {
                    key: LlmProviderType::ENV_VAR,
                    value,
                },
            )?),
            None => None,
        };

        let openai = non_blank_env(env_vars::OPENAI_API_KEY).map(|api_key| OpenAiSettings {
            api_key,
            model: non_blank_env(env_vars::OPENAI_MODEL),
            base_url: non_blank_env(env_vars::OPENAI_BASE_URL),
        });
        let gemini = non_blank_env(env_vars::GEMINI_API_KEY).map(|api_key| GeminiSettings {
            api_key,
            model: non_blank_env(env_vars::GEMINI_MODEL),
            base_url: non_blank_env(env_vars::GEMINI_BASE_URL),
        });

        Ok(Self::resolve(explicit, openai, gemini))
    }

    /// The selected provider type, if any
    #[must_use]
    pub const fn provider_type(&self) -> Option<LlmProviderType> {
        match self {
            Self::OpenAi(_) => Some(LlmProviderType::OpenAi),
            Self::Gemini(_) => Some(LlmProviderType::Gemini),
            Self::Unconfigured => None,
        }
    }
}

/// CORS settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Comma-separated origins, or `*` for any
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Cross-origin settings
    pub cors: CorsConfig,
    /// Wearable credentials, or the reason they are unavailable
    pub wearable: ProviderResult<WearableCredentials>,
    /// Generative text provider
    pub llm: LlmSelection,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a port or the explicit LLM provider selection is malformed.
    /// Missing credentials are not errors.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let wearable = WearableCredentials::from_env();
        if let Err(e) = &wearable {
            warn!("Wearable metrics unavailable: {e}");
        }

        let llm = LlmSelection::from_env()?;
        if llm.provider_type().is_none() {
            warn!("No AI API key found. Chat and action generation will not work.");
        }

        Ok(Self {
            http_port: http_port_from_env()?,
            host: env_var_or(env_vars::HOST, network::DEFAULT_HOST),
            environment: Environment::from_env(),
            cors: CorsConfig {
                allowed_origins: env_var_or(env_vars::CORS_ALLOWED_ORIGINS, "*"),
            },
            wearable,
            llm,
        })
    }

    /// Human-readable summary without secrets
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Health Copilot Configuration:\n\
             - Listen: {}:{}\n\
             - Environment: {}\n\
             - CORS Origins: {}\n\
             - Wearable: {}\n\
             - LLM Provider: {}",
            self.host,
            self.http_port,
            self.environment,
            self.cors.allowed_origins,
            self.wearable
                .as_ref()
                .map_or("Not configured", |_| "Configured (mock data)"),
            self.llm
                .provider_type()
                .map_or("Not configured", |provider| provider.as_str()),
        )
    }
}

/// `PORT` wins over `HTTP_PORT`; both fall back to the default port
fn http_port_from_env() -> Result<u16, ConfigError> {
    [env_vars::PORT, env_vars::HTTP_PORT]
        .into_iter()
        .find_map(|key| non_blank_env(key).map(|value| (key, value)))
        .map_or(Ok(network::DEFAULT_HTTP_PORT), |(key, value)| {
            parse_port(key, &value)
        })
}

fn parse_port(key: &'static str, value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidPort {
            key,
            value: value.to_owned(),
        })
}

fn env_var_or(key: &str, default: &str) -> String {
    non_blank_env(key).unwrap_or_else(|| default.to_owned())
}

fn non_blank_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
