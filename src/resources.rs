// ABOUTME: Shared server resources constructed once at startup and injected into handlers
// ABOUTME: Holds configuration, the wearable metrics source, and the optional LLM provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

//! # Server Resources
//!
//! Everything a request handler needs is built here once and shared through
//! `Arc<ServerResources>`. Providers are never created lazily per request.

use std::sync::Arc;

use health_copilot_providers::{ProviderError, SyntheticWearableProvider, WearableProvider};
use tracing::info;

use crate::config::ServerConfig;
use crate::errors::{AppError, AppResult};
use crate::llm::{ChatProvider, LlmProvider};

/// Dependencies shared by all request handlers
pub struct ServerResources {
    /// Startup configuration
    pub config: Arc<ServerConfig>,
    wearable: Result<Arc<dyn WearableProvider>, ProviderError>,
    llm: Option<Arc<dyn LlmProvider>>,
}

impl ServerResources {
    /// Build providers from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configured LLM provider cannot be constructed.
    pub fn new(config: ServerConfig) -> AppResult<Self> {
        let wearable = config.wearable.clone().map(|credentials| {
            Arc::new(SyntheticWearableProvider::new(credentials)) as Arc<dyn WearableProvider>
        });

        let llm = ChatProvider::from_selection(&config.llm)?
            .map(|provider| Arc::new(provider) as Arc<dyn LlmProvider>);

        info!(
            wearable = wearable.is_ok(),
            llm = llm.as_ref().map_or("none", |p| p.name()),
            "Server resources initialized"
        );

        Ok(Self::with_providers(config, wearable, llm))
    }

    /// Assemble resources from explicit providers
    #[must_use]
    pub fn with_providers(
        config: ServerConfig,
        wearable: Result<Arc<dyn WearableProvider>, ProviderError>,
        llm: Option<Arc<dyn LlmProvider>>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            wearable,
            llm,
        }
    }

    /// The wearable metrics source
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_MISSING` when wearable credentials were not configured.
    pub fn wearable(&self) -> AppResult<&dyn WearableProvider> {
        self.wearable
            .as_deref()
            .map_err(|e| AppError::from(e.clone()))
    }

    /// The generative text provider, if one is configured
    #[must_use]
    pub fn llm(&self) -> Option<&dyn LlmProvider> {
        self.llm.as_deref()
    }
}
