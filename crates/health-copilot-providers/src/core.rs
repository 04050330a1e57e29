// ABOUTME: Core wearable provider trait and credential loading
// ABOUTME: Defines the per-date metrics contract every wearable source implements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

//! # Wearable Provider Contract
//!
//! A wearable provider supplies one [`MetricsSummary`] per calendar day. Providers
//! fail with `ProviderError::ConfigurationError` when credentials are absent and
//! with `ProviderError::ApiError` on network or authentication failures upstream.
//!
//! ```rust,no_run
//! use health_copilot_providers::core::{WearableCredentials, WearableProvider};
//! use health_copilot_providers::SyntheticWearableProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = SyntheticWearableProvider::new(WearableCredentials::from_env()?);
//! let today = provider.get_today_summary().await?;
//! println!("sleep score: {}", today.sleep.score);
//! # Ok(())
//! # }
//! ```

use std::env;
use std::fmt;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use health_copilot_core::constants::{env_vars, providers};
use health_copilot_core::errors::{ProviderError, ProviderResult};
use health_copilot_core::models::MetricsSummary;

/// Source of daily wearable metrics
#[async_trait]
pub trait WearableProvider: Send + Sync {
    /// Provider identifier used in logs and errors
    fn name(&self) -> &'static str;

    /// The calendar day this provider considers "today"
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Fetch the summary for a single day
    async fn get_summary(&self, date: NaiveDate) -> ProviderResult<MetricsSummary>;

    /// Fetch the summary for [`WearableProvider::today`]
    async fn get_today_summary(&self) -> ProviderResult<MetricsSummary> {
        self.get_summary(self.today()).await
    }
}

/// Credentials for the wearable API
#[derive(Clone, PartialEq, Eq)]
pub struct WearableCredentials {
    /// Bearer token
    pub auth_token: String,
    /// Account email
    pub user_email: String,
}

impl WearableCredentials {
    /// Build credentials from explicit values
    #[must_use]
    pub fn new(auth_token: impl Into<String>, user_email: impl Into<String>) -> Self {
        Self {
            auth_token: auth_token.into(),
            user_email: user_email.into(),
        }
    }

    /// Load credentials from `ULTRAHUMAN_AUTH_TOKEN` and `ULTRAHUMAN_USER_EMAIL`
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::ConfigurationError` if either variable is unset or blank.
    pub fn from_env() -> ProviderResult<Self> {
        let auth_token = non_blank_env(env_vars::WEARABLE_AUTH_TOKEN);
        let user_email = non_blank_env(env_vars::WEARABLE_USER_EMAIL);

        match (auth_token, user_email) {
            (Some(auth_token), Some(user_email)) => Ok(Self {
                auth_token,
                user_email,
            }),
            _ => Err(ProviderError::ConfigurationError {
                provider: providers::WEARABLE.to_owned(),
                details: format!(
                    "{} and {} must be set",
                    env_vars::WEARABLE_AUTH_TOKEN,
                    env_vars::WEARABLE_USER_EMAIL
                ),
            }),
        }
    }
}

impl fmt::Debug for WearableCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WearableCredentials")
            .field("auth_token", &"[REDACTED]")
            .field("user_email", &self.user_email)
            .finish()
    }
}

fn non_blank_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
