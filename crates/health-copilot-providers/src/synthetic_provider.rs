// ABOUTME: Deterministic synthetic wearable provider used until the real API is integrated
// ABOUTME: Derives every reading from a trigonometric hash of the ISO date string
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

//! # Synthetic Wearable Provider
//!
//! Generates plausible daily readings without network I/O. The same date always
//! yields the same summary; neighbouring dates yield unrelated-looking values.
//!
//! The generator seeds from the byte sum of the `YYYY-MM-DD` string and draws
//! each field with `frac(sin(seed + min + max) * 10000)`. It is reproducible,
//! not uniform, and not part of any contract beyond "same date, same output".

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use health_copilot_core::constants::limits::MAX_SCORE;
use health_copilot_core::constants::providers;
use health_copilot_core::errors::{ProviderError, ProviderResult};
use health_copilot_core::models::{
    ActivityMetrics, MetricsSummary, RecoveryMetrics, SleepMetrics, TemperatureMetrics,
};
use tracing::warn;

use crate::core::{WearableCredentials, WearableProvider};

/// Wearable provider returning deterministic mock data
#[derive(Debug, Clone)]
pub struct SyntheticWearableProvider {
    credentials: WearableCredentials,
    today: Option<NaiveDate>,
}

impl SyntheticWearableProvider {
    /// Create a provider for the given account
    #[must_use]
    pub const fn new(credentials: WearableCredentials) -> Self {
        Self {
            credentials,
            today: None,
        }
    }

    /// Create a provider from environment credentials
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::ConfigurationError` when credentials are missing.
    pub fn from_env() -> ProviderResult<Self> {
        WearableCredentials::from_env().map(Self::new)
    }

    /// Pin the provider's notion of "today"
    #[must_use]
    pub const fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Account the provider serves
    #[must_use]
    pub fn user_email(&self) -> &str {
        &self.credentials.user_email
    }

    /// Pure generator behind [`WearableProvider::get_summary`]
    #[must_use]
    pub fn generate(date: NaiveDate) -> MetricsSummary {
        let seed = DateSeed::new(date);

        MetricsSummary {
            date,
            sleep: SleepMetrics {
                duration: seed.float(5.5, 9.0),
                score: seed.score(60, 95),
                deep_sleep: seed.float(1.0, 2.5),
                rem_sleep: seed.float(1.0, 2.5),
                light_sleep: seed.float(3.0, 5.0),
            },
            recovery: RecoveryMetrics {
                hrv_score: seed.int(40, 90),
                resting_heart_rate: seed.int(50, 70),
                readiness_score: seed.score(65, 98),
            },
            activity: ActivityMetrics {
                steps: seed.int(4_000, 15_000),
                active_minutes: seed.int(20, 90),
            },
            temperature: Some(TemperatureMetrics {
                deviation: (seed.float(-0.5, 0.5) * 100.0).round() / 100.0,
            }),
        }
    }
}

#[async_trait]
impl WearableProvider for SyntheticWearableProvider {
    fn name(&self) -> &'static str {
        providers::WEARABLE
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }

    async fn get_summary(&self, date: NaiveDate) -> ProviderResult<MetricsSummary> {
        warn!(
            provider = self.name(),
            %date,
            "Using mock data - real API integration pending"
        );

        let summary = Self::generate(date);
        summary
            .validate()
            .map_err(|violation| ProviderError::InvalidData {
                provider: self.name().to_owned(),
                field: violation.field.to_owned(),
                reason: violation.reason,
            })?;

        Ok(summary)
    }
}

/// Seed derived from the ISO date string
struct DateSeed(f64);

impl DateSeed {
    fn new(date: NaiveDate) -> Self {
        let key = date.format("%Y-%m-%d").to_string();
        Self(key.bytes().map(f64::from).sum())
    }

    fn fraction(&self, offset: f64) -> f64 {
        let x = (self.0 + offset).sin() * 10_000.0;
        x - x.floor()
    }

    /// Integer in `[min, max]`
    fn int(&self, min: u32, max: u32) -> u32 {
        let (lo, hi) = (f64::from(min), f64::from(max));
        let drawn = lo + (self.fraction(lo + hi) * (hi - lo + 1.0)).floor();
        (drawn as u32).clamp(min, max)
    }

    /// Float in `[min, max)`
    fn float(&self, min: f64, max: f64) -> f64 {
        min + self.fraction(min + max + 1.0) * (max - min)
    }

    fn score(&self, min: u8, max: u8) -> u8 {
        let drawn = self.int(u32::from(min), u32::from(max));
        u8::try_from(drawn).unwrap_or(MAX_SCORE).min(MAX_SCORE)
    }
}
