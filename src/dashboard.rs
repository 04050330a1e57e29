// ABOUTME: Dashboard service assembling overview, history, and action payloads for the UI
// ABOUTME: Combines wearable trends, recovery scoring, and action generation per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

//! # Dashboard Service
//!
//! Business logic behind the `/api/health/*` endpoints. Each call is independent:
//! nothing is cached between requests.

use std::collections::HashMap;

use chrono::{NaiveDate, SecondsFormat, Utc};
use health_copilot_core::models::{Focus, HealthAction, MetricsSummary, TrendMetric, TrendPoint};
use health_copilot_intelligence::{Baseline, RecoveryBand, RecoveryScorer};
use health_copilot_providers::{date_range, TrendAggregator};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::actions::ActionGenerator;
use crate::chat::NOT_CONFIGURED_MESSAGE;
use crate::constants::trends::{
    DEFAULT_HISTORY_DAYS, LONG_RANGE_DAYS, MAX_HISTORY_DAYS, SHORT_RANGE_DAYS,
};
use crate::errors::{AppError, AppResult};
use crate::resources::ServerResources;

/// Metrics charted on the overview page
const OVERVIEW_METRICS: [TrendMetric; 3] = [
    TrendMetric::SleepScore,
    TrendMetric::Hrv,
    TrendMetric::RestingHeartRate,
];

/// Metrics charted on the history page
const HISTORY_METRICS: [TrendMetric; 3] =
    [TrendMetric::SleepScore, TrendMetric::Hrv, TrendMetric::Steps];

/// Short and long trend series for the overview charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthTrends {
    /// Sleep score, last 7 days
    #[serde(rename = "sleep7Day")]
    pub sleep_7_day: Vec<TrendPoint>,
    /// Sleep score, last 30 days
    #[serde(rename = "sleep30Day")]
    pub sleep_30_day: Vec<TrendPoint>,
    /// HRV, last 7 days
    #[serde(rename = "hrv7Day")]
    pub hrv_7_day: Vec<TrendPoint>,
    /// HRV, last 30 days
    #[serde(rename = "hrv30Day")]
    pub hrv_30_day: Vec<TrendPoint>,
    /// Resting heart rate, last 7 days
    #[serde(rename = "rhr7Day")]
    pub rhr_7_day: Vec<TrendPoint>,
    /// Resting heart rate, last 30 days
    #[serde(rename = "rhr30Day")]
    pub rhr_30_day: Vec<TrendPoint>,
}

/// Composite recovery result shown next to today's metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoverySummary {
    /// Composite score in `[0, 100]`
    pub score: u8,
    /// Colour band for the score
    pub band: RecoveryBand,
    /// Inputs the score was computed against
    pub baseline: Baseline,
}

/// `GET /api/health/overview` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthOverview {
    /// Today's metrics with `readinessScore` replaced by the composite score
    pub today: MetricsSummary,
    /// Trend series
    pub trends: HealthTrends,
    /// Composite score details
    pub recovery: RecoverySummary,
}

/// `POST /api/health/actions` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateActionsResponse {
    /// Generated or fallback actions
    pub actions: Vec<HealthAction>,
    /// Metrics the actions were generated from
    pub metrics: MetricsSummary,
    /// ISO-8601 generation time
    pub generated_at: String,
}

/// `GET /api/health/history` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthHistory {
    /// Sleep score series
    pub sleep: Vec<TrendPoint>,
    /// HRV series
    pub hrv: Vec<TrendPoint>,
    /// Step count series
    pub activity: Vec<TrendPoint>,
}

/// Resolve the `days` query parameter
///
/// Missing, unparsable, and zero values mean the default window; larger values
/// are capped.
#[must_use]
pub fn history_days(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|days| *days > 0)
        .map_or(DEFAULT_HISTORY_DAYS, |days| days.min(MAX_HISTORY_DAYS))
}

/// Parse an optional focus string; blank means no focus
///
/// # Errors
///
/// Returns `INVALID_INPUT` for an unrecognized focus.
pub fn parse_focus(raw: Option<&str>) -> AppResult<Option<Focus>> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|e| AppError::invalid_input(format!("{e}"))),
        None => Ok(None),
    }
}

/// Dashboard operations over the shared resources
pub struct DashboardService<'a> {
    resources: &'a ServerResources,
}

impl<'a> DashboardService<'a> {
    /// Service backed by the given resources
    #[must_use]
    pub const fn new(resources: &'a ServerResources) -> Self {
        Self { resources }
    }

    /// Today's metrics, recent trends, and the composite recovery score
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_MISSING` without wearable credentials, an upstream error if
    /// today's metrics cannot be fetched, or `INVALID_BASELINE` if scoring inputs are unusable.
    #[instrument(skip(self))]
    pub async fn overview(&self) -> AppResult<HealthOverview> {
        info!("Fetching health overview");

        let wearable = self.resources.wearable()?;
        let aggregator = TrendAggregator::new(wearable);

        let (today, mut long) = tokio::join!(
            wearable.get_today_summary(),
            aggregator.get_trends(&OVERVIEW_METRICS, LONG_RANGE_DAYS)
        );
        let today = today?;

        // One pass over the long window; the short window is its tail
        let short_start = date_range(wearable.today(), SHORT_RANGE_DAYS)
            .first()
            .copied()
            .unwrap_or_else(|| wearable.today());
        let mut take = |metric: TrendMetric| {
            let series = long.remove(&metric).unwrap_or_default();
            let recent = since(&series, short_start);
            (recent, series)
        };
        let (sleep_7_day, sleep_30_day) = take(TrendMetric::SleepScore);
        let (hrv_7_day, hrv_30_day) = take(TrendMetric::Hrv);
        let (rhr_7_day, rhr_30_day) = take(TrendMetric::RestingHeartRate);

        let baseline = Baseline::from_trend(&hrv_7_day, &today);
        let score = RecoveryScorer::score(&today, &baseline)?;

        info!(
            score,
            avg_hrv = baseline.avg_hrv,
            avg_rhr = baseline.avg_rhr,
            "Computed recovery score"
        );

        Ok(HealthOverview {
            today: today.with_readiness_score(score),
            trends: HealthTrends {
                sleep_7_day,
                sleep_30_day,
                hrv_7_day,
                hrv_30_day,
                rhr_7_day,
                rhr_30_day,
            },
            recovery: RecoverySummary {
                score,
                band: RecoveryBand::from_score(score),
                baseline,
            },
        })
    }

    /// Generate recommendations from today's metrics
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_MISSING` when the wearable source or the LLM provider is not
    /// configured, or an upstream error if today's metrics cannot be fetched.
    /// Generation and parsing failures never surface; they yield the fallback action.
    #[instrument(skip(self))]
    pub async fn generate_actions(&self, focus: Option<Focus>) -> AppResult<GenerateActionsResponse> {
        let metrics = self.resources.wearable()?.get_today_summary().await?;
        let provider = self
            .resources
            .llm()
            .ok_or_else(|| AppError::config_missing(NOT_CONFIGURED_MESSAGE))?;

        let actions = ActionGenerator::new(provider).generate(&metrics, focus).await;

        Ok(GenerateActionsResponse {
            actions,
            metrics,
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }

    /// Chart series for the last `days` days
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_MISSING` without wearable credentials.
    #[instrument(skip(self))]
    pub async fn history(&self, days: u32) -> AppResult<HealthHistory> {
        info!(days, "Fetching health history");

        let wearable = self.resources.wearable()?;
        let mut series: HashMap<TrendMetric, Vec<TrendPoint>> = TrendAggregator::new(wearable)
            .get_trends(&HISTORY_METRICS, days)
            .await;

        Ok(HealthHistory {
            sleep: series.remove(&TrendMetric::SleepScore).unwrap_or_default(),
            hrv: series.remove(&TrendMetric::Hrv).unwrap_or_default(),
            activity: series.remove(&TrendMetric::Steps).unwrap_or_default(),
        })
    }
}

fn since(series: &[TrendPoint], start: NaiveDate) -> Vec<TrendPoint> {
    series
        .iter()
        .filter(|point| point.date >= start)
        .cloned()
        .collect()
}
