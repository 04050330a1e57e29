// ABOUTME: Trend point model and metric selectors for time-series charts
// ABOUTME: Maps a daily metrics summary onto the scalar a trend line plots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::MetricsSummary;

/// One sample of a time series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Day the sample belongs to
    pub date: NaiveDate,
    /// Plotted value
    pub value: f64,
    /// Optional display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Scalar extracted from a [`MetricsSummary`] for a trend line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendMetric {
    /// Nightly sleep score, labelled with the sleep duration
    SleepScore,
    /// Heart rate variability
    Hrv,
    /// Resting heart rate
    RestingHeartRate,
    /// Daily step count
    Steps,
}

impl TrendMetric {
    /// Stable identifier used in logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SleepScore => "sleep_score",
            Self::Hrv => "hrv",
            Self::RestingHeartRate => "resting_heart_rate",
            Self::Steps => "steps",
        }
    }

    /// Value plotted for this metric
    #[must_use]
    pub fn extract(&self, summary: &MetricsSummary) -> f64 {
        match self {
            Self::SleepScore => f64::from(summary.sleep.score),
            Self::Hrv => f64::from(summary.recovery.hrv_score),
            Self::RestingHeartRate => f64::from(summary.recovery.resting_heart_rate),
            Self::Steps => f64::from(summary.activity.steps),
        }
    }

    /// Display label; only sleep points carry one (`"7.4h"`)
    #[must_use]
    pub fn label(&self, summary: &MetricsSummary) -> Option<String> {
        match self {
            Self::SleepScore => Some(format!("{:.1}h", summary.sleep.duration)),
            Self::Hrv | Self::RestingHeartRate | Self::Steps => None,
        }
    }

    /// Build the trend point for `summary`
    #[must_use]
    pub fn point(&self, summary: &MetricsSummary) -> TrendPoint {
        TrendPoint {
            date: summary.date,
            value: self.extract(summary),
            label: self.label(summary),
        }
    }
}
