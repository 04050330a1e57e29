// ABOUTME: Daily wearable metrics summary with sleep, recovery, activity, and temperature readings
// ABOUTME: Immutable per-date value with range validation for scores and durations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::limits::MAX_SCORE;

/// One calendar day of wearable readings
///
/// Produced once per date by a metrics provider and never mutated afterwards.
/// Serialized with camelCase field names and the date as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    /// Calendar day the readings belong to
    pub date: NaiveDate,
    /// Sleep readings for the night ending on `date`
    pub sleep: SleepMetrics,
    /// Recovery readings
    pub recovery: RecoveryMetrics,
    /// Activity totals for the day
    pub activity: ActivityMetrics,
    /// Skin temperature deviation, when the device reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<TemperatureMetrics>,
}

/// Sleep readings, durations in hours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepMetrics {
    /// Total sleep duration in hours
    pub duration: f64,
    /// Sleep score (0-100)
    pub score: u8,
    /// Deep sleep in hours
    pub deep_sleep: f64,
    /// REM sleep in hours
    pub rem_sleep: f64,
    /// Light sleep in hours
    pub light_sleep: f64,
}

/// Recovery readings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryMetrics {
    /// Heart rate variability (ms)
    pub hrv_score: u32,
    /// Resting heart rate (bpm)
    pub resting_heart_rate: u32,
    /// Upstream readiness estimate (0-100)
    pub readiness_score: u8,
}

/// Activity totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityMetrics {
    /// Step count
    pub steps: u32,
    /// Minutes of moderate or vigorous activity
    pub active_minutes: u32,
}

/// Skin temperature deviation from the personal baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureMetrics {
    /// Deviation in degrees Celsius
    pub deviation: f64,
}

/// A field of a [`MetricsSummary`] that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsViolation {
    /// Dotted path of the offending field
    pub field: &'static str,
    /// Why the value was rejected
    pub reason: String,
}

impl MetricsSummary {
    /// Check score ranges and that every duration is finite and non-negative
    ///
    /// # Errors
    ///
    /// Returns the first violated field.
    pub fn validate(&self) -> Result<(), MetricsViolation> {
        check_score("sleep.score", self.sleep.score)?;
        check_score("recovery.readinessScore", self.recovery.readiness_score)?;

        check_duration("sleep.duration", self.sleep.duration)?;
        check_duration("sleep.deepSleep", self.sleep.deep_sleep)?;
        check_duration("sleep.remSleep", self.sleep.rem_sleep)?;
        check_duration("sleep.lightSleep", self.sleep.light_sleep)?;

        if let Some(temperature) = &self.temperature {
            if !temperature.deviation.is_finite() {
                return Err(MetricsViolation {
                    field: "temperature.deviation",
                    reason: "must be a finite number".to_owned(),
                });
            }
        }

        Ok(())
    }

    /// Copy of this summary with the readiness score replaced
    #[must_use]
    pub fn with_readiness_score(&self, readiness_score: u8) -> Self {
        let mut summary = self.clone();
        summary.recovery.readiness_score = readiness_score.min(MAX_SCORE);
        summary
    }
}

fn check_score(field: &'static str, value: u8) -> Result<(), MetricsViolation> {
    if value > MAX_SCORE {
        return Err(MetricsViolation {
            field,
            reason: format!("{value} exceeds {MAX_SCORE}"),
        });
    }
    Ok(())
}

fn check_duration(field: &'static str, hours: f64) -> Result<(), MetricsViolation> {
    if !hours.is_finite() || hours < 0.0 {
        return Err(MetricsViolation {
            field,
            reason: format!("{hours} is not a non-negative duration"),
        });
    }
    Ok(())
}
