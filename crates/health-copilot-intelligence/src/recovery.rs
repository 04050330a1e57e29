// ABOUTME: Composite recovery scoring from sleep, HRV, resting heart rate, and readiness
// ABOUTME: Weighted linear formula with clamped baseline ratios and a 0-100 integer result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

//! Recovery Scorer Module
//!
//! Combines today's wearable readings with a rolling baseline into a single
//! 0-100 recovery score:
//!
//! | Component  | Input                                   | Max contribution |
//! |------------|-----------------------------------------|------------------|
//! | Sleep      | `sleep.score / 100 * 40`                | 40               |
//! | HRV        | `clamp(hrv / avg_hrv, 0.5, 1.5) * 20`   | 30               |
//! | RHR        | `clamp(avg_rhr / rhr, 0.5, 1.5) * 13.33`| ~20              |
//! | Readiness  | `readiness / 100 * 10`                  | 10               |
//!
//! The HRV ratio rewards variability above baseline; the RHR ratio is inverted
//! since a lower resting heart rate indicates better recovery. The rounded sum
//! is clamped to `[0, 100]`.
//!
//! A non-positive or non-finite denominator is rejected with
//! `ErrorCode::InvalidBaseline` rather than substituted with a neutral ratio.
//! The baseline RHR is a numerator, so zero is accepted and clamps to the
//! ratio floor; only a non-finite value is rejected.

use health_copilot_core::errors::{AppError, AppResult};
use health_copilot_core::models::{MetricsSummary, TrendPoint};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Weight applied to the normalized sleep score
pub const SLEEP_WEIGHT: f64 = 40.0;
/// Weight applied to the clamped HRV ratio
pub const HRV_WEIGHT: f64 = 20.0;
/// Weight applied to the clamped inverted RHR ratio
pub const RHR_WEIGHT: f64 = 13.33;
/// Weight applied to the normalized readiness score
pub const READINESS_WEIGHT: f64 = 10.0;
/// Lower bound for baseline ratios
pub const MIN_RATIO: f64 = 0.5;
/// Upper bound for baseline ratios
pub const MAX_RATIO: f64 = 1.5;

/// Rolling baseline the day is compared against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Baseline {
    /// Average HRV over the short trend window
    pub avg_hrv: f64,
    /// Reference resting heart rate
    pub avg_rhr: f64,
}

impl Baseline {
    /// Derive a baseline from an HRV trend and today's readings
    ///
    /// `avg_hrv` is the mean of the trend values. An empty trend falls back to
    /// today's HRV, which yields a neutral HRV ratio. `avg_rhr` is today's RHR.
    #[must_use]
    pub fn from_trend(hrv_points: &[TrendPoint], today: &MetricsSummary) -> Self {
        let avg_hrv = if hrv_points.is_empty() {
            f64::from(today.recovery.hrv_score)
        } else {
            hrv_points.iter().map(|p| p.value).sum::<f64>() / hrv_points.len() as f64
        };

        Self {
            avg_hrv,
            avg_rhr: f64::from(today.recovery.resting_heart_rate),
        }
    }
}

/// Individual contributions that make up a recovery score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryBreakdown {
    /// Sleep contribution (0-40)
    pub sleep: f64,
    /// HRV contribution (10-30)
    pub hrv: f64,
    /// RHR contribution (~6.7-20)
    pub rhr: f64,
    /// Readiness contribution (0-10)
    pub readiness: f64,
    /// Rounded and clamped total (0-100)
    pub total: u8,
}

/// Traffic-light classification of a recovery score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryBand {
    /// 80 and above
    Green,
    /// 60 to 79
    Amber,
    /// Below 60
    Red,
}

impl RecoveryBand {
    /// Classify a score
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::Green
        } else if score >= 60 {
            Self::Amber
        } else {
            Self::Red
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Amber => "amber",
            Self::Red => "red",
        }
    }
}

/// Recovery scorer
pub struct RecoveryScorer;

impl RecoveryScorer {
    /// Composite recovery score in `[0, 100]`
    ///
    /// # Errors
    ///
    /// Returns `InvalidBaseline` if `baseline.avg_hrv` is zero, negative, or not
    /// finite, if `baseline.avg_rhr` is not finite, or if today's resting heart
    /// rate is zero.
    pub fn score(today: &MetricsSummary, baseline: &Baseline) -> AppResult<u8> {
        Self::breakdown(today, baseline).map(|b| b.total)
    }

    /// Per-component contributions along with the final score
    ///
    /// # Errors
    ///
    /// Same conditions as [`RecoveryScorer::score`].
    pub fn breakdown(today: &MetricsSummary, baseline: &Baseline) -> AppResult<RecoveryBreakdown> {
        Self::validate(today, baseline)?;

        let today_hrv = f64::from(today.recovery.hrv_score);
        let today_rhr = f64::from(today.recovery.resting_heart_rate);

        let sleep = f64::from(today.sleep.score) / 100.0 * SLEEP_WEIGHT;
        let hrv = clamp_ratio(today_hrv / baseline.avg_hrv) * HRV_WEIGHT;
        let rhr = clamp_ratio(baseline.avg_rhr / today_rhr) * RHR_WEIGHT;
        let readiness = f64::from(today.recovery.readiness_score) / 100.0 * READINESS_WEIGHT;

        let total = (sleep + hrv + rhr + readiness).round().clamp(0.0, 100.0) as u8;

        debug!(
            date = %today.date,
            sleep,
            hrv,
            rhr,
            readiness,
            total,
            "Computed recovery score"
        );

        Ok(RecoveryBreakdown {
            sleep,
            hrv,
            rhr,
            readiness,
            total,
        })
    }

    fn validate(today: &MetricsSummary, baseline: &Baseline) -> AppResult<()> {
        if !is_positive(baseline.avg_hrv) {
            return Err(AppError::invalid_baseline(format!(
                "baseline HRV must be a positive number, got {}",
                baseline.avg_hrv
            )));
        }
        if !baseline.avg_rhr.is_finite() {
            return Err(AppError::invalid_baseline(format!(
                "baseline resting heart rate must be finite, got {}",
                baseline.avg_rhr
            )));
        }
        if today.recovery.resting_heart_rate == 0 {
            return Err(AppError::invalid_baseline(format!(
                "resting heart rate for {} is zero",
                today.date
            )));
        }
        Ok(())
    }
}

fn clamp_ratio(ratio: f64) -> f64 {
    ratio.clamp(MIN_RATIO, MAX_RATIO)
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
