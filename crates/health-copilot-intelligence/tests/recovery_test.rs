// ABOUTME: Tests for the composite recovery scorer and baseline derivation
// ABOUTME: Covers the reference score, ratio clamping, zero guards, bands, and determinism
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use health_copilot_core::errors::ErrorCode;
use health_copilot_core::models::{
    ActivityMetrics, MetricsSummary, RecoveryMetrics, SleepMetrics, TrendPoint,
};
use health_copilot_intelligence::{Baseline, RecoveryBand, RecoveryScorer};

fn day(sleep_score: u8, hrv: u32, rhr: u32, readiness: u8) -> MetricsSummary {
    MetricsSummary {
        date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        sleep: SleepMetrics {
            duration: 7.5,
            score: sleep_score,
            deep_sleep: 1.5,
            rem_sleep: 1.8,
            light_sleep: 4.2,
        },
        recovery: RecoveryMetrics {
            hrv_score: hrv,
            resting_heart_rate: rhr,
            readiness_score: readiness,
        },
        activity: ActivityMetrics {
            steps: 8_000,
            active_minutes: 40,
        },
        temperature: None,
    }
}

fn baseline(avg_hrv: f64, avg_rhr: f64) -> Baseline {
    Baseline { avg_hrv, avg_rhr }
}

#[test]
fn test_reference_score_at_baseline_is_83() {
    let today = day(100, 60, 55, 100);
    let score = RecoveryScorer::score(&today, &baseline(60.0, 55.0)).unwrap();
    assert_eq!(score, 83);
}

#[test]
fn test_breakdown_components_at_baseline() {
    let today = day(100, 60, 55, 100);
    let breakdown = RecoveryScorer::breakdown(&today, &baseline(60.0, 55.0)).unwrap();

    assert!((breakdown.sleep - 40.0).abs() < 1e-9);
    assert!((breakdown.hrv - 20.0).abs() < 1e-9);
    assert!((breakdown.rhr - 13.33).abs() < 1e-9);
    assert!((breakdown.readiness - 10.0).abs() < 1e-9);
    assert_eq!(breakdown.total, 83);
}

#[test]
fn test_hrv_contribution_is_capped_at_30() {
    let today = day(50, 600, 60, 50);
    let breakdown = RecoveryScorer::breakdown(&today, &baseline(60.0, 60.0)).unwrap();

    assert!(breakdown.hrv <= 30.0);
    assert!((breakdown.hrv - 30.0).abs() < 1e-9);
}

#[test]
fn test_low_hrv_contribution_is_floored_at_10() {
    let today = day(50, 1, 60, 50);
    let breakdown = RecoveryScorer::breakdown(&today, &baseline(60.0, 60.0)).unwrap();

    assert!((breakdown.hrv - 10.0).abs() < 1e-9);
}

#[test]
fn test_lower_rhr_than_baseline_improves_score() {
    let rested = day(80, 60, 50, 80);
    let strained = day(80, 60, 70, 80);
    let reference = baseline(60.0, 60.0);

    let rested_score = RecoveryScorer::score(&rested, &reference).unwrap();
    let strained_score = RecoveryScorer::score(&strained, &reference).unwrap();
    assert!(rested_score > strained_score);
}

#[test]
fn test_maximum_inputs_clamp_to_100() {
    let today = day(100, 900, 30, 100);
    let score = RecoveryScorer::score(&today, &baseline(40.0, 70.0)).unwrap();
    assert_eq!(score, 100);
}

#[test]
fn test_score_is_deterministic() {
    let today = day(73, 58, 61, 88);
    let reference = baseline(64.2, 59.0);

    let first = RecoveryScorer::score(&today, &reference).unwrap();
    for _ in 0..10 {
        assert_eq!(RecoveryScorer::score(&today, &reference).unwrap(), first);
    }
}

#[test]
fn test_score_stays_within_range() {
    for sleep in [0_u8, 37, 100] {
        for hrv in [1_u32, 45, 300] {
            for rhr in [20_u32, 60, 200] {
                for readiness in [0_u8, 64, 100] {
                    for avg_hrv in [0.5, 60.0, 500.0] {
                        let today = day(sleep, hrv, rhr, readiness);
                        let score =
                            RecoveryScorer::score(&today, &baseline(avg_hrv, 60.0)).unwrap();
                        assert!(score <= 100, "score {score} out of range");
                    }
                }
            }
        }
    }
}

#[test]
fn test_zero_baseline_hrv_is_rejected() {
    let today = day(80, 60, 55, 80);
    let error = RecoveryScorer::score(&today, &baseline(0.0, 55.0)).unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidBaseline);
    assert_eq!(error.http_status(), 422);
}

#[test]
fn test_nan_baseline_hrv_is_rejected() {
    let today = day(80, 60, 55, 80);
    let error = RecoveryScorer::score(&today, &baseline(f64::NAN, 55.0)).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidBaseline);
}

#[test]
fn test_zero_baseline_rhr_scores_at_ratio_floor() {
    let today = day(80, 60, 55, 80);
    let breakdown = RecoveryScorer::breakdown(&today, &baseline(60.0, 0.0)).unwrap();

    assert!((breakdown.rhr - 0.5 * 13.33).abs() < 1e-9);
    // 32 + 20 + 6.665 + 8
    assert_eq!(breakdown.total, 67);
}

#[test]
fn test_infinite_baseline_rhr_is_rejected() {
    let today = day(80, 60, 55, 80);
    let error = RecoveryScorer::score(&today, &baseline(60.0, f64::INFINITY)).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidBaseline);
}

#[test]
fn test_zero_resting_heart_rate_is_rejected() {
    let today = day(80, 60, 0, 80);
    let error = RecoveryScorer::score(&today, &baseline(60.0, 55.0)).unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidBaseline);
    assert!(error.message.contains("2025-06-02"));
}

#[test]
fn test_baseline_from_trend_averages_hrv() {
    let today = day(80, 70, 58, 80);
    let points: Vec<TrendPoint> = [50.0, 60.0, 70.0]
        .into_iter()
        .enumerate()
        .map(|(i, value)| TrendPoint {
            date: NaiveDate::from_ymd_opt(2025, 6, 1 + i as u32).unwrap(),
            value,
            label: None,
        })
        .collect();

    let derived = Baseline::from_trend(&points, &today);
    assert!((derived.avg_hrv - 60.0).abs() < 1e-9);
    assert!((derived.avg_rhr - 58.0).abs() < 1e-9);
}

#[test]
fn test_baseline_from_empty_trend_uses_today() {
    let today = day(80, 70, 58, 80);
    let derived = Baseline::from_trend(&[], &today);

    assert!((derived.avg_hrv - 70.0).abs() < 1e-9);
    assert!(RecoveryScorer::score(&today, &derived).is_ok());
}

#[test]
fn test_recovery_bands() {
    assert_eq!(RecoveryBand::from_score(100), RecoveryBand::Green);
    assert_eq!(RecoveryBand::from_score(80), RecoveryBand::Green);
    assert_eq!(RecoveryBand::from_score(79), RecoveryBand::Amber);
    assert_eq!(RecoveryBand::from_score(60), RecoveryBand::Amber);
    assert_eq!(RecoveryBand::from_score(59), RecoveryBand::Red);
    assert_eq!(RecoveryBand::from_score(0), RecoveryBand::Red);

    assert_eq!(serde_json::to_value(RecoveryBand::Amber).unwrap(), "amber");
}
