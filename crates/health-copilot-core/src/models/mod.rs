// ABOUTME: Core data models for the Health Copilot dashboard
// ABOUTME: Re-exports MetricsSummary, TrendPoint, HealthAction and their enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

//! # Data Models
//!
//! Provider-agnostic representations of the wearable data the dashboard renders.
//!
//! - `MetricsSummary`: one day of sleep, recovery, and activity readings
//! - `TrendPoint`: a single (date, value) chart sample
//! - `HealthAction`: a generated recommendation

mod action;
mod metrics;
mod trend;

pub use action::{
    ActionCategory, ActionPriority, Focus, HealthAction, TimeHorizon, UnknownFocus,
};
pub use metrics::{
    ActivityMetrics, MetricsSummary, MetricsViolation, RecoveryMetrics, SleepMetrics,
    TemperatureMetrics,
};
pub use trend::{TrendMetric, TrendPoint};
