// ABOUTME: Wearable metrics providers and trend aggregation for the Health Copilot dashboard
// ABOUTME: Core provider trait, deterministic synthetic provider, and date-range trend builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

#![deny(unsafe_code)]

//! Wearable data provider implementations and core abstractions.
//!
//! The dashboard reads one daily summary per date from a [`WearableProvider`]
//! and reduces ranges of summaries into chart series with [`TrendAggregator`].

pub use health_copilot_core::constants;
pub use health_copilot_core::errors;
pub use health_copilot_core::models;

/// Core provider traits and credentials
pub mod core;
/// Deterministic mock wearable provider
pub mod synthetic_provider;
/// Date-range trend aggregation
pub mod trend_aggregator;

pub use crate::core::{WearableCredentials, WearableProvider};
pub use health_copilot_core::errors::provider::{ProviderError, ProviderResult};
pub use synthetic_provider::SyntheticWearableProvider;
pub use trend_aggregator::{date_range, TrendAggregator};
