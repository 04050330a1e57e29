// ABOUTME: Recovery scoring engine for the Health Copilot dashboard
// ABOUTME: Pure functions over health metrics, no I/O or shared state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

#![deny(unsafe_code)]

//! # Health Copilot Intelligence
//!
//! Deterministic algorithms that turn wearable readings into derived scores.
//! Identical inputs always yield identical outputs.

/// Composite recovery score, baseline derivation, and score bands
pub mod recovery;

pub use recovery::{Baseline, RecoveryBand, RecoveryBreakdown, RecoveryScorer};
