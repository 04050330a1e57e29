// ABOUTME: Aggregates per-day wearable summaries into chronological trend series
// ABOUTME: Fetches a date range concurrently and skips days whose fetch fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use futures_util::future::join_all;
use health_copilot_core::models::{MetricsSummary, TrendMetric, TrendPoint};
use tracing::{debug, warn};

use crate::core::WearableProvider;

/// Inclusive range of `range_days` dates ending at `today`, oldest first
///
/// `range_days == 0` yields an empty range.
#[must_use]
pub fn date_range(today: NaiveDate, range_days: u32) -> Vec<NaiveDate> {
    (0..range_days)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(u64::from(offset))))
        .collect()
}

/// Builds trend series on top of a [`WearableProvider`]
///
/// Per-day fetches are issued concurrently. Results are assembled by date index,
/// not by completion order, so output is always chronological. A day whose fetch
/// fails is logged and omitted; callers must accept series shorter than requested.
pub struct TrendAggregator<'a> {
    provider: &'a dyn WearableProvider,
}

impl<'a> TrendAggregator<'a> {
    /// Aggregate over the given provider
    #[must_use]
    pub const fn new(provider: &'a dyn WearableProvider) -> Self {
        Self { provider }
    }

    /// One trend series for `metric` over the last `range_days` days
    pub async fn get_trend(&self, metric: TrendMetric, range_days: u32) -> Vec<TrendPoint> {
        self.fetch_range(range_days)
            .await
            .iter()
            .map(|(date, summary)| point_for(metric, *date, summary))
            .collect()
    }

    /// Several trend series from a single pass over the range
    pub async fn get_trends(
        &self,
        metrics: &[TrendMetric],
        range_days: u32,
    ) -> HashMap<TrendMetric, Vec<TrendPoint>> {
        let days = self.fetch_range(range_days).await;

        metrics
            .iter()
            .map(|metric| {
                let series = days
                    .iter()
                    .map(|(date, summary)| point_for(*metric, *date, summary))
                    .collect();
                (*metric, series)
            })
            .collect()
    }

    async fn fetch_range(&self, range_days: u32) -> Vec<(NaiveDate, MetricsSummary)> {
        let dates = date_range(self.provider.today(), range_days);
        let results = join_all(dates.iter().map(|date| self.provider.get_summary(*date))).await;

        let days: Vec<_> = dates
            .into_iter()
            .zip(results)
            .filter_map(|(date, result)| match result {
                Ok(summary) => Some((date, summary)),
                Err(e) => {
                    warn!(
                        provider = self.provider.name(),
                        %date,
                        error = %e,
                        "Failed to fetch metrics for day, skipping"
                    );
                    None
                }
            })
            .collect();

        debug!(
            provider = self.provider.name(),
            requested = range_days,
            fetched = days.len(),
            "Fetched metrics range"
        );

        days
    }
}

// The requested date is authoritative so a provider echoing a wrong date
// cannot break ordering.
fn point_for(metric: TrendMetric, date: NaiveDate, summary: &MetricsSummary) -> TrendPoint {
    TrendPoint {
        date,
        ..metric.point(summary)
    }
}
