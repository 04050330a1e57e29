// ABOUTME: Health action recommendation model with category, priority, and time horizon enums
// ABOUTME: Lenient parsers normalize free-form generator output onto the enumerated sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single evidence-backed recommendation
///
/// Created fresh for each generation request and never persisted server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthAction {
    /// Opaque token, unique within one generation call
    pub id: String,
    /// Health domain the action targets
    pub category: ActionCategory,
    /// Short headline
    pub title: String,
    /// One-sentence summary
    pub description: String,
    /// Research backing in prose
    pub evidence_summary: String,
    /// Cited sources
    pub evidence_sources: Vec<String>,
    /// Urgency
    pub priority: ActionPriority,
    /// When the action should be acted on
    pub time_horizon: TimeHorizon,
}

/// Health domain of an action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionCategory {
    /// Sleep hygiene and timing
    Sleep,
    /// Movement and training
    Activity,
    /// Stress management
    Stress,
    /// Diet and hydration
    Nutrition,
    /// Anything else
    #[default]
    General,
}

impl ActionCategory {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sleep => "sleep",
            Self::Activity => "activity",
            Self::Stress => "stress",
            Self::Nutrition => "nutrition",
            Self::General => "general",
        }
    }

    /// Parse a generator-supplied value, falling back to `General`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "sleep" => Self::Sleep,
            "activity" => Self::Activity,
            "stress" => Self::Stress,
            "nutrition" => Self::Nutrition,
            _ => Self::General,
        }
    }
}

/// Urgency of an action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionPriority {
    /// Nice to have
    Low,
    /// Worth doing soon
    #[default]
    Medium,
    /// Do first
    High,
}

impl ActionPriority {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse a generator-supplied value, falling back to `Medium`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }
}

/// Time window for acting on a recommendation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeHorizon {
    /// Today
    Today,
    /// Within the week
    #[default]
    ThisWeek,
    /// Within the month
    ThisMonth,
}

impl TimeHorizon {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::ThisWeek => "this_week",
            Self::ThisMonth => "this_month",
        }
    }

    /// Parse a generator-supplied value, falling back to `ThisWeek`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "today" => Self::Today,
            "this_month" => Self::ThisMonth,
            _ => Self::ThisWeek,
        }
    }
}

/// Optional hint narrowing which domain action generation emphasizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    /// Sleep
    Sleep,
    /// Activity
    Activity,
    /// Stress
    Stress,
    /// Nutrition
    Nutrition,
    /// General wellbeing
    General,
}

impl Focus {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sleep => "sleep",
            Self::Activity => "activity",
            Self::Stress => "stress",
            Self::Nutrition => "nutrition",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a focus string is not one of the known domains
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown focus '{0}'. Expected one of: sleep, activity, stress, nutrition, general")]
pub struct UnknownFocus(pub String);

impl FromStr for Focus {
    type Err = UnknownFocus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sleep" => Ok(Self::Sleep),
            "activity" => Ok(Self::Activity),
            "stress" => Ok(Self::Stress),
            "nutrition" => Ok(Self::Nutrition),
            "general" => Ok(Self::General),
            _ => Err(UnknownFocus(s.to_owned())),
        }
    }
}
