// ABOUTME: Prompt builders for action generation and health chat
// ABOUTME: Embeds the day's metrics into prompts; static instructions are loaded at compile time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

//! # Prompts
//!
//! Static instruction blocks live in markdown files next to this module and are
//! included at compile time. The builders below prepend the metrics for the day.

use std::fmt::Write;

use health_copilot_core::models::{Focus, MetricsSummary};

/// Requirements and JSON template appended to every action generation prompt
pub const ACTION_FORMAT_INSTRUCTIONS: &str = include_str!("action_format.md");

/// Behavioural guidelines appended to the chat system prompt
pub const CHAT_GUIDELINES: &str = include_str!("chat_guidelines.md");

/// Prompt asking for 3-5 evidence-based actions as a JSON array
#[must_use]
pub fn build_action_prompt(metrics: &MetricsSummary, focus: Option<Focus>) -> String {
    let focus_area = focus.map_or_else(String::new, |f| format!(" with a focus on {f}"));
    let sleep = &metrics.sleep;
    let recovery = &metrics.recovery;
    let activity = &metrics.activity;

    let mut prompt = format!(
        "You are a health research assistant. Based on the following health metrics, \
         provide 3-5 evidence-based, actionable recommendations{focus_area}.\n\n\
         **Current Health Metrics:**\n\
         - Sleep: {:.1} hours, Score: {}/100\n\
         \x20 - Deep sleep: {:.1}h, REM: {:.1}h\n\
         - Recovery:\n\
         \x20 - HRV: {}\n\
         \x20 - Resting Heart Rate: {} bpm\n\
         \x20 - Readiness: {}/100\n\
         - Activity: {} steps, {} active minutes\n",
        sleep.duration,
        sleep.score,
        sleep.deep_sleep,
        sleep.rem_sleep,
        recovery.hrv_score,
        recovery.resting_heart_rate,
        recovery.readiness_score,
        activity.steps,
        activity.active_minutes,
    );

    if let Some(temperature) = &metrics.temperature {
        let _ = writeln!(
            prompt,
            "- Temperature deviation: {}°C",
            temperature.deviation
        );
    }

    prompt.push('\n');
    prompt.push_str(ACTION_FORMAT_INSTRUCTIONS);
    prompt
}

/// System prompt grounding the chat assistant in today's metrics
#[must_use]
pub fn build_chat_system_prompt(metrics: &MetricsSummary) -> String {
    let sleep = &metrics.sleep;
    let recovery = &metrics.recovery;
    let activity = &metrics.activity;

    let mut prompt = format!(
        "You are a knowledgeable health assistant with access to the user's current health \
         data from their Ultrahuman Ring. Be helpful, supportive, and evidence-based in your \
         responses.\n\n\
         **Current Health Data ({}):**\n\
         - Sleep: {:.1} hours, Score: {}/100\n\
         \x20 - Deep sleep: {:.1}h\n\
         \x20 - REM sleep: {:.1}h\n\
         \x20 - Light sleep: {:.1}h\n\
         - Recovery:\n\
         \x20 - HRV: {}\n\
         \x20 - Resting Heart Rate: {} bpm\n\
         \x20 - Readiness Score: {}/100\n\
         - Activity:\n\
         \x20 - Steps: {}\n\
         \x20 - Active Minutes: {}\n",
        metrics.date,
        sleep.duration,
        sleep.score,
        sleep.deep_sleep,
        sleep.rem_sleep,
        sleep.light_sleep,
        recovery.hrv_score,
        recovery.resting_heart_rate,
        recovery.readiness_score,
        activity.steps,
        activity.active_minutes,
    );

    if let Some(temperature) = &metrics.temperature {
        let _ = writeln!(
            prompt,
            "- Temperature Deviation: {}°C",
            temperature.deviation
        );
    }

    prompt.push('\n');
    prompt.push_str(CHAT_GUIDELINES);
    prompt
}
