//! Human-readable formatting for dates, weights and sets.

use chrono::{DateTime, Utc};

use crate::model::{SetResult, Trend};

/// Format how long ago `timestamp` was, in whole elapsed days.
///
/// Anything less than 24 hours old (or in the future) is "today".
pub fn format_days_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = now.signed_duration_since(timestamp).num_days();
    match days {
        d if d <= 0 => "today".to_string(),
        1 => "1 day ago".to_string(),
        d => format!("{} days ago", d),
    }
}

/// Format a weight without a trailing `.0` for whole numbers.
pub fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 && weight.abs() < 1e15 {
        format!("{}", weight as i64)
    } else {
        format!("{}", weight)
    }
}

/// Format a slot as `weight x reps`, with `-` for absent values.
pub fn format_set(slot: Option<&SetResult>) -> String {
    match slot {
        None => "-".to_string(),
        Some(set) => {
            let weight = set.weight.map(format_weight).unwrap_or_else(|| "-".into());
            let reps = set.reps.map(|r| r.to_string()).unwrap_or_else(|| "-".into());
            format!("{} x {}", weight, reps)
        }
    }
}

/// Arrow for a trend.
pub fn format_trend(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "↑",
        Trend::Down => "↓",
        Trend::Equal => "=",
    }
}
