// ABOUTME: Widget/lock-screen rendering of a live-activity snapshot into display text
// ABOUTME: Produces headline, detail line, rest countdown, and workout clock strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::WeightUnit;
use crate::models::{ActivityProgress, SessionTotals, WorkoutActivitySnapshot};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Text a widget shows for one snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityView {
    /// Workout title
    pub title: String,
    /// Exercise name or status message
    pub headline: String,
    /// Set details or a call to action
    pub detail: String,
    /// Rest end, present only while a rest is scheduled
    pub rest_until: Option<DateTime<Utc>>,
}

impl ActivityView {
    /// Render a snapshot
    #[must_use]
    pub fn from_snapshot(snapshot: &WorkoutActivitySnapshot, unit: WeightUnit) -> Self {
        let (headline, detail) = match snapshot.progress() {
            ActivityProgress::NoExercises => (
                "No exercises yet".to_owned(),
                "Add an exercise to get started".to_owned(),
            ),
            ActivityProgress::AllComplete => (
                "All exercises complete".to_owned(),
                "Finish your workout".to_owned(),
            ),
            ActivityProgress::InProgress(current) => (
                current.exercise_name,
                format!(
                    "Set {} \u{b7} {} reps \u{d7} {} {}",
                    current.set_number,
                    current.reps,
                    format_weight(current.weight),
                    unit
                ),
            ),
        };

        Self {
            title: snapshot.workout_title.clone(),
            headline,
            detail,
            rest_until: snapshot.end_date,
        }
    }
}

/// Rest left at `now`, or `None` when no rest is running
#[must_use]
pub fn rest_remaining(snapshot: &WorkoutActivitySnapshot, now: DateTime<Utc>) -> Option<Duration> {
    let remaining = snapshot.end_date? - now;
    (remaining > Duration::zero()).then_some(remaining)
}

/// Workout clock at `now`; never negative
#[must_use]
pub fn elapsed(snapshot: &WorkoutActivitySnapshot, now: DateTime<Utc>) -> Duration {
    (now - snapshot.date).max(Duration::zero())
}

/// `m:ss` below an hour, `h:mm:ss` above
#[must_use]
pub fn format_countdown(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Summary line such as `Sets 3/5 · volume 1925 lb`
///
/// Completed sets outside their target rep range are counted at the end.
#[must_use]
pub fn format_totals(totals: &SessionTotals, unit: WeightUnit) -> String {
    let line = format!(
        "Sets {}/{} \u{b7} volume {} {}",
        totals.completed_sets,
        totals.total_sets,
        format_weight(totals.completed_volume),
        unit
    );
    match totals.off_target_sets {
        0 => line,
        1 => format!("{line} \u{b7} 1 set off target"),
        count => format!("{line} \u{b7} {count} sets off target"),
    }
}

/// Integral weights print without a decimal point
#[must_use]
pub fn format_weight(weight: f64) -> String {
    if weight.fract().abs() < f64::EPSILON && weight.abs() < 1e9 {
        format!("{weight:.0}")
    } else {
        let trimmed = format!("{weight:.2}");
        trimmed.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(225.0), "225");
        assert_eq!(format_weight(102.5), "102.5");
        assert_eq!(format_weight(20.25), "20.25");
        assert_eq!(format_weight(0.0), "0");
    }

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(Duration::seconds(0)), "0:00");
        assert_eq!(format_countdown(Duration::seconds(95)), "1:35");
        assert_eq!(format_countdown(Duration::seconds(3725)), "1:02:05");
        assert_eq!(format_countdown(Duration::seconds(-4)), "0:00");
    }
}
