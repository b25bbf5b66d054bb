// ABOUTME: Live-activity snapshot wire schema and the three-way progress state it encodes
// ABOUTME: The snapshot is serialized to the host, so field names follow the host's camelCase shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The set the user should perform next
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentSet {
    /// Name of the exercise the set belongs to
    pub exercise_name: String,
    /// 1-based position of the set within its exercise
    pub set_number: u32,
    /// Target repetitions
    pub reps: u32,
    /// Target weight
    pub weight: f64,
}

/// Where the workout stands, as shown on the live activity
///
/// "No exercises" and "all complete" both produce an empty exercise name on the
/// wire but render as different messages, so they are separate variants here.
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityProgress {
    /// The session has no exercises yet
    NoExercises,
    /// Every set of every exercise is done
    AllComplete,
    /// At least one set remains; this is the first one
    InProgress(CurrentSet),
}

impl ActivityProgress {
    /// The current set, if any
    #[must_use]
    pub const fn current(&self) -> Option<&CurrentSet> {
        match self {
            Self::InProgress(current) => Some(current),
            Self::NoExercises | Self::AllComplete => None,
        }
    }
}

/// Immutable summary of workout progress pushed to the live-activity host
///
/// Every field except `end_date` is required on the wire. Snapshots are always
/// rebuilt from scratch, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutActivitySnapshot {
    /// Current exercise name, empty when nothing is in progress
    pub exercise_name: String,
    /// 1-based index of the current set, 0 when nothing is in progress
    pub set_number: u32,
    /// Target reps of the current set
    pub set_reps: u32,
    /// Target weight of the current set; always finite, NaN and infinities
    /// are sent as 0 because JSON has no encoding for them
    pub set_weight: f64,
    /// Workout start time
    pub date: DateTime<Utc>,
    /// True only when the session has no exercises at all
    pub is_empty: bool,
    /// Workout title
    pub workout_title: String,
    /// When the running rest period ends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

impl WorkoutActivitySnapshot {
    /// Build the wire snapshot for a progress state
    pub fn new(
        progress: &ActivityProgress,
        workout_title: impl Into<String>,
        date: DateTime<Utc>,
        end_date: Option<DateTime<Utc>>,
    ) -> Self {
        let (exercise_name, set_number, set_reps, set_weight) = match progress.current() {
            Some(current) => (
                current.exercise_name.clone(),
                current.set_number,
                current.reps,
                if current.weight.is_finite() {
                    current.weight
                } else {
                    0.0
                },
            ),
            None => (String::new(), 0, 0, 0.0),
        };

        Self {
            exercise_name,
            set_number,
            set_reps,
            set_weight,
            date,
            is_empty: matches!(progress, ActivityProgress::NoExercises),
            workout_title: workout_title.into(),
            end_date,
        }
    }

    /// Recover the three-way progress state from the wire flags
    #[must_use]
    pub fn progress(&self) -> ActivityProgress {
        if self.is_empty {
            ActivityProgress::NoExercises
        } else if self.exercise_name.is_empty() {
            ActivityProgress::AllComplete
        } else {
            ActivityProgress::InProgress(CurrentSet {
                exercise_name: self.exercise_name.clone(),
                set_number: self.set_number,
                reps: self.set_reps,
                weight: self.set_weight,
            })
        }
    }
}
