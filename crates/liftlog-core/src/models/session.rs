// ABOUTME: In-progress workout session models: exercises, sets, rest durations, totals
// ABOUTME: Transient state edited by the workout flow and read by the live-activity projector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult, ErrorCode};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Broad exercise grouping used for display and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    /// Resistance training (default)
    #[default]
    Strength,
    /// Conditioning work
    Cardio,
    /// Stretching and mobility drills
    Mobility,
    /// Anything else
    Other,
}

/// Target repetition range for an exercise (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepRange {
    /// Lower bound
    pub min: u32,
    /// Upper bound
    pub max: u32,
}

impl RepRange {
    /// Create a validated rep range
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if `min` exceeds `max`
    pub fn new(min: u32, max: u32) -> AppResult<Self> {
        if min > max {
            return Err(AppError::new(
                ErrorCode::ValueOutOfRange,
                format!("rep range minimum {min} exceeds maximum {max}"),
            ));
        }
        Ok(Self { min, max })
    }

    /// Whether `reps` falls inside the range
    #[must_use]
    pub const fn contains(&self, reps: u32) -> bool {
        reps >= self.min && reps <= self.max
    }
}

/// Rest period after a set, stored the way the user enters it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RestDuration {
    /// Whole minutes
    pub minutes: u32,
    /// Additional seconds (may exceed 59; normalized on conversion)
    pub seconds: u32,
}

impl RestDuration {
    /// Create a rest duration
    #[must_use]
    pub const fn new(minutes: u32, seconds: u32) -> Self {
        Self { minutes, seconds }
    }

    /// Total length in seconds
    #[must_use]
    pub const fn total_seconds(&self) -> i64 {
        self.minutes as i64 * 60 + self.seconds as i64
    }

    /// True when no rest is configured
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }

    /// Length as a `chrono::Duration`
    #[must_use]
    pub fn to_duration(&self) -> Duration {
        Duration::seconds(self.total_seconds())
    }

    /// When a rest starting at `from` ends, or `None` if there is no rest
    #[must_use]
    pub fn ends_at(&self, from: DateTime<Utc>) -> Option<DateTime<Utc>> {
        if self.is_zero() {
            None
        } else {
            Some(from + self.to_duration())
        }
    }
}

/// One set being logged in the current workout
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InProgressSet {
    /// Target or logged repetitions
    pub reps: u32,
    /// Target or logged weight
    pub weight: f64,
    /// Rest after this set
    #[serde(default)]
    pub rest: RestDuration,
    /// Whether the user marked the set done
    #[serde(default)]
    pub completed: bool,
}

impl InProgressSet {
    /// Create an incomplete set with no rest
    #[must_use]
    pub const fn new(reps: u32, weight: f64) -> Self {
        Self {
            reps,
            weight,
            rest: RestDuration::new(0, 0),
            completed: false,
        }
    }

    /// Builder: set the rest duration
    #[must_use]
    pub const fn with_rest(mut self, rest: RestDuration) -> Self {
        self.rest = rest;
        self
    }

    /// Builder: mark as completed
    #[must_use]
    pub const fn completed(mut self) -> Self {
        self.completed = true;
        self
    }

    /// Reps times weight
    #[must_use]
    pub fn volume(&self) -> f64 {
        f64::from(self.reps) * self.weight
    }
}

/// An exercise in the current workout with its ordered sets
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InProgressExercise {
    /// Display name
    pub name: String,
    /// Exercise grouping
    #[serde(default)]
    pub category: ExerciseCategory,
    /// Target repetition range, if the user set one
    #[serde(default)]
    pub rep_range: Option<RepRange>,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
    /// When set, every set rests for the first set's duration
    #[serde(default)]
    pub same_rest_for_all_sets: bool,
    /// Sets in logging order
    #[serde(default)]
    pub sets: Vec<InProgressSet>,
}

impl InProgressExercise {
    /// Create an exercise with no sets
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder: replace the set list
    #[must_use]
    pub fn with_sets(mut self, sets: Vec<InProgressSet>) -> Self {
        self.sets = sets;
        self
    }

    /// Builder: share the first set's rest across all sets
    #[must_use]
    pub fn with_shared_rest(mut self) -> Self {
        self.same_rest_for_all_sets = true;
        self
    }

    /// First set not yet completed, with its zero-based index
    #[must_use]
    pub fn first_incomplete(&self) -> Option<(usize, &InProgressSet)> {
        self.sets.iter().enumerate().find(|(_, set)| !set.completed)
    }

    /// True when every set is completed (vacuously true with no sets)
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.first_incomplete().is_none()
    }

    /// Rest that applies after the set at `index`
    #[must_use]
    pub fn rest_for_set(&self, index: usize) -> Option<RestDuration> {
        let set = self.sets.get(index)?;
        if self.same_rest_for_all_sets {
            self.sets.first().map(|first| first.rest)
        } else {
            Some(set.rest)
        }
    }
}

/// Aggregate counters over an in-progress session
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionTotals {
    /// Number of exercises in the session
    pub exercise_count: usize,
    /// Number of sets across all exercises
    pub total_sets: usize,
    /// Number of completed sets
    pub completed_sets: usize,
    /// Sum of reps times weight over completed strength sets
    pub completed_volume: f64,
    /// Completed sets whose reps fall outside the exercise's target range
    pub off_target_sets: usize,
}

impl SessionTotals {
    /// Compute totals for a session
    ///
    /// Only `Strength` exercises contribute volume; for the other categories
    /// the weight field is not a load.
    #[must_use]
    pub fn from_exercises(exercises: &[InProgressExercise]) -> Self {
        exercises.iter().fold(
            Self {
                exercise_count: exercises.len(),
                ..Self::default()
            },
            |mut totals, exercise| {
                for set in &exercise.sets {
                    totals.total_sets += 1;
                    if !set.completed {
                        continue;
                    }
                    totals.completed_sets += 1;
                    if exercise.category == ExerciseCategory::Strength {
                        totals.completed_volume += set.volume();
                    }
                    if exercise
                        .rep_range
                        .is_some_and(|range| !range.contains(set.reps))
                    {
                        totals.off_target_sets += 1;
                    }
                }
                totals
            },
        )
    }

    /// Sets still to do
    #[must_use]
    pub const fn remaining_sets(&self) -> usize {
        self.total_sets - self.completed_sets
    }
}
