// ABOUTME: Pure derivation of live-activity progress and snapshots from in-progress session state
// ABOUTME: Finds the current set (first incomplete in exercise-then-set order) and computes rest end times
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{ActivityProgress, CurrentSet, InProgressExercise, WorkoutActivitySnapshot};
use chrono::{DateTime, Utc};

/// Locate the current set of a session
///
/// Exercises are scanned in order and, within each, sets in order; the first
/// incomplete set is current. An empty list is `NoExercises`; a nonempty list
/// with nothing left to do is `AllComplete`.
#[must_use]
pub fn derive_progress(exercises: &[InProgressExercise]) -> ActivityProgress {
    if exercises.is_empty() {
        return ActivityProgress::NoExercises;
    }

    exercises
        .iter()
        .find_map(|exercise| {
            exercise
                .first_incomplete()
                .map(|(index, set)| CurrentSet {
                    exercise_name: exercise.name.clone(),
                    set_number: u32::try_from(index + 1).unwrap_or(u32::MAX),
                    reps: set.reps,
                    weight: set.weight,
                })
        })
        .map_or(ActivityProgress::AllComplete, ActivityProgress::InProgress)
}

/// Build a fresh snapshot for the current session state
#[must_use]
pub fn project_snapshot(
    exercises: &[InProgressExercise],
    workout_title: &str,
    start_time: DateTime<Utc>,
    rest_end_time: Option<DateTime<Utc>>,
) -> WorkoutActivitySnapshot {
    WorkoutActivitySnapshot::new(
        &derive_progress(exercises),
        workout_title,
        start_time,
        rest_end_time,
    )
}

/// When the rest after a just-completed set ends
///
/// Honors the exercise's shared-rest flag. Returns `None` for unknown indices
/// or when the set has no rest configured.
#[must_use]
pub fn rest_end_after(
    exercises: &[InProgressExercise],
    exercise_index: usize,
    set_index: usize,
    completed_at: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    exercises
        .get(exercise_index)?
        .rest_for_set(set_index)?
        .ends_at(completed_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InProgressSet, RestDuration};
    use chrono::TimeZone;

    #[test]
    fn test_skips_exercises_without_sets() {
        let exercises = vec![
            InProgressExercise::new("Warmup"),
            InProgressExercise::new("Deadlift").with_sets(vec![InProgressSet::new(3, 315.0)]),
        ];
        let progress = derive_progress(&exercises);
        let current = progress.current().unwrap();
        assert_eq!(current.exercise_name, "Deadlift");
        assert_eq!(current.set_number, 1);
    }

    #[test]
    fn test_exercises_with_no_sets_count_as_complete() {
        let exercises = vec![InProgressExercise::new("Warmup")];
        assert_eq!(derive_progress(&exercises), ActivityProgress::AllComplete);
    }

    #[test]
    fn test_rest_end_after_completed_set() {
        let done_at = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
        let exercises = vec![InProgressExercise::new("Press").with_sets(vec![
            InProgressSet::new(5, 95.0)
                .with_rest(RestDuration::new(1, 30))
                .completed(),
            InProgressSet::new(5, 95.0),
        ])];

        assert_eq!(
            rest_end_after(&exercises, 0, 0, done_at),
            Some(Utc.with_ymd_and_hms(2025, 3, 1, 10, 1, 30).unwrap())
        );
        assert_eq!(rest_end_after(&exercises, 0, 1, done_at), None);
        assert_eq!(rest_end_after(&exercises, 3, 0, done_at), None);
    }
}
