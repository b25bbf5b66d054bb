// ABOUTME: Data models for in-progress workouts and the live-activity snapshot
// ABOUTME: Re-exports session and snapshot types used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Mutable in-progress session types (exercises, sets, rest timers, totals)
pub mod session;

/// Immutable snapshot pushed to the live-activity host
pub mod snapshot;

pub use session::{
    ExerciseCategory, InProgressExercise, InProgressSet, RepRange, RestDuration, SessionTotals,
};
pub use snapshot::{ActivityProgress, CurrentSet, WorkoutActivitySnapshot};
