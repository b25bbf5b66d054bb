// ABOUTME: Replays a recorded workout script through a projector, one state change at a time
// ABOUTME: Drives start, each update, and end in order, awaiting every host call before the next
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult, LiveActivityError};
use crate::models::{InProgressExercise, SessionTotals, WorkoutActivitySnapshot};
use crate::projection::project_snapshot;
use crate::projector::LiveActivityProjector;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// One state of the in-progress session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayStep {
    /// Full exercise list at this point
    pub exercises: Vec<InProgressExercise>,
    /// Rest end time active at this point
    #[serde(default)]
    pub rest_end: Option<DateTime<Utc>>,
}

/// A recorded workout: initial state, subsequent states, and whether it ended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Workout title
    pub title: String,
    /// Workout start time
    pub started_at: DateTime<Utc>,
    /// Exercise list when the workout started
    #[serde(default)]
    pub exercises: Vec<InProgressExercise>,
    /// States after each edit, in order
    #[serde(default)]
    pub steps: Vec<ReplayStep>,
    /// Dismiss the activity after the last step
    #[serde(default = "default_end")]
    pub end: bool,
}

const fn default_end() -> bool {
    true
}

/// What a replay did
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaySummary {
    /// Whether a host session was obtained
    pub started: bool,
    /// Updates the host accepted
    pub updates_pushed: usize,
    /// Whether the session was dismissed
    pub ended: bool,
    /// Snapshot for the last state in the script
    pub final_snapshot: WorkoutActivitySnapshot,
}

impl ReplayScript {
    /// Parse a script from JSON text
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed JSON
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a script file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub async fn load(path: &Path) -> AppResult<Self> {
        let contents = tokio::fs::read_to_string(path).await.map_err(|error| {
            AppError::invalid_input(format!("cannot read {}", path.display())).with_source(error)
        })?;
        Self::from_json(&contents)
    }

    /// Exercise list for the last state in the script
    #[must_use]
    pub fn final_exercises(&self) -> &[InProgressExercise] {
        self.steps
            .last()
            .map_or(self.exercises.as_slice(), |step| step.exercises.as_slice())
    }

    /// Snapshot for the last state in the script
    #[must_use]
    pub fn final_snapshot(&self) -> WorkoutActivitySnapshot {
        let rest_end = self.steps.last().and_then(|step| step.rest_end);
        project_snapshot(self.final_exercises(), &self.title, self.started_at, rest_end)
    }

    /// Totals for the last state in the script
    #[must_use]
    pub fn final_totals(&self) -> SessionTotals {
        SessionTotals::from_exercises(self.final_exercises())
    }

    /// Drive `projector` through the script
    ///
    /// # Errors
    ///
    /// Returns an error if the projector already holds a session, or if the
    /// host refuses an update or dismissal
    pub async fn run(
        &self,
        projector: &LiveActivityProjector,
    ) -> Result<ReplaySummary, LiveActivityError> {
        projector
            .start(&self.exercises, &self.title, self.started_at)
            .await?;
        let started = projector.is_active().await;

        let mut updates_pushed = 0;
        for (index, step) in self.steps.iter().enumerate() {
            debug!(step = index + 1, "Replaying step");
            if let Some(completion) = projector
                .update(&step.exercises, &self.title, self.started_at, step.rest_end)
                .await
            {
                completion.wait().await?;
                updates_pushed += 1;
            }
        }

        let mut ended = false;
        if self.end {
            if let Some(completion) = projector.end().await {
                completion.wait().await?;
                ended = true;
            }
        }

        Ok(ReplaySummary {
            started,
            updates_pushed,
            ended,
            final_snapshot: self.final_snapshot(),
        })
    }
}
