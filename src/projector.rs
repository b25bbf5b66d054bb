// ABOUTME: Live-activity projector that owns the host session handle for one workout
// ABOUTME: Starts, updates, and ends the host activity with best-effort, non-fatal semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Live-Activity Projector
//!
//! One projector exists per workout session. It is constructed with the host
//! it talks to and passed by reference to whatever drives updates.
//!
//! Failures here never fail the workout: a host that refuses to start a
//! session just means there is no live activity, and `update`/`end` without a
//! session are silent no-ops. Pushes run on the tokio runtime and return a
//! [`PushCompletion`] the caller may await to observe the host's answer, or
//! drop to fire and forget.
//!
//! Pushes reach the host in the order they were issued: each one waits for
//! its predecessor to finish, so an update issued before `end` can never land
//! after the dismissal.

use crate::config::LiveActivityConfig;
use crate::errors::{HostError, LiveActivityError};
use crate::host::{ActivityHandle, ActivityHost};
use crate::models::InProgressExercise;
use crate::projection::project_snapshot;
use chrono::{DateTime, Utc};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Which host call a completion belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushKind {
    /// `push_update`
    Update,
    /// `end_session`
    End,
}

/// Completion signal for a background host call
///
/// Dropping it detaches the task; the push still happens.
#[derive(Debug)]
pub struct PushCompletion {
    kind: PushKind,
    activity_id: String,
    task: JoinHandle<Result<(), HostError>>,
}

impl PushCompletion {
    fn spawn<F>(kind: PushKind, activity_id: String, order: PushOrder, call: F) -> Self
    where
        F: Future<Output = Result<(), HostError>> + Send + 'static,
    {
        let log_id = activity_id.clone();
        let PushOrder { after, done } = order;
        let task = tokio::spawn(async move {
            if let Some(previous) = after {
                // Err means the previous task is gone; nothing left to wait for.
                let _ = previous.await;
            }
            let result = call.await;
            if let Err(error) = &result {
                warn!(
                    activity.id = %log_id,
                    push.kind = ?kind,
                    error = %error,
                    "Live activity host call failed"
                );
            }
            let _ = done.send(());
            result
        });

        Self {
            kind,
            activity_id,
            task,
        }
    }

    /// Which host call this is
    #[must_use]
    pub const fn kind(&self) -> PushKind {
        self.kind
    }

    /// Activity the call targets
    #[must_use]
    pub fn activity_id(&self) -> &str {
        &self.activity_id
    }

    /// Wait for the host to answer
    ///
    /// # Errors
    ///
    /// Returns `Host` if the host refused the call, or `TaskFailed` if the
    /// background task panicked or was cancelled
    pub async fn wait(self) -> Result<(), LiveActivityError> {
        match self.task.await {
            Ok(result) => result.map_err(LiveActivityError::from),
            Err(join_error) => Err(LiveActivityError::TaskFailed(join_error.to_string())),
        }
    }
}

/// Position of a push in the issue order
struct PushOrder {
    after: Option<oneshot::Receiver<()>>,
    done: oneshot::Sender<()>,
}

/// Projects in-progress workout state onto a host live activity
pub struct LiveActivityProjector {
    host: Arc<dyn ActivityHost>,
    config: LiveActivityConfig,
    handle: Mutex<Option<ActivityHandle>>,
    // Fires when the most recently issued push has finished
    last_push: Mutex<Option<oneshot::Receiver<()>>>,
}

impl LiveActivityProjector {
    /// Create a projector with no live session
    #[must_use]
    pub fn new(host: Arc<dyn ActivityHost>, config: LiveActivityConfig) -> Self {
        Self {
            host,
            config,
            handle: Mutex::new(None),
            last_push: Mutex::new(None),
        }
    }

    // Callers hold the handle lock so issue order matches handle order.
    async fn next_push_order(&self) -> PushOrder {
        let (done, finished) = oneshot::channel();
        let after = self.last_push.lock().await.replace(finished);
        PushOrder { after, done }
    }

    /// Configuration in effect
    #[must_use]
    pub const fn config(&self) -> &LiveActivityConfig {
        &self.config
    }

    /// Whether a host session is currently held
    pub async fn is_active(&self) -> bool {
        self.handle.lock().await.is_some()
    }

    /// Handle of the live session, if any
    pub async fn handle(&self) -> Option<ActivityHandle> {
        self.handle.lock().await.clone()
    }

    /// Request a host session showing the current state
    ///
    /// Host refusal is logged and leaves the projector without a session; it
    /// is not reported to the caller.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyStarted` if this projector already holds a session. The
    /// existing session is left untouched.
    pub async fn start(
        &self,
        exercises: &[InProgressExercise],
        workout_title: &str,
        start_time: DateTime<Utc>,
    ) -> Result<(), LiveActivityError> {
        // Held across the host call so concurrent starts cannot both allocate.
        let mut slot = self.handle.lock().await;
        if let Some(existing) = slot.as_ref() {
            warn!(activity.id = %existing, "Live activity start requested while one is live");
            return Err(LiveActivityError::AlreadyStarted {
                activity_id: existing.id().to_owned(),
            });
        }

        if !self.config.enabled {
            debug!("Live activities disabled by configuration; skipping start");
            return Ok(());
        }

        let snapshot = project_snapshot(exercises, workout_title, start_time, None);
        match self
            .host
            .request_session(&self.config.session_config(), &snapshot)
            .await
        {
            Ok(handle) => {
                info!(
                    activity.id = %handle,
                    host = self.host.name(),
                    workout.title = %workout_title,
                    "Live activity started"
                );
                *slot = Some(handle);
            }
            Err(error) => {
                warn!(
                    host = self.host.name(),
                    error = %error,
                    "Could not start live activity; continuing without it"
                );
            }
        }
        Ok(())
    }

    /// Push a recomputed snapshot to the live session
    ///
    /// Returns `None` without contacting the host when no session is held.
    pub async fn update(
        &self,
        exercises: &[InProgressExercise],
        workout_title: &str,
        start_time: DateTime<Utc>,
        rest_end_time: Option<DateTime<Utc>>,
    ) -> Option<PushCompletion> {
        let slot = self.handle.lock().await;
        let handle = slot.clone()?;
        let order = self.next_push_order().await;
        drop(slot);

        let snapshot = project_snapshot(exercises, workout_title, start_time, rest_end_time);

        debug!(
            activity.id = %handle,
            exercise = %snapshot.exercise_name,
            set.number = snapshot.set_number,
            resting = snapshot.end_date.is_some(),
            "Pushing live activity update"
        );

        let host = Arc::clone(&self.host);
        let activity_id = handle.id().to_owned();
        Some(PushCompletion::spawn(
            PushKind::Update,
            activity_id,
            order,
            async move { host.push_update(&handle, &snapshot).await },
        ))
    }

    /// Dismiss the live session immediately and release the handle
    ///
    /// Returns `None` when no session is held; calling it again is harmless.
    pub async fn end(&self) -> Option<PushCompletion> {
        let mut slot = self.handle.lock().await;
        let handle = slot.take()?;
        let order = self.next_push_order().await;
        drop(slot);
        info!(activity.id = %handle, "Ending live activity");

        let host = Arc::clone(&self.host);
        let activity_id = handle.id().to_owned();
        Some(PushCompletion::spawn(
            PushKind::End,
            activity_id,
            order,
            async move { host.end_session(&handle).await },
        ))
    }
}
