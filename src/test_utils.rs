// ABOUTME: Test utilities: a recording fake host and session fixtures
// ABOUTME: Lets projector tests observe every host call and inject host failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::HostError;
use crate::host::{ActivityHandle, ActivityHost, HostEvent, HostSessionConfig};
use crate::models::{InProgressExercise, InProgressSet, WorkoutActivitySnapshot};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, Notify};

/// Fake host that records calls and can be told to fail
#[derive(Default)]
pub struct RecordingHost {
    events: Mutex<Vec<HostEvent>>,
    session_requests: AtomicUsize,
    request_failure: Mutex<Option<HostError>>,
    push_failure: Mutex<Option<HostError>>,
    update_gate: Mutex<Option<Arc<Notify>>>,
    next_id: AtomicUsize,
}

impl RecordingHost {
    /// Host that accepts everything
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Host that refuses every session request with `error`
    #[must_use]
    pub fn rejecting(error: HostError) -> Self {
        Self {
            request_failure: Mutex::new(Some(error)),
            ..Self::default()
        }
    }

    /// Make every subsequent push and end fail with `error`
    pub async fn fail_pushes_with(&self, error: HostError) {
        *self.push_failure.lock().await = Some(error);
    }

    /// Make every subsequent `push_update` wait for a permit on the returned
    /// gate before it is recorded
    pub async fn hold_updates(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.update_gate.lock().await = Some(Arc::clone(&gate));
        gate
    }

    /// Every event recorded so far
    pub async fn events(&self) -> Vec<HostEvent> {
        self.events.lock().await.clone()
    }

    /// Snapshots pushed through `push_update`, in order
    pub async fn updates(&self) -> Vec<WorkoutActivitySnapshot> {
        self.events
            .lock()
            .await
            .iter()
            .filter_map(|event| match event {
                HostEvent::Updated { snapshot, .. } => Some(snapshot.clone()),
                HostEvent::Started { .. } | HostEvent::Ended { .. } => None,
            })
            .collect()
    }

    /// Number of `request_session` calls, successful or not
    #[must_use]
    pub fn session_requests(&self) -> usize {
        self.session_requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ActivityHost for RecordingHost {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn request_session(
        &self,
        _config: &HostSessionConfig,
        initial: &WorkoutActivitySnapshot,
    ) -> Result<ActivityHandle, HostError> {
        self.session_requests.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.request_failure.lock().await.clone() {
            return Err(error);
        }

        let id = format!("activity-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.events.lock().await.push(HostEvent::Started {
            activity_id: id.clone(),
            snapshot: initial.clone(),
        });
        Ok(ActivityHandle::new(id))
    }

    async fn push_update(
        &self,
        handle: &ActivityHandle,
        snapshot: &WorkoutActivitySnapshot,
    ) -> Result<(), HostError> {
        let gate = self.update_gate.lock().await.clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if let Some(error) = self.push_failure.lock().await.clone() {
            return Err(error);
        }
        self.events.lock().await.push(HostEvent::Updated {
            activity_id: handle.id().to_owned(),
            snapshot: snapshot.clone(),
        });
        Ok(())
    }

    async fn end_session(&self, handle: &ActivityHandle) -> Result<(), HostError> {
        if let Some(error) = self.push_failure.lock().await.clone() {
            return Err(error);
        }
        self.events.lock().await.push(HostEvent::Ended {
            activity_id: handle.id().to_owned(),
        });
        Ok(())
    }
}

/// Squat session with the first set done and the second pending
#[must_use]
pub fn create_squat_session() -> Vec<InProgressExercise> {
    vec![InProgressExercise::new("Squat").with_sets(vec![
        InProgressSet::new(5, 225.0).completed(),
        InProgressSet::new(5, 225.0),
    ])]
}

/// Session where every set of every exercise is done
#[must_use]
pub fn create_finished_session() -> Vec<InProgressExercise> {
    vec![InProgressExercise::new("Bench").with_sets(vec![InProgressSet::new(8, 135.0).completed()])]
}
