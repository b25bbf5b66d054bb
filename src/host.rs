// ABOUTME: Host presentation channel abstraction for live activities (lock screen / widget)
// ABOUTME: Defines the ActivityHost trait, session handles, host events, and a logging host
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Host Presentation Channel
//!
//! The operating environment that renders live activities is an external
//! collaborator. This module defines the contract the projector consumes:
//!
//! - `request_session` allocates a host-side activity and returns its handle
//! - `push_update` replaces the displayed snapshot
//! - `end_session` dismisses the activity immediately
//!
//! The host, not this crate, decides on-screen rendering and refresh cadence.
//!
//! ## Example: a custom host
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use liftlog::errors::HostError;
//! use liftlog::host::{ActivityHandle, ActivityHost, HostSessionConfig};
//! use liftlog::models::WorkoutActivitySnapshot;
//!
//! struct NullHost;
//!
//! #[async_trait]
//! impl ActivityHost for NullHost {
//!     fn name(&self) -> &'static str {
//!         "null"
//!     }
//!
//!     async fn request_session(
//!         &self,
//!         _config: &HostSessionConfig,
//!         _initial: &WorkoutActivitySnapshot,
//!     ) -> Result<ActivityHandle, HostError> {
//!         Err(HostError::Disabled)
//!     }
//!
//!     async fn push_update(
//!         &self,
//!         _handle: &ActivityHandle,
//!         _snapshot: &WorkoutActivitySnapshot,
//!     ) -> Result<(), HostError> {
//!         Ok(())
//!     }
//!
//!     async fn end_session(&self, _handle: &ActivityHandle) -> Result<(), HostError> {
//!         Ok(())
//!     }
//! }
//! ```

use crate::errors::HostError;
use crate::models::WorkoutActivitySnapshot;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info};
use uuid::Uuid;

/// Opaque reference to a host-side live activity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivityHandle {
    id: String,
}

impl ActivityHandle {
    /// Wrap a host-assigned identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Host-assigned identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for ActivityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Parameters sent with a session request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSessionConfig {
    /// Activity kind, used by the host to pick a presentation template
    pub kind: String,
    /// How long without updates before the host may show the activity as stale
    pub stale_after: Duration,
}

/// Everything a host observed, in the order it observed it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    /// A session was created with its initial snapshot
    Started {
        /// Host-assigned identifier
        activity_id: String,
        /// Snapshot shown first
        snapshot: WorkoutActivitySnapshot,
    },
    /// A snapshot replaced the displayed one
    Updated {
        /// Host-assigned identifier
        activity_id: String,
        /// New snapshot
        snapshot: WorkoutActivitySnapshot,
    },
    /// The session was dismissed
    Ended {
        /// Host-assigned identifier
        activity_id: String,
    },
}

/// Out-of-process surface that presents live activities
#[async_trait]
pub trait ActivityHost: Send + Sync {
    /// Short host name for logs
    fn name(&self) -> &'static str;

    /// Allocate a new activity showing `initial`
    async fn request_session(
        &self,
        config: &HostSessionConfig,
        initial: &WorkoutActivitySnapshot,
    ) -> Result<ActivityHandle, HostError>;

    /// Replace the snapshot shown by `handle`
    async fn push_update(
        &self,
        handle: &ActivityHandle,
        snapshot: &WorkoutActivitySnapshot,
    ) -> Result<(), HostError>;

    /// Dismiss `handle` immediately
    async fn end_session(&self, handle: &ActivityHandle) -> Result<(), HostError>;
}

/// Host that keeps activities in memory, logs every call, and optionally
/// forwards each observed event to a channel
///
/// Used by the replay CLI; behaves like a real host in that it enforces a
/// concurrent-session quota and rejects unknown handles.
pub struct LoggingHost {
    max_sessions: usize,
    active: Mutex<HashSet<String>>,
    events: Option<mpsc::UnboundedSender<HostEvent>>,
}

impl LoggingHost {
    /// Default concurrent-session quota
    pub const DEFAULT_MAX_SESSIONS: usize = 1;

    /// Create a host that only logs
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_sessions: Self::DEFAULT_MAX_SESSIONS,
            active: Mutex::new(HashSet::new()),
            events: None,
        }
    }

    /// Create a host that also forwards events; returns the receiving end
    #[must_use]
    pub fn with_events() -> (Self, mpsc::UnboundedReceiver<HostEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let host = Self {
            events: Some(sender),
            ..Self::new()
        };
        (host, receiver)
    }

    /// Override the concurrent-session quota
    #[must_use]
    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions;
        self
    }

    fn emit(&self, event: HostEvent) {
        if let Some(sender) = &self.events {
            // Receiver gone means nobody is listening; logging already happened.
            let _ = sender.send(event);
        }
    }
}

impl Default for LoggingHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivityHost for LoggingHost {
    fn name(&self) -> &'static str {
        "logging"
    }

    async fn request_session(
        &self,
        config: &HostSessionConfig,
        initial: &WorkoutActivitySnapshot,
    ) -> Result<ActivityHandle, HostError> {
        let mut active = self.active.lock().await;
        if active.len() >= self.max_sessions {
            return Err(HostError::QuotaExceeded {
                limit: self.max_sessions,
            });
        }

        let handle = ActivityHandle::new(Uuid::new_v4().to_string());
        active.insert(handle.id().to_owned());
        drop(active);

        info!(
            activity.id = %handle,
            activity.kind = %config.kind,
            activity.stale_after_secs = config.stale_after.as_secs(),
            workout.title = %initial.workout_title,
            "Live activity session started"
        );
        self.emit(HostEvent::Started {
            activity_id: handle.id().to_owned(),
            snapshot: initial.clone(),
        });
        Ok(handle)
    }

    async fn push_update(
        &self,
        handle: &ActivityHandle,
        snapshot: &WorkoutActivitySnapshot,
    ) -> Result<(), HostError> {
        if !self.active.lock().await.contains(handle.id()) {
            return Err(HostError::SessionNotFound {
                activity_id: handle.id().to_owned(),
            });
        }

        debug!(
            activity.id = %handle,
            exercise = %snapshot.exercise_name,
            set.number = snapshot.set_number,
            "Live activity updated"
        );
        self.emit(HostEvent::Updated {
            activity_id: handle.id().to_owned(),
            snapshot: snapshot.clone(),
        });
        Ok(())
    }

    async fn end_session(&self, handle: &ActivityHandle) -> Result<(), HostError> {
        if !self.active.lock().await.remove(handle.id()) {
            return Err(HostError::SessionNotFound {
                activity_id: handle.id().to_owned(),
            });
        }

        info!(activity.id = %handle, "Live activity session ended");
        self.emit(HostEvent::Ended {
            activity_id: handle.id().to_owned(),
        });
        Ok(())
    }
}
