// ABOUTME: Error types for the live-activity projector and its completion signals
// ABOUTME: Re-exports the core error system and adds projector-level LiveActivityError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use liftlog_core::errors::*;

use thiserror::Error;

/// Errors surfaced by the projector
///
/// Host failures during `start` are logged and swallowed; these variants only
/// reach callers through precondition checks and awaited completion signals.
#[derive(Debug, Error)]
pub enum LiveActivityError {
    /// `start` was called while a session is already live
    #[error("Live activity already started (activity {activity_id})")]
    AlreadyStarted {
        /// Identifier of the session that is still live
        activity_id: String,
    },

    /// The host refused an update or dismissal
    #[error(transparent)]
    Host(#[from] HostError),

    /// The background push task panicked or was cancelled
    #[error("Live activity push task failed: {0}")]
    TaskFailed(String),
}

impl From<LiveActivityError> for AppError {
    fn from(error: LiveActivityError) -> Self {
        match error {
            LiveActivityError::AlreadyStarted { .. } => {
                Self::new(ErrorCode::ResourceAlreadyExists, error.to_string())
            }
            LiveActivityError::Host(host) => host.into(),
            LiveActivityError::TaskFailed(_) => Self::internal(error.to_string()),
        }
    }
}
