// ABOUTME: Main library entry point for the liftlog live-activity pipeline
// ABOUTME: Projects in-progress workout state onto a lock-screen / widget live activity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # liftlog
//!
//! Derives a compact, continuously refreshed summary of an in-progress workout
//! (current exercise, current set, rest countdown) and pushes it to the host
//! surface that shows live activities on the lock screen and in widgets.
//!
//! ## Architecture
//!
//! - **projection**: pure derivation of progress and snapshots from session state
//! - **projector**: owns the single host session for one workout; start, update, end
//! - **host**: the host presentation channel trait plus an in-memory logging host
//! - **presentation**: widget text rendering of a snapshot
//! - **replay**: drives a projector from a recorded session script
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use chrono::Utc;
//! use liftlog::config::LiveActivityConfig;
//! use liftlog::host::LoggingHost;
//! use liftlog::models::{InProgressExercise, InProgressSet};
//! use liftlog::projector::LiveActivityProjector;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let projector =
//!         LiveActivityProjector::new(Arc::new(LoggingHost::new()), LiveActivityConfig::from_env());
//!     let started = Utc::now();
//!     let mut exercises =
//!         vec![InProgressExercise::new("Squat").with_sets(vec![InProgressSet::new(5, 225.0)])];
//!
//!     projector.start(&exercises, "Leg Day", started).await?;
//!     exercises[0].sets[0].completed = true;
//!     if let Some(push) = projector.update(&exercises, "Leg Day", started, None).await {
//!         push.wait().await?;
//!     }
//!     projector.end().await;
//!     Ok(())
//! }
//! ```

/// Live-activity configuration from the environment
pub mod config;

/// Error types (core errors plus projector errors)
pub mod errors;

/// Host presentation channel abstraction
pub mod host;

/// Structured logging setup
pub mod logging;

/// Session and snapshot models
pub mod models;

/// Widget text rendering of snapshots
pub mod presentation;

/// Snapshot derivation from session state
pub mod projection;

/// Live-activity lifecycle owner
pub mod projector;

/// Script-driven replay of a workout through a projector
pub mod replay;

/// Test utilities: recording host and session fixtures
#[cfg(any(test, feature = "testing"))]
pub mod test_utils;
