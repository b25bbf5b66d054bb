// ABOUTME: Core types for the liftlog live-activity pipeline
// ABOUTME: Foundation crate with error handling, session models, and snapshot schema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # liftlog Core
//!
//! Shared types for the live-activity pipeline. This crate is designed to change
//! infrequently so the projector crate rebuilds quickly on its own.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the host-channel `HostError`
//! - **models**: in-progress session types and the `WorkoutActivitySnapshot` wire schema
//! - **constants**: environment variable names and defaults

/// Unified error handling with standard error codes
pub mod errors;

/// Environment variable names and default values
pub mod constants;

/// In-progress session models and the live-activity snapshot
pub mod models;
