// ABOUTME: Re-exports session and snapshot models from the core crate
// ABOUTME: Keeps `liftlog::models::*` paths stable for library users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use liftlog_core::models::*;
