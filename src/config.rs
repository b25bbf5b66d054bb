// ABOUTME: Live-activity configuration loaded from environment variables with defaults
// ABOUTME: Controls whether host sessions are requested, staleness hints, and weight display units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::host::HostSessionConfig;
use liftlog_core::constants::{defaults, env_vars};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::warn;

/// Unit used when rendering weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Pounds
    #[default]
    Lb,
    /// Kilograms
    Kg,
}

impl WeightUnit {
    /// Parse a unit, falling back to pounds for anything unrecognized
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Self::Kg,
            _ => Self::Lb,
        }
    }

    /// Short suffix shown after a weight
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Lb => "lb",
            Self::Kg => "kg",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Live-activity configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveActivityConfig {
    /// Request host sessions at all (false behaves like a host with the feature off)
    pub enabled: bool,
    /// Staleness hint handed to the host
    pub stale_after: Duration,
    /// Unit used by the presentation layer
    pub weight_unit: WeightUnit,
}

impl Default for LiveActivityConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::LIVE_ACTIVITY_ENABLED,
            stale_after: Duration::from_secs(defaults::STALE_AFTER_SECS),
            weight_unit: WeightUnit::default(),
        }
    }
}

impl LiveActivityConfig {
    /// Load configuration from environment
    ///
    /// Unset variables take their defaults. Invalid values are logged and
    /// also fall back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        let enabled = env_value(env_vars::LIVE_ACTIVITY_ENABLED, parse_enabled)
            .unwrap_or(defaults::LIVE_ACTIVITY_ENABLED);
        let stale_after_secs = env_value(
            env_vars::LIVE_ACTIVITY_STALE_AFTER_SECS,
            parse_stale_after_secs,
        )
        .unwrap_or(defaults::STALE_AFTER_SECS);

        Self {
            enabled,
            stale_after: Duration::from_secs(stale_after_secs),
            weight_unit: WeightUnit::from_str_or_default(&env_var_or(env_vars::WEIGHT_UNIT, "lb")),
        }
    }

    /// Parameters sent to the host with each session request
    #[must_use]
    pub fn session_config(&self) -> HostSessionConfig {
        HostSessionConfig {
            kind: defaults::ACTIVITY_KIND.to_owned(),
            stale_after: self.stale_after,
        }
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn env_value<T>(key: &str, parse: fn(&str) -> AppResult<T>) -> Option<T> {
    let raw = env::var(key).ok()?;
    match parse(&raw) {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(env.var = key, error = %error, "Ignoring invalid configuration value; using default");
            None
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_enabled(value: &str) -> AppResult<bool> {
    parse_bool(value).ok_or_else(|| AppError::config(format!("{value:?} is not a boolean")))
}

fn parse_stale_after_secs(value: &str) -> AppResult<u64> {
    value.trim().parse().map_err(|error| {
        AppError::config(format!("{value:?} is not a whole number of seconds")).with_source(error)
    })
}
