// ABOUTME: Environment variable names and default values for the live-activity pipeline
// ABOUTME: Keeps configuration keys in one place so config loaders and tests agree
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable names
pub mod env_vars {
    /// Enables or disables host session requests
    pub const LIVE_ACTIVITY_ENABLED: &str = "LIFTLOG_LIVE_ACTIVITY_ENABLED";
    /// Staleness hint, in seconds, handed to the host
    pub const LIVE_ACTIVITY_STALE_AFTER_SECS: &str = "LIFTLOG_LIVE_ACTIVITY_STALE_AFTER_SECS";
    /// Display unit for weights (`lb` or `kg`)
    pub const WEIGHT_UNIT: &str = "LIFTLOG_WEIGHT_UNIT";
}

/// Defaults applied when the environment is silent
pub mod defaults {
    /// Host sessions are requested unless explicitly disabled
    pub const LIVE_ACTIVITY_ENABLED: bool = true;
    /// Fifteen minutes without an update marks the activity stale
    pub const STALE_AFTER_SECS: u64 = 900;
    /// Activity kind reported to the host
    pub const ACTIVITY_KIND: &str = "workout";
}

/// Service names used in structured logs
pub mod service_names {
    /// Default service name for the replay CLI and library logs
    pub const LIFTLOG: &str = "liftlog";
}
