// ABOUTME: Tests for live-activity and logging configuration loaded from the environment
// ABOUTME: Env-mutating tests run serially to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use liftlog::config::{LiveActivityConfig, WeightUnit};
use liftlog::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;
use std::time::Duration;

const LIVE_VARS: [&str; 3] = [
    "LIFTLOG_LIVE_ACTIVITY_ENABLED",
    "LIFTLOG_LIVE_ACTIVITY_STALE_AFTER_SECS",
    "LIFTLOG_WEIGHT_UNIT",
];

fn clear_live_vars() {
    for key in LIVE_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_live_vars();

    let config = LiveActivityConfig::from_env();
    assert_eq!(config, LiveActivityConfig::default());
    assert!(config.enabled);
    assert_eq!(config.stale_after, Duration::from_secs(900));
    assert_eq!(config.weight_unit, WeightUnit::Lb);
}

#[test]
#[serial]
fn test_environment_overrides() {
    env::set_var("LIFTLOG_LIVE_ACTIVITY_ENABLED", "false");
    env::set_var("LIFTLOG_LIVE_ACTIVITY_STALE_AFTER_SECS", "300");
    env::set_var("LIFTLOG_WEIGHT_UNIT", "kg");

    let config = LiveActivityConfig::from_env();
    assert!(!config.enabled);
    assert_eq!(config.stale_after, Duration::from_secs(300));
    assert_eq!(config.weight_unit, WeightUnit::Kg);

    clear_live_vars();
}

#[test]
#[serial]
fn test_malformed_values_fall_back() {
    env::set_var("LIFTLOG_LIVE_ACTIVITY_ENABLED", "sometimes");
    env::set_var("LIFTLOG_LIVE_ACTIVITY_STALE_AFTER_SECS", "soon");

    let config = LiveActivityConfig::from_env();
    assert!(config.enabled);
    assert_eq!(config.stale_after, Duration::from_secs(900));

    clear_live_vars();
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "test-service");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "test-service");
    assert!(config.include_location);

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
    env::remove_var("SERVICE_NAME");
}

#[test]
#[serial]
fn test_default_logging_config() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.service_name, "liftlog");
    assert!(!config.include_location);
}
