// ABOUTME: Tests for the live-activity projector lifecycle against a recording host
// ABOUTME: Covers best-effort start, no-op update/end, duplicate start rejection, and push completion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, TimeZone, Utc};
use liftlog::config::LiveActivityConfig;
use liftlog::errors::{HostError, LiveActivityError};
use liftlog::host::{HostEvent, LoggingHost};
use liftlog::projection::rest_end_after;
use liftlog::projector::{LiveActivityProjector, PushKind};
use liftlog::test_utils::{create_finished_session, create_squat_session, RecordingHost};
use std::sync::Arc;

fn started() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 18, 0, 0).unwrap()
}

fn projector_with(host: &Arc<RecordingHost>) -> LiveActivityProjector {
    LiveActivityProjector::new(host.clone(), LiveActivityConfig::default())
}

#[tokio::test]
async fn test_start_requests_one_session_with_initial_snapshot() {
    let host = Arc::new(RecordingHost::new());
    let projector = projector_with(&host);

    projector
        .start(&create_squat_session(), "Leg Day", started())
        .await
        .unwrap();

    assert!(projector.is_active().await);
    assert_eq!(host.session_requests(), 1);
    match host.events().await.as_slice() {
        [HostEvent::Started {
            activity_id,
            snapshot,
        }] => {
            assert_eq!(activity_id, "activity-1");
            assert_eq!(snapshot.exercise_name, "Squat");
            assert_eq!(snapshot.set_number, 2);
            assert_eq!(snapshot.end_date, None);
        }
        other => panic!("unexpected events: {other:?}"),
    }
}

#[tokio::test]
async fn test_host_rejection_is_not_fatal() {
    let host = Arc::new(RecordingHost::rejecting(HostError::QuotaExceeded { limit: 1 }));
    let projector = projector_with(&host);

    let result = projector.start(&create_squat_session(), "Leg Day", started()).await;

    assert!(result.is_ok());
    assert!(!projector.is_active().await);
    assert_eq!(host.session_requests(), 1);

    // Without a session, later calls stay silent.
    assert!(projector
        .update(&create_squat_session(), "Leg Day", started(), None)
        .await
        .is_none());
    assert!(projector.end().await.is_none());
    assert!(host.events().await.is_empty());
}

#[tokio::test]
async fn test_update_without_start_is_noop() {
    let host = Arc::new(RecordingHost::new());
    let projector = projector_with(&host);

    let push = projector
        .update(&create_squat_session(), "Leg Day", started(), None)
        .await;

    assert!(push.is_none());
    assert!(host.events().await.is_empty());
}

#[tokio::test]
async fn test_identical_updates_push_identical_snapshots() {
    let host = Arc::new(RecordingHost::new());
    let projector = projector_with(&host);
    let exercises = create_squat_session();
    projector.start(&exercises, "Leg Day", started()).await.unwrap();

    for _ in 0..2 {
        projector
            .update(&exercises, "Leg Day", started(), None)
            .await
            .unwrap()
            .wait()
            .await
            .unwrap();
    }

    let updates = host.updates().await;
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0], updates[1]);
}

#[tokio::test]
async fn test_update_reflects_latest_state_and_rest_timer() {
    let host = Arc::new(RecordingHost::new());
    let projector = projector_with(&host);
    let mut exercises = create_squat_session();
    projector.start(&exercises, "Leg Day", started()).await.unwrap();

    let done_at = Utc.with_ymd_and_hms(2025, 6, 2, 18, 10, 0).unwrap();
    exercises[0].sets[1].completed = true;
    exercises[0].sets[1].rest = liftlog::models::RestDuration::new(2, 0);
    let rest_end = rest_end_after(&exercises, 0, 1, done_at);

    let push = projector
        .update(&exercises, "Leg Day", started(), rest_end)
        .await
        .unwrap();
    assert_eq!(push.kind(), PushKind::Update);
    assert_eq!(push.activity_id(), "activity-1");
    push.wait().await.unwrap();

    let updates = host.updates().await;
    let last = updates.last().unwrap();
    assert_eq!(last.exercise_name, "");
    assert!(!last.is_empty);
    assert_eq!(
        last.end_date,
        Some(Utc.with_ymd_and_hms(2025, 6, 2, 18, 12, 0).unwrap())
    );
}

#[tokio::test]
async fn test_end_then_update_is_noop() {
    let host = Arc::new(RecordingHost::new());
    let projector = projector_with(&host);
    projector
        .start(&create_squat_session(), "Leg Day", started())
        .await
        .unwrap();

    let end = projector.end().await.unwrap();
    assert_eq!(end.kind(), PushKind::End);
    end.wait().await.unwrap();
    assert!(!projector.is_active().await);

    assert!(projector
        .update(&create_finished_session(), "Leg Day", started(), None)
        .await
        .is_none());
    assert!(projector.end().await.is_none());

    let events = host.events().await;
    assert_eq!(events.len(), 2);
    assert!(matches!(events[1], HostEvent::Ended { .. }));
    assert_eq!(host.session_requests(), 1);
}

#[tokio::test]
async fn test_second_start_is_rejected_and_keeps_session() {
    let host = Arc::new(RecordingHost::new());
    let projector = projector_with(&host);
    projector
        .start(&create_squat_session(), "Leg Day", started())
        .await
        .unwrap();

    let error = projector
        .start(&create_squat_session(), "Leg Day", started())
        .await
        .unwrap_err();

    match error {
        LiveActivityError::AlreadyStarted { activity_id } => assert_eq!(activity_id, "activity-1"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(host.session_requests(), 1);
    assert_eq!(projector.handle().await.unwrap().id(), "activity-1");
}

#[tokio::test]
async fn test_restart_after_end_allocates_new_session() {
    let host = Arc::new(RecordingHost::new());
    let projector = projector_with(&host);
    projector.start(&[], "A", started()).await.unwrap();
    projector.end().await.unwrap().wait().await.unwrap();

    projector.start(&[], "B", started()).await.unwrap();
    assert_eq!(projector.handle().await.unwrap().id(), "activity-2");
}

#[tokio::test]
async fn test_push_failure_is_observable_through_completion() {
    let host = Arc::new(RecordingHost::new());
    let projector = projector_with(&host);
    projector
        .start(&create_squat_session(), "Leg Day", started())
        .await
        .unwrap();
    host.fail_pushes_with(HostError::Rejected("activity expired".to_owned()))
        .await;

    let result = projector
        .update(&create_squat_session(), "Leg Day", started(), None)
        .await
        .unwrap()
        .wait()
        .await;

    assert!(matches!(
        result,
        Err(LiveActivityError::Host(HostError::Rejected(_)))
    ));
    // A failed push does not drop the session.
    assert!(projector.is_active().await);
}

#[tokio::test]
async fn test_disabled_config_skips_host() {
    let host = Arc::new(RecordingHost::new());
    let config = LiveActivityConfig {
        enabled: false,
        ..LiveActivityConfig::default()
    };
    let projector = LiveActivityProjector::new(host.clone(), config);

    projector
        .start(&create_squat_session(), "Leg Day", started())
        .await
        .unwrap();

    assert!(!projector.is_active().await);
    assert_eq!(host.session_requests(), 0);
}

#[tokio::test]
async fn test_dropped_completion_still_reaches_host() {
    let (host, mut events) = LoggingHost::with_events();
    let projector = LiveActivityProjector::new(Arc::new(host), LiveActivityConfig::default());
    projector
        .start(&create_squat_session(), "Leg Day", started())
        .await
        .unwrap();

    drop(
        projector
            .update(&create_squat_session(), "Leg Day", started(), None)
            .await,
    );

    assert!(matches!(events.recv().await, Some(HostEvent::Started { .. })));
    assert!(matches!(events.recv().await, Some(HostEvent::Updated { .. })));
}

#[tokio::test]
async fn test_end_waits_for_earlier_update() {
    let host = Arc::new(RecordingHost::new());
    let projector = projector_with(&host);
    projector
        .start(&create_squat_session(), "Leg Day", started())
        .await
        .unwrap();
    let gate = host.hold_updates().await;

    drop(
        projector
            .update(&create_finished_session(), "Leg Day", started(), None)
            .await,
    );
    let end = projector.end().await.unwrap();
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    // The dismissal is queued behind the held update.
    assert_eq!(host.events().await.len(), 1);

    gate.notify_one();
    end.wait().await.unwrap();

    assert!(matches!(
        host.events().await.as_slice(),
        [
            HostEvent::Started { .. },
            HostEvent::Updated { .. },
            HostEvent::Ended { .. }
        ]
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_unawaited_update_lands_before_end() {
    for _ in 0..100 {
        let (host, mut events) = LoggingHost::with_events();
        let projector = LiveActivityProjector::new(Arc::new(host), LiveActivityConfig::default());
        projector
            .start(&create_squat_session(), "Leg Day", started())
            .await
            .unwrap();

        let update = projector
            .update(&create_finished_session(), "Leg Day", started(), None)
            .await
            .unwrap();
        let end = projector.end().await.unwrap();
        end.wait().await.unwrap();
        // An update arriving after dismissal would fail with SessionNotFound.
        update.wait().await.unwrap();
        drop(projector);

        let mut kinds = Vec::new();
        while let Some(event) = events.recv().await {
            kinds.push(serde_json::to_value(&event).unwrap()["event"].clone());
        }
        assert_eq!(kinds, ["started", "updated", "ended"]);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_start_allocates_once() {
    let host = Arc::new(RecordingHost::new());
    let projector = Arc::new(projector_with(&host));

    let spawn_start = |projector: Arc<LiveActivityProjector>| {
        tokio::spawn(async move {
            projector
                .start(&create_squat_session(), "Leg Day", started())
                .await
        })
    };
    let first = spawn_start(Arc::clone(&projector));
    let second = spawn_start(Arc::clone(&projector));
    let results = [first.await.unwrap(), second.await.unwrap()];

    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
    assert!(results
        .iter()
        .any(|result| matches!(result, Err(LiveActivityError::AlreadyStarted { .. }))));
    assert_eq!(host.session_requests(), 1);
    assert_eq!(projector.handle().await.unwrap().id(), "activity-1");
}
