mod common;

use aurora_core::{
    initialize, AuroraOptions, CapabilityProfile, CapabilityTier, Coordinator, EntityKind,
    HostError, HostSignals,
};
use common::{desktop, low_end_phone, run, MockSurface};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn full() -> Coordinator<MockSurface> {
    Coordinator::new(&desktop(), MockSurface::new(), AuroraOptions::default())
}

/// Advance until a streak is in flight; returns the current time.
fn until_streak(c: &mut Coordinator<MockSurface>, mut t: f64) -> f64 {
    while c.registry().count(EntityKind::Streak) == 0 {
        c.frame(t);
        t += FRAME_MS;
        assert!(t < 10_000.0, "no streak spawned");
    }
    t
}

#[test]
fn pause_freezes_and_resume_continues() {
    let mut c = full();
    let t = run(0.0, 2_500.0, FRAME_MS, |t| {
        c.frame(t);
    });
    let live = c.registry().len();
    let created = c.surface().created.len();
    let removed = c.surface().removed.len();
    let executed = c.scheduler().frames_executed();

    c.on_visibility(false, t);
    assert!(c.is_paused());
    assert!(c.surface().paused);
    let t = run(t, 500.0, FRAME_MS, |t| {
        c.frame(t);
    });
    assert_eq!(c.registry().len(), live);
    assert_eq!(c.surface().created.len(), created);
    assert_eq!(c.surface().removed.len(), removed);
    assert_eq!(c.scheduler().frames_executed(), executed);

    c.on_visibility(true, t);
    assert!(!c.is_paused());
    assert!(!c.surface().paused);
    assert!(c.registry().len() <= live);
    assert_eq!(c.surface().created.len(), created);
    run(t, 5_000.0, FRAME_MS, |t| {
        c.frame(t);
    });
    assert!(c.scheduler().frames_executed() > executed);
    assert_eq!(c.registry().count(EntityKind::Star), 750);
    assert!(c.surface().created.len() > created);
}

#[test]
fn paused_frames_take_the_idle_path() {
    let mut c = full();
    c.on_pointer_move(glam::Vec2::new(5.0, 5.0));
    c.frame(0.0);
    let updates = c.surface().updates;
    let cursor_frames = c.surface().cursor_frames.len();
    c.on_visibility(false, 1.0);
    for i in 0..100 {
        let report = c.frame(i as f64 * FRAME_MS);
        assert!(!report.executed);
    }
    assert_eq!(c.surface().updates, updates);
    assert_eq!(c.surface().cursor_frames.len(), cursor_frames);
}

#[test]
fn pause_is_level_triggered_across_signals() {
    let mut c = full();
    c.frame(0.0);
    c.on_visibility(false, 10.0);
    c.on_battery(Some(0.1), 20.0);
    assert!(c.is_paused());
    // visible again but the battery is still low
    c.on_visibility(true, 30.0);
    assert!(c.is_paused());
    c.on_battery(Some(0.8), 40.0);
    assert!(!c.is_paused());
    // repeated identical signals change nothing
    c.on_visibility(true, 50.0);
    c.on_battery(Some(0.8), 60.0);
    assert!(!c.is_paused());
}

#[test]
fn low_battery_pauses_and_unknown_level_does_not() {
    let mut c = full();
    c.on_battery(Some(0.29), 0.0);
    assert!(c.is_paused());
    c.on_battery(None, 10.0);
    assert!(!c.is_paused());
    c.on_battery(Some(0.3), 20.0);
    assert!(!c.is_paused());
    c.on_battery(Some(f64::NAN), 30.0);
    assert!(!c.is_paused());
}

#[test]
fn short_pause_keeps_in_flight_entities() {
    let mut c = full();
    let t = until_streak(&mut c, 0.0);
    let id = c.registry().active_of(EntityKind::Streak)[0];
    let remaining = c.registry().get(id).unwrap().remaining_ms().unwrap();
    let elapsed = c.registry().get(id).unwrap().elapsed_ms;

    c.on_visibility(false, t);
    c.on_visibility(true, t + remaining / 2.0);
    assert!(c.registry().contains(id));
    // the hidden span is not active time
    c.frame(t + remaining / 2.0);
    assert_eq!(c.registry().get(id).unwrap().elapsed_ms, elapsed);
}

#[test]
fn long_pause_drops_stale_entities_on_resume() {
    let mut c = full();
    let t = until_streak(&mut c, 0.0);
    let id = c.registry().active_of(EntityKind::Streak)[0];
    let remaining = c.registry().get(id).unwrap().remaining_ms().unwrap();
    let stars = c.registry().count(EntityKind::Star);

    c.on_visibility(false, t);
    c.on_visibility(true, t + remaining + 1.0);
    assert!(!c.registry().contains(id));
    assert!(c.surface().removed.contains(&id));
    // looping entities survive any pause
    assert_eq!(c.registry().count(EntityKind::Star), stars);
}

#[test]
fn teardown_releases_everything_from_any_state() {
    for state in ["running", "paused", "twice"] {
        let mut c = full();
        let t = run(0.0, 4_000.0, FRAME_MS, |t| {
            c.frame(t);
        });
        if state == "paused" {
            c.on_visibility(false, t);
        }
        let live = c.registry().len();
        let released = c.teardown();
        assert_eq!(released, live, "{state}");
        if state == "twice" {
            assert_eq!(c.teardown(), 0);
        }
        assert!(c.is_torn_down());
        assert!(c.registry().is_empty(), "{state}");
        assert!(c.surface().live.is_empty(), "{state}");
        assert!(c.scheduler().active_kinds().is_empty());
        assert!(c.surface().cursor_hidden);

        let created = c.surface().created.len();
        run(t, 2_000.0, FRAME_MS, |t| {
            assert!(!c.frame(t).executed);
        });
        c.on_visibility(true, t + 3_000.0);
        c.on_resize(&low_end_phone());
        assert_eq!(c.surface().created.len(), created, "{state}");
    }
}

#[test]
fn host_finished_callback_and_timeline_release_once() {
    let mut c = full();
    let t = until_streak(&mut c, 0.0);
    let id = c.registry().active_of(EntityKind::Streak)[0];
    c.surface_mut().finish(id);
    c.surface_mut().finish(id);
    let report = c.frame(t + 20.0);
    assert!(report.completed >= 1);
    assert!(!c.registry().contains(id));
    assert_eq!(c.surface().removed.iter().filter(|r| **r == id).count(), 1);

    // the finished callback for an already released node arrives late
    c.surface_mut().finish(id);
    c.frame(t + 40.0);
    assert_eq!(c.surface().removed.iter().filter(|r| **r == id).count(), 1);
}

#[test]
fn finished_callback_after_teardown_is_harmless() {
    let mut c = full();
    let t = until_streak(&mut c, 0.0);
    let id = c.registry().active_of(EntityKind::Streak)[0];
    c.surface_mut().finish(id);
    c.teardown();
    c.frame(t + 20.0);
    assert_eq!(c.surface().removed.iter().filter(|r| **r == id).count(), 1);
}

#[test]
fn minimal_tier_throttles_to_fifty_ms() {
    let mut c = Coordinator::new(&low_end_phone(), MockSurface::new(), AuroraOptions::default());
    assert_eq!(c.tier(), CapabilityTier::Minimal);
    let mut executed_at = Vec::new();
    run(0.0, 1_000.0, 10.0, |t| {
        if c.frame(t).executed {
            executed_at.push(t);
        }
    });
    assert_eq!(executed_at.len(), 20);
    for pair in executed_at.windows(2) {
        assert!(pair[1] - pair[0] >= 50.0);
    }
}

#[test]
fn minimal_tier_runs_only_spawn_once_generators() {
    let mut c = Coordinator::new(&low_end_phone(), MockSurface::new(), AuroraOptions::default());
    assert_eq!(c.scheduler().active_kinds(), vec![EntityKind::Star, EntityKind::Debris]);
    run(0.0, 20_000.0, FRAME_MS, |t| {
        c.frame(t);
    });
    let created = c.surface().created.len();
    assert_eq!(created, c.registry().len());
    assert!(c.surface().removed.is_empty());
}

#[test]
fn sustained_low_frame_rate_demotes_one_tier() {
    let mut c = full();
    // 20 fps host
    run(0.0, 3_000.0, 50.0, |t| {
        c.frame(t);
    });
    assert_eq!(c.tier(), CapabilityTier::Standard);
    assert_eq!(c.scheduler().min_interval_ms(), CapabilityTier::Standard.min_frame_interval_ms());
    assert_eq!(c.registry().count(EntityKind::Star), 225);
    assert!(c.registry().count(EntityKind::Streak) <= 6);
}

#[test]
fn demotion_can_be_disabled() {
    let options = AuroraOptions {
        adaptive_fps: false,
        ..AuroraOptions::default()
    };
    let mut c = Coordinator::new(&desktop(), MockSurface::new(), options);
    run(0.0, 5_000.0, 50.0, |t| {
        c.frame(t);
    });
    assert_eq!(c.tier(), CapabilityTier::Full);
}

#[test]
fn missing_mount_disables_only_that_generator() {
    let mut c = Coordinator::new(
        &desktop(),
        MockSurface::without(&[EntityKind::Meteor]),
        AuroraOptions::default(),
    );
    assert_eq!(
        c.scheduler().active_kinds(),
        vec![EntityKind::Star, EntityKind::Streak, EntityKind::ShootingStar, EntityKind::Debris]
    );
    run(0.0, 20_000.0, FRAME_MS, |t| {
        c.frame(t);
    });
    assert_eq!(c.registry().count(EntityKind::Meteor), 0);
    assert_eq!(c.registry().count(EntityKind::Star), 750);
    assert!(c.surface().created.iter().any(|(_, k)| *k == EntityKind::ShootingStar));
}

#[test]
fn crossing_the_breakpoint_reclassifies() {
    let mut c = full();
    let t = run(0.0, 1_000.0, FRAME_MS, |t| {
        c.frame(t);
    });
    let narrow = HostSignals {
        viewport_width: 500.0,
        ..desktop()
    };
    c.on_resize(&narrow);
    assert_eq!(c.tier(), CapabilityTier::Standard);
    assert!(c.scheduler().cursor().is_none());
    assert!(c.surface().cursor_hidden);
    let t = run(t, 500.0, FRAME_MS, |t| {
        c.frame(t);
    });
    assert_eq!(c.registry().count(EntityKind::Star), 225);
    assert_eq!(c.registry().count(EntityKind::Debris), 10);

    c.on_resize(&desktop());
    assert_eq!(c.tier(), CapabilityTier::Full);
    assert!(c.scheduler().cursor().is_some());
    run(t, 500.0, FRAME_MS, |t| {
        c.frame(t);
    });
    assert_eq!(c.registry().count(EntityKind::Star), 750);
}

#[test]
fn resize_on_the_same_side_changes_nothing() {
    let mut c = full();
    c.frame(0.0);
    let stars = c.registry().active_of(EntityKind::Star);
    c.on_resize(&HostSignals {
        viewport_width: 1000.0,
        ..desktop()
    });
    c.frame(20.0);
    assert_eq!(c.registry().active_of(EntityKind::Star), stars);
}

#[test]
fn reduced_motion_runs_minimal() {
    let signals = HostSignals {
        reduced_motion: true,
        ..desktop()
    };
    let c = Coordinator::new(&signals, MockSurface::new(), AuroraOptions::default());
    assert_eq!(c.tier(), CapabilityTier::Minimal);
    assert_eq!(c.scheduler().active_kinds(), vec![EntityKind::Star, EntityKind::Debris]);
}

#[test]
fn missing_clock_runs_inert() {
    let mut c = initialize(
        Err(HostError::ClockUnavailable),
        MockSurface::new(),
        AuroraOptions::default(),
    );
    assert_eq!(c.tier(), CapabilityTier::Minimal);
    assert!(c.scheduler().active_kinds().is_empty());
    assert!(c.scheduler().cursor().is_none());
    run(0.0, 2_000.0, FRAME_MS, |t| {
        c.frame(t);
    });
    assert!(c.surface().created.is_empty());
}

#[test]
fn missing_hint_assumes_mid_tier() {
    let c = initialize(
        Err(HostError::MissingSignal("deviceMemory")),
        MockSurface::new(),
        AuroraOptions::default(),
    );
    assert_eq!(c.profile(), CapabilityProfile::mid_tier());
    assert_eq!(c.tier(), CapabilityTier::Standard);
}

#[test]
fn seed_passed_to_initialize_fixes_the_population() {
    let start = |seed: u64| {
        let options = AuroraOptions {
            seed,
            ..AuroraOptions::default()
        };
        let mut c = initialize(Ok(desktop()), MockSurface::new(), options);
        run(0.0, 1_000.0, FRAME_MS, |t| {
            c.frame(t);
        });
        c.surface().appearances.clone()
    };
    assert_eq!(start(7), start(7));
    assert_ne!(start(7), start(8));
}
