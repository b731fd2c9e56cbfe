mod common;

use aurora_core::constants::MOBILE_BREAKPOINT_PX;
use aurora_core::{classify, profile, CapabilityProfile, CapabilityTier, HostSignals};
use common::{desktop, low_end_phone, tablet};

#[test]
fn wide_fine_pointer_with_resources_is_full() {
    let s = HostSignals {
        viewport_width: 800.0,
        device_memory_gb: Some(8.0),
        logical_cores: Some(8),
        ..HostSignals::default()
    };
    assert_eq!(classify(&s), CapabilityTier::Full);
}

#[test]
fn small_constrained_device_is_minimal() {
    let s = HostSignals {
        viewport_width: 400.0,
        device_memory_gb: Some(2.0),
        logical_cores: Some(2),
        ..HostSignals::default()
    };
    assert_eq!(classify(&s), CapabilityTier::Minimal);
    assert_eq!(classify(&low_end_phone()), CapabilityTier::Minimal);
}

#[test]
fn either_scarce_resource_is_enough_on_small_viewports() {
    let few_cores = HostSignals {
        viewport_width: 400.0,
        device_memory_gb: Some(8.0),
        logical_cores: Some(2),
        ..HostSignals::default()
    };
    let little_memory = HostSignals {
        viewport_width: 400.0,
        device_memory_gb: Some(2.0),
        logical_cores: Some(8),
        ..HostSignals::default()
    };
    assert_eq!(classify(&few_cores), CapabilityTier::Minimal);
    assert_eq!(classify(&little_memory), CapabilityTier::Minimal);
}

#[test]
fn small_but_capable_device_is_standard() {
    let s = HostSignals {
        viewport_width: 400.0,
        device_memory_gb: Some(8.0),
        logical_cores: Some(8),
        ..HostSignals::default()
    };
    assert_eq!(classify(&s), CapabilityTier::Standard);
}

#[test]
fn coarse_pointer_on_wide_viewport_is_standard() {
    assert_eq!(classify(&tablet()), CapabilityTier::Standard);
}

#[test]
fn breakpoint_width_counts_as_small() {
    let at = HostSignals {
        viewport_width: MOBILE_BREAKPOINT_PX,
        device_memory_gb: Some(2.0),
        ..HostSignals::default()
    };
    let above = HostSignals {
        viewport_width: MOBILE_BREAKPOINT_PX + 1.0,
        ..at.clone()
    };
    assert_eq!(classify(&at), CapabilityTier::Minimal);
    assert_eq!(classify(&above), CapabilityTier::Full);
}

#[test]
fn unreported_hints_use_mid_range_defaults() {
    let s = HostSignals {
        viewport_width: 400.0,
        ..HostSignals::default()
    };
    // defaults sit exactly on the threshold, which is not "below" it
    assert_eq!(classify(&s), CapabilityTier::Standard);
}

#[test]
fn reduced_motion_forces_minimal() {
    let s = HostSignals {
        reduced_motion: true,
        ..desktop()
    };
    assert_eq!(classify(&s), CapabilityTier::Minimal);
}

#[test]
fn profile_carries_cursor_facts() {
    let p = profile(&desktop(), MOBILE_BREAKPOINT_PX);
    assert!(p.cursor_enabled());
    assert!(!profile(&tablet(), MOBILE_BREAKPOINT_PX).cursor_enabled());
    assert!(!profile(&low_end_phone(), MOBILE_BREAKPOINT_PX).cursor_enabled());
    assert_eq!(CapabilityProfile::mid_tier().tier, CapabilityTier::Standard);
}

#[test]
fn tiers_order_by_capability() {
    assert!(CapabilityTier::Minimal < CapabilityTier::Standard);
    assert!(CapabilityTier::Standard < CapabilityTier::Full);
    assert_eq!(CapabilityTier::Full.demoted(), Some(CapabilityTier::Standard));
    assert_eq!(CapabilityTier::Minimal.demoted(), None);
    assert!(
        CapabilityTier::Minimal.min_frame_interval_ms()
            > CapabilityTier::Full.min_frame_interval_ms()
    );
}
