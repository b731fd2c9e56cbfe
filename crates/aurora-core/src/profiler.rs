//! Device capability classification.
//!
//! The profiler is a pure function of the host signals gathered at startup (and
//! again when the viewport crosses the mobile breakpoint). Its result is threaded
//! into every generator's configuration; nothing else queries the host ad hoc.

use crate::constants::*;

/// Device-capability class governing animation density and frame rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CapabilityTier {
    Minimal,
    Standard,
    Full,
}

impl CapabilityTier {
    /// Minimum time between executed scheduler frames.
    pub fn min_frame_interval_ms(self) -> f64 {
        match self {
            CapabilityTier::Minimal => MINIMAL_FRAME_INTERVAL_MS,
            CapabilityTier::Standard => STANDARD_FRAME_INTERVAL_MS,
            CapabilityTier::Full => FULL_FRAME_INTERVAL_MS,
        }
    }

    /// The next tier down, if any.
    pub fn demoted(self) -> Option<Self> {
        match self {
            CapabilityTier::Full => Some(CapabilityTier::Standard),
            CapabilityTier::Standard => Some(CapabilityTier::Minimal),
            CapabilityTier::Minimal => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CapabilityTier::Minimal => "minimal",
            CapabilityTier::Standard => "standard",
            CapabilityTier::Full => "full",
        }
    }
}

/// Raw capability hints read from the host. Missing hints are `None` and are
/// replaced by mid-tier defaults during classification.
#[derive(Clone, Debug, PartialEq)]
pub struct HostSignals {
    pub viewport_width: f64,
    pub device_memory_gb: Option<f64>,
    pub logical_cores: Option<u32>,
    pub coarse_pointer: bool,
    pub reduced_motion: bool,
}

impl Default for HostSignals {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            device_memory_gb: None,
            logical_cores: None,
            coarse_pointer: false,
            reduced_motion: false,
        }
    }
}

/// Classification result plus the facts other components key off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapabilityProfile {
    pub tier: CapabilityTier,
    pub small_viewport: bool,
    pub coarse_pointer: bool,
}

impl CapabilityProfile {
    /// Profile assumed when the host cannot report capability hints at all.
    pub fn mid_tier() -> Self {
        Self {
            tier: CapabilityTier::Standard,
            small_viewport: false,
            coarse_pointer: false,
        }
    }

    /// The cursor follower only runs with a persistent, fine pointer on a wide viewport.
    pub fn cursor_enabled(&self) -> bool {
        !self.coarse_pointer && !self.small_viewport
    }
}

/// `true` when the width is at or below the breakpoint. Non-finite widths count
/// as small so a broken host degrades rather than over-commits.
#[inline]
pub fn is_small_viewport(width: f64, breakpoint_px: f64) -> bool {
    !(width > breakpoint_px)
}

/// Classify with the default mobile breakpoint.
pub fn classify(signals: &HostSignals) -> CapabilityTier {
    classify_with(signals, MOBILE_BREAKPOINT_PX)
}

pub fn classify_with(signals: &HostSignals, breakpoint_px: f64) -> CapabilityTier {
    if signals.reduced_motion {
        return CapabilityTier::Minimal;
    }
    let small = is_small_viewport(signals.viewport_width, breakpoint_px);
    let memory = signals.device_memory_gb.unwrap_or(DEFAULT_MEMORY_GB);
    let cores = signals.logical_cores.unwrap_or(DEFAULT_CORE_COUNT);
    if small && (memory < LOW_MEMORY_GB || cores < LOW_CORE_COUNT) {
        CapabilityTier::Minimal
    } else if !small && !signals.coarse_pointer {
        CapabilityTier::Full
    } else {
        CapabilityTier::Standard
    }
}

pub fn profile(signals: &HostSignals, breakpoint_px: f64) -> CapabilityProfile {
    CapabilityProfile {
        tier: classify_with(signals, breakpoint_px),
        small_viewport: is_small_viewport(signals.viewport_width, breakpoint_px),
        coarse_pointer: signals.coarse_pointer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_hints_fall_back_to_mid_defaults() {
        let phone = HostSignals {
            viewport_width: 390.0,
            coarse_pointer: true,
            ..HostSignals::default()
        };
        // 4 GB / 4 cores assumed: not constrained, so a phone lands on Standard.
        assert_eq!(classify(&phone), CapabilityTier::Standard);
    }

    #[test]
    fn tablet_width_with_touch_is_standard() {
        let tablet = HostSignals {
            viewport_width: 1024.0,
            device_memory_gb: Some(8.0),
            logical_cores: Some(8),
            coarse_pointer: true,
            reduced_motion: false,
        };
        assert_eq!(classify(&tablet), CapabilityTier::Standard);
    }

    #[test]
    fn non_finite_width_counts_as_small() {
        assert!(is_small_viewport(f64::NAN, MOBILE_BREAKPOINT_PX));
        assert!(is_small_viewport(768.0, MOBILE_BREAKPOINT_PX));
        assert!(!is_small_viewport(769.0, MOBILE_BREAKPOINT_PX));
    }

    #[test]
    fn demotion_walks_down_to_minimal() {
        assert_eq!(CapabilityTier::Full.demoted(), Some(CapabilityTier::Standard));
        assert_eq!(CapabilityTier::Standard.demoted(), Some(CapabilityTier::Minimal));
        assert_eq!(CapabilityTier::Minimal.demoted(), None);
    }
}
