//! Global pause / resume / teardown coordination.
//!
//! The coordinator owns the scheduler and is the only place that reacts to
//! host signals: visibility, battery level, viewport resizes and pointer input.
//! Pause is level-triggered and recomputed from the latest value of every signal.

use crate::config::{AuroraOptions, GeneratorConfig};
use crate::constants::SEED_MIX;
use crate::cursor::CursorFollower;
use crate::entity::EntityKind;
use crate::error::HostError;
use crate::fps::FrameRateMonitor;
use crate::generators::EffectGenerator;
use crate::profiler::{self, CapabilityProfile, CapabilityTier, HostSignals};
use crate::registry::Registry;
use crate::scheduler::{FrameReport, Scheduler};
use crate::surface::Surface;
use glam::Vec2;

/// Build a coordinator from whatever the host could report.
///
/// A missing capability hint assumes mid-tier defaults; a missing frame clock
/// yields an inert Minimal coordinator with every generator disabled.
pub fn initialize<S: Surface>(
    signals: Result<HostSignals, HostError>,
    surface: S,
    options: AuroraOptions,
) -> Coordinator<S> {
    match signals {
        Ok(signals) => Coordinator::new(&signals, surface, options),
        Err(HostError::ClockUnavailable) => {
            log::warn!("[lifecycle] {}; animations disabled", HostError::ClockUnavailable);
            Coordinator::degraded(surface, options)
        }
        Err(e) => {
            log::warn!("[lifecycle] {}; assuming mid-tier defaults", e);
            Coordinator::with_profile(CapabilityProfile::mid_tier(), surface, options)
        }
    }
}

pub struct Coordinator<S: Surface> {
    scheduler: Scheduler<S>,
    profile: CapabilityProfile,
    /// Upper bound imposed by frame-rate demotion.
    tier_cap: Option<CapabilityTier>,
    options: AuroraOptions,
    visible: bool,
    battery_level: Option<f64>,
    paused_at_ms: Option<f64>,
    monitor: FrameRateMonitor,
    generators_enabled: bool,
    generation: u64,
    torn_down: bool,
}

impl<S: Surface> Coordinator<S> {
    pub fn new(signals: &HostSignals, surface: S, options: AuroraOptions) -> Self {
        let profile = profiler::profile(signals, options.mobile_breakpoint_px);
        Self::with_profile(profile, surface, options)
    }

    pub fn with_profile(profile: CapabilityProfile, surface: S, options: AuroraOptions) -> Self {
        Self::build(profile, surface, options, true)
    }

    /// Minimal tier, no generators, no cursor.
    pub fn degraded(surface: S, options: AuroraOptions) -> Self {
        let profile = CapabilityProfile {
            tier: CapabilityTier::Minimal,
            small_viewport: true,
            coarse_pointer: true,
        };
        Self::build(profile, surface, options, false)
    }

    fn build(
        profile: CapabilityProfile,
        surface: S,
        options: AuroraOptions,
        enabled: bool,
    ) -> Self {
        let scheduler = Scheduler::new(surface, profile.tier.min_frame_interval_ms());
        let mut coordinator = Self {
            scheduler,
            profile,
            tier_cap: None,
            monitor: FrameRateMonitor::new(options.low_fps_threshold),
            options,
            visible: true,
            battery_level: None,
            paused_at_ms: None,
            generators_enabled: enabled,
            generation: 0,
            torn_down: false,
        };
        coordinator.apply_tier(profile.tier);
        coordinator.sync_cursor();
        log::info!(
            "[lifecycle] tier={} generators={:?} cursor={}",
            profile.tier.label(),
            coordinator.scheduler.active_kinds(),
            coordinator.scheduler.cursor().is_some()
        );
        coordinator
    }

    #[inline]
    pub fn tier(&self) -> CapabilityTier {
        self.profile.tier
    }

    pub fn profile(&self) -> CapabilityProfile {
        self.profile
    }

    pub fn scheduler(&self) -> &Scheduler<S> {
        &self.scheduler
    }

    pub fn registry(&self) -> &Registry<S::Node> {
        self.scheduler.registry()
    }

    pub fn surface(&self) -> &S {
        self.scheduler.surface()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.scheduler.surface_mut()
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.scheduler.is_paused()
    }

    #[inline]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Host frame callback.
    pub fn frame(&mut self, now_ms: f64) -> FrameReport {
        if self.torn_down || self.scheduler.is_paused() {
            return FrameReport::default();
        }
        if self.options.adaptive_fps
            && self.monitor.record(now_ms).is_some()
            && self.monitor.sustained_low()
        {
            self.demote();
        }
        self.scheduler.frame(now_ms)
    }

    pub fn on_visibility(&mut self, visible: bool, now_ms: f64) {
        self.visible = visible;
        self.reevaluate(now_ms);
    }

    /// `None` when the host stopped reporting battery state.
    pub fn on_battery(&mut self, level: Option<f64>, now_ms: f64) {
        self.battery_level = level.filter(|l| l.is_finite());
        self.reevaluate(now_ms);
    }

    /// Reclassify when the viewport width crosses the mobile breakpoint.
    pub fn on_resize(&mut self, signals: &HostSignals) {
        if self.torn_down || !self.generators_enabled {
            return;
        }
        let breakpoint = self.options.mobile_breakpoint_px;
        let small = profiler::is_small_viewport(signals.viewport_width, breakpoint);
        if small == self.profile.small_viewport {
            return;
        }
        let next = profiler::profile(signals, breakpoint);
        let tier = self.capped(next.tier);
        log::info!(
            "[lifecycle] viewport crossed breakpoint ({}px): {} -> {}",
            signals.viewport_width,
            self.profile.tier.label(),
            tier.label()
        );
        let previous = self.profile.tier;
        self.profile = CapabilityProfile { tier, ..next };
        if tier != previous {
            self.apply_tier(tier);
        }
        self.sync_cursor();
    }

    pub fn on_pointer_move(&mut self, position: Vec2) {
        if let Some(cursor) = self.scheduler.cursor_mut() {
            cursor.push_pointer(position);
        }
    }

    pub fn on_hover(&mut self, hover: bool) {
        if let Some(cursor) = self.scheduler.cursor_mut() {
            cursor.set_hover(hover);
        }
    }

    pub fn on_press(&mut self, pressed: bool) {
        if let Some(cursor) = self.scheduler.cursor_mut() {
            cursor.set_pressed(pressed);
        }
    }

    /// Shut down every generator and release every registered entity. Safe to
    /// call repeatedly and from any state.
    pub fn teardown(&mut self) -> usize {
        if self.torn_down {
            return 0;
        }
        let sched = &mut self.scheduler;
        let mut released = 0;
        for generator in sched.generators.iter_mut() {
            released += generator.shutdown(&mut sched.registry, &mut sched.surface);
        }
        released += sched.registry.release_all(&mut sched.surface);
        sched.generators.clear();
        if sched.cursor.take().is_some() {
            sched.surface.hide_cursor();
        }
        sched.pause();
        self.torn_down = true;
        log::info!("[lifecycle] teardown released {} entities", released);
        released
    }

    fn battery_low(&self) -> bool {
        self.battery_level
            .is_some_and(|level| level < self.options.battery_low_threshold)
    }

    fn reevaluate(&mut self, now_ms: f64) {
        if self.torn_down {
            return;
        }
        let should_pause = !self.visible || self.battery_low();
        match (should_pause, self.scheduler.is_paused()) {
            (true, false) => {
                self.scheduler.pause();
                self.paused_at_ms = Some(now_ms);
                self.monitor.reset();
                log::info!(
                    "[lifecycle] paused (visible={}, battery={:?})",
                    self.visible,
                    self.battery_level
                );
            }
            (false, true) => {
                let paused_for = self
                    .paused_at_ms
                    .take()
                    .map(|at| (now_ms - at).max(0.0))
                    .unwrap_or(0.0);
                let dropped = self.scheduler.drop_stale(paused_for);
                self.scheduler.resume();
                self.monitor.reset();
                log::info!(
                    "[lifecycle] resumed after {:.0}ms, dropped {} stale entities",
                    paused_for,
                    dropped
                );
            }
            _ => {}
        }
    }

    fn capped(&self, tier: CapabilityTier) -> CapabilityTier {
        match self.tier_cap {
            Some(cap) => tier.min(cap),
            None => tier,
        }
    }

    fn demote(&mut self) {
        self.monitor.reset();
        let Some(lower) = self.profile.tier.demoted() else {
            return;
        };
        log::warn!(
            "[lifecycle] sustained frame rate below {:.0}fps ({:?}); demoting {} -> {}",
            self.options.low_fps_threshold,
            self.monitor.last_fps(),
            self.profile.tier.label(),
            lower.label()
        );
        self.tier_cap = Some(lower);
        self.profile.tier = lower;
        self.apply_tier(lower);
    }

    /// Reconfigure every generator kind for `tier`.
    fn apply_tier(&mut self, tier: CapabilityTier) {
        self.generation += 1;
        let sched = &mut self.scheduler;
        sched.set_min_interval_ms(tier.min_frame_interval_ms());
        for kind in EntityKind::ALL {
            let config = if self.generators_enabled {
                GeneratorConfig::for_tier(kind, tier)
            } else {
                None
            };
            let position = sched.generators.iter().position(|g| g.kind() == kind);
            match (position, config) {
                (Some(at), None) => {
                    let mut generator = sched.generators.remove(at);
                    generator.shutdown(&mut sched.registry, &mut sched.surface);
                    log::info!("[lifecycle] {} disabled at {} tier", kind.label(), tier.label());
                }
                (Some(at), Some(config)) => {
                    let generator = &mut sched.generators[at];
                    if generator.config().is_spawn_once() || config.is_spawn_once() {
                        generator.shutdown(&mut sched.registry, &mut sched.surface);
                    }
                    generator.configure(config);
                }
                (None, Some(config)) => {
                    if !sched.surface.has_mount(kind) {
                        log::warn!(
                            "[lifecycle] mount for {} is missing; generator not started",
                            kind.label()
                        );
                        continue;
                    }
                    let seed = self.options.seed
                        ^ ((kind.index() as u64 + 1).wrapping_mul(SEED_MIX))
                        ^ self.generation.wrapping_mul(SEED_MIX.rotate_left(17));
                    sched.install(EffectGenerator::new(kind, config, seed));
                }
                (None, None) => {}
            }
        }
    }

    fn sync_cursor(&mut self) {
        let sched = &mut self.scheduler;
        let wanted = self.generators_enabled
            && self.profile.cursor_enabled()
            && sched.surface.has_cursor();
        match (wanted, sched.cursor.is_some()) {
            (true, false) => sched.cursor = Some(CursorFollower::default()),
            (false, true) => {
                sched.cursor = None;
                sched.surface.hide_cursor();
            }
            _ => {}
        }
    }
}
