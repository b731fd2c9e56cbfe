// Shared tuning constants used by both the browser host and the native harness.

// Capability profiling
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0; // viewport widths at or below this count as small
pub const LOW_MEMORY_GB: f64 = 4.0; // navigator.deviceMemory below this is constrained
pub const LOW_CORE_COUNT: u32 = 4; // hardwareConcurrency below this is constrained
pub const DEFAULT_MEMORY_GB: f64 = 4.0; // assumed when the host gives no hint
pub const DEFAULT_CORE_COUNT: u32 = 4;

// Frame throttle per tier (minimum ms between executed frames)
pub const FULL_FRAME_INTERVAL_MS: f64 = 16.0;
pub const STANDARD_FRAME_INTERVAL_MS: f64 = 33.0;
pub const MINIMAL_FRAME_INTERVAL_MS: f64 = 50.0;

// Largest frame delta fed to generators and entities
pub const MAX_FRAME_DELTA_MS: f64 = 250.0;

// Spawn intervals are redrawn from interval * (1 ± INTERVAL_JITTER)
pub const INTERVAL_JITTER: f64 = 0.25;

// Lifecycle
pub const BATTERY_LOW_THRESHOLD: f64 = 0.3;

// Frame-rate monitor
pub const FPS_WINDOW_MS: f64 = 1000.0;
pub const LOW_FPS_THRESHOLD: f64 = 30.0;
pub const LOW_FPS_WINDOWS_BEFORE_DEMOTION: u32 = 2;

// Cursor follower
pub const CURSOR_NEAR_GAIN: f32 = 0.15; // ring marker
pub const CURSOR_TRAIL_GAIN: f32 = 0.05; // trailing dot
pub const CURSOR_HEADING_EPSILON_PX: f32 = 0.5; // below this the heading is held

// Seed mixing for per-generator RNG streams
pub const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;
