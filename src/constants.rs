// Page wiring for the browser host: mount ids, marker ids and presentation tuning.

// Generator mounts, in tick order (star, streak, shooting star, meteor, debris)
pub const MOUNT_IDS: [&str; 5] = [
    "starfield",
    "starfall",
    "shootingStars",
    "meteorShower",
    "spaceDebris",
];

// CSS class applied to each spawned node, same order as MOUNT_IDS
pub const NODE_CLASSES: [&str; 5] = ["star", "starfall", "shooting-star", "meteor", "debris"];

// Page keyframes animating each kind, same order as MOUNT_IDS
pub const KEYFRAMES: [&str; 5] = [
    "starTwinkle",
    "starfall",
    "shootingStar",
    "meteor",
    "debrisFloat",
];

// Attribute carrying the entity id on each spawned node
pub const ENTITY_ATTR: &str = "data-entity";

// Cursor markers
pub const CURSOR_POINTER_ID: &str = "cursorTriangle";
pub const CURSOR_RING_ID: &str = "cursorCircle";
pub const CURSOR_TRAIL_ID: &str = "cursorTrail";

// Pointer art points up, so the heading is rotated a quarter turn
pub const CURSOR_HEADING_OFFSET_DEG: f32 = 90.0;

// Colors (CSS custom properties defined by the page)
pub const CURSOR_POINTER_COLOR: &str = "var(--golden-primary)";
pub const CURSOR_ACCENT_COLOR: &str = "var(--primary)";
pub const CURSOR_RING_COLOR: &str = "var(--accent)";

// Regions that put the cursor into its hover state
pub const HOVER_SELECTOR: &str = "a, button, .cta-button, .project-card, .education-card, \
.feature-card, .social-item, .tech-icon, .certificate-card, .nav-item, \
.view-all-btn, .submit-button";

// Media queries read at startup
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Body class toggled when the viewport is at or below the mobile breakpoint
pub const MOBILE_BODY_CLASS: &str = "mobile";

/// CSS rotation for the pointer marker given the trail → pointer heading.
#[inline]
pub fn pointer_rotation_deg(heading_deg: f32) -> f32 {
    heading_deg + CURSOR_HEADING_OFFSET_DEG
}
