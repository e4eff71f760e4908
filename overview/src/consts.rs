//! Shared constants for the overview crate.

// ── Ratio bounds ────────────────────────────────────────────────

/// Smallest fraction of the overview panel the box may occupy before a reset.
pub const DEFAULT_MIN_RATIO: f64 = 0.1;

/// Largest fraction of the overview panel the box may occupy before a reset.
pub const DEFAULT_MAX_RATIO: f64 = 0.75;

// ── Projection ──────────────────────────────────────────────────

/// Sphere radius used by EPSG:3857, in meters.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Valid longitude/latitude range for EPSG:3857 as `[min_x, min_y, max_x, max_y]`.
pub const WEB_MERCATOR_WORLD_EXTENT: [f64; 4] = [-180.0, -85.0, 180.0, 85.0];

// ── DOM ─────────────────────────────────────────────────────────

/// CSS property whose transition settles the collapse animation.
pub const COLLAPSE_TRANSITION_PROPERTY: &str = "width";

pub const CLASS_CONTAINER: &str = "ovw-container";
pub const CLASS_MAP: &str = "ovw-map";
pub const CLASS_BOX: &str = "ovw-box";
pub const CLASS_COLLAPSED: &str = "ovw-collapsed";
pub const CLASS_BTN_ABSOLUTE: &str = "ovw-btn-absolute";
pub const CLASS_OL_CONTROL: &str = "ol-control";
pub const CLASS_OL_UNSELECTABLE: &str = "ol-unselectable";

// ── Labels ──────────────────────────────────────────────────────

pub const DEFAULT_TIP_LABEL: &str = "Interactive overview map";

/// », shown while the panel is collapsed.
pub const DEFAULT_LABEL: &str = "\u{00BB}";

/// «, shown while the panel is expanded.
pub const DEFAULT_COLLAPSE_LABEL: &str = "\u{00AB}";
