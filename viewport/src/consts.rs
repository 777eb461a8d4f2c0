//! Shared numeric constants for the viewport crate.

// ── Drag / click ────────────────────────────────────────────────

/// Per-axis drag distance in screen pixels below which a release counts as a click.
pub const CLICK_THRESHOLD_PX: f64 = 10.0;

// ── Zoom ────────────────────────────────────────────────────────

/// Zoom is a percentage; this value is 1.0×.
pub const ZOOM_PERCENT_IDENTITY: f64 = 100.0;

/// Default lower zoom limit, in percent.
pub const DEFAULT_MIN_ZOOM: f64 = 50.0;

/// Default upper zoom limit, in percent.
pub const DEFAULT_MAX_ZOOM: f64 = 200.0;

/// Wheel pixels per zoom percentage point.
pub const WHEEL_PX_PER_ZOOM_PERCENT: f64 = 10.0;

// ── Geometry ────────────────────────────────────────────────────

/// Default world canvas size in pixels.
pub const DEFAULT_WORLD_SIZE: (f64, f64) = (3200.0, 2400.0);

/// Default visible window size in pixels.
pub const DEFAULT_VIEWPORT_SIZE: (f64, f64) = (1200.0, 900.0);

// ── Entities ────────────────────────────────────────────────────

/// Rotation a unit shows after an odd number of moves, in degrees.
pub const FLIPPED_ROTATION_DEG: f64 = 360.0;

/// Speed given to units spawned with [`crate::world::World::spawn_unit`].
pub const DEFAULT_UNIT_SPEED: f64 = 10.0;
