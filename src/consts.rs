//! Shared numeric constants for the editor crate.

// ── Elements ────────────────────────────────────────────────────

/// Width and height, in pixels, of a freshly added element.
pub const DEFAULT_ELEMENT_SIZE: f64 = 100.0;

// ── Image service ───────────────────────────────────────────────

/// Exclusive upper bound for the random photo index; indices are drawn
/// uniformly from `[0, PHOTO_INDEX_RANGE)`.
pub const PHOTO_INDEX_RANGE: u32 = 100;

// ── Demo host ───────────────────────────────────────────────────

/// Container width used by the demo host when `CONTAINER_WIDTH` is unset.
pub const DEFAULT_CONTAINER_WIDTH: f64 = 800.0;

/// Container height used by the demo host when `CONTAINER_HEIGHT` is unset.
pub const DEFAULT_CONTAINER_HEIGHT: f64 = 600.0;
