//! Single source of truth for shared engine constants.

/// Maximum charge a single cursor can carry. Larger deposits are split.
pub const MAX_CHARGE: i32 = 1000;

/// Hard cap on live cursors per spreader, for both injection and restore.
pub const MAX_CURSORS: usize = 32;

/// Largest valid decay delay. Decay delay is a one-bit gate.
pub const MAX_DECAY_DELAY: i32 = 1;

/// Decay delay given to freshly injected cursors.
pub const INITIAL_DECAY_DELAY: i32 = 1;

/// In world-generation mode a cursor dies once its horizontal distance from
/// the origin exceeds this many cells.
pub const WORLDGEN_MAX_HORIZONTAL_RADIUS: i32 = 15;

/// Divisor applied to `ln(1 + charge)` when deriving feedback intensity.
pub const INTENSITY_LOG_DIVISOR: f64 = 2.3;

/// Bit shift applied to the intensity before adding the packed face mask.
pub const INTENSITY_SHIFT: u32 = 6;

/// Radius beyond which substrate decay penalties reach their maximum.
pub const MAX_GROWTH_RATE_RADIUS: i32 = 24;

/// Cursor positions stay within `[-MAX_WORLD_COORD, MAX_WORLD_COORD]` on
/// every axis, so neighbour offsets and distances cannot overflow.
pub const MAX_WORLD_COORD: i32 = 30_000_000;

/// Side length of a tick-tracking chunk in cells.
pub const CHUNK_SIZE: i32 = 16;
