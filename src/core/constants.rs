/// Cell size of the finest level when none is configured, in meters
pub const DEFAULT_MIN_GRID_SIZE: u32 = 2560;

/// Upper bound on any cell size, in meters
pub const MAX_GRID_SIZE: u32 = 2_500_000;

/// Decimal places kept on geographic coordinates before projection and
/// after unprojection; pins down the point-tile-point round trip
pub const COORD_DECIMALS: u32 = 8;
