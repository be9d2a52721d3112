pub mod constants;
pub mod geometry;
pub mod grid;
pub mod levels;
pub mod zone;

pub use constants::{COORD_DECIMALS, DEFAULT_MIN_GRID_SIZE, MAX_GRID_SIZE};
pub use geometry::{create_square, footprint_rect};
pub use grid::{cell_index, snap_to_origin};
pub use levels::LevelHierarchy;
pub use zone::{Zone, ZONE_PRIORITY};
