//! # equi7-rs
//!
//! A quad-tree tiling system over the seven Equi7 continental equal-area
//! projections. Maps geographic coordinates to grid tiles and back, builds
//! region-pruned tile grids, and expands coarse tiles to the finest level.
//!
//! There are three main entry points.
//!
//! ### 1. `Equi7Grid` - Coordinate/Tile Mapping
//!
//! ```no_run
//! use equi7_rs::{Equi7Grid, Representative};
//!
//! # fn main() -> Result<(), equi7_rs::Equi7Error> {
//! let grid = Equi7Grid::new(2560)?;
//! let id = grid.lonlat_to_tile_id(-79.5, -5.49, 0)?;
//! println!("{}", id); // SA2560_E2009N2525
//! let (lon, lat) = grid.tile_id_to_lonlat(&id, Representative::Centroid)?;
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `build_grid` - Region-Pruned Tile Grids
//!
//! ```no_run
//! use equi7_rs::{Equi7Grid, Region, Zone};
//! use geo_types::{coord, Rect};
//!
//! # fn main() -> Result<(), equi7_rs::Equi7Error> {
//! let grid = Equi7Grid::new(2560)?;
//! let bbox = Rect::new(
//!     coord! { x: 4_600_000.0, y: 5_800_000.0 },
//!     coord! { x: 5_400_000.0, y: 6_900_000.0 },
//! );
//! let tiles = grid.build_grid(Zone::SA, 4, &Region::Bbox(bbox))?;
//! for tile in &tiles {
//!     println!("{} {:?}", tile.id(), tile.footprint());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `expand_to_finest` - Subgrid Expansion
//!
//! ```no_run
//! use equi7_rs::Equi7Grid;
//!
//! # fn main() -> Result<(), equi7_rs::Equi7Error> {
//! let grid = Equi7Grid::new(2560)?;
//! let ids = grid.expand_to_finest_ids("SA40960_E0125N0157", 0)?;
//! assert_eq!(ids.len(), 256);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod core;
pub mod util;

pub use api::{Equi7Grid, Region, Representative, Tile};
pub use core::{
    LevelHierarchy, Zone, COORD_DECIMALS, DEFAULT_MIN_GRID_SIZE, MAX_GRID_SIZE, ZONE_PRIORITY,
};
pub use util::{decode_tile_id, generate_tile_id, Coordinate, Equi7Error};

pub use geo_types;
