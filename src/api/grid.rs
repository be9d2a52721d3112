use crate::api::tile::{Representative, Tile};
use crate::core::constants::{DEFAULT_MIN_GRID_SIZE, MAX_GRID_SIZE};
use crate::core::grid::snap_to_origin;
use crate::core::levels::LevelHierarchy;
use crate::core::zone::{Zone, ZONE_PRIORITY};
use crate::util::coord::{lonlat_to_zone_xy, round_coord, zone_xy_to_lonlat};
use crate::util::error::Equi7Error;

/// The configured Equi7 tiling system.
///
/// Holds the immutable level hierarchy derived from `min_grid_size`; zones
/// are static. Construct once and share by reference; all operations are
/// read-only and thread-safe.
///
/// # Example
///
/// ```no_run
/// use equi7_rs::{Equi7Grid, Representative};
///
/// # fn main() -> Result<(), equi7_rs::Equi7Error> {
/// let grid = Equi7Grid::new(2560)?;
/// let id = grid.lonlat_to_tile_id(-79.5, -5.49, 0)?;
/// let (lon, lat) = grid.tile_id_to_lonlat(&id, Representative::Centroid)?;
/// println!("{} -> ({}, {})", id, lon, lat);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equi7Grid {
    levels: LevelHierarchy,
}

impl Equi7Grid {
    pub fn new(min_grid_size: u32) -> Result<Self, Equi7Error> {
        let levels = LevelHierarchy::new(min_grid_size, MAX_GRID_SIZE)?;
        Ok(Self { levels })
    }

    pub fn levels(&self) -> &LevelHierarchy {
        &self.levels
    }

    pub fn min_grid_size(&self) -> u32 {
        self.levels.min_grid_size()
    }

    /// Maps a geographic point to the tile owning it at the given level.
    ///
    /// Coordinates are rounded to 8 decimal places before projection; cell
    /// ownership is floor-based, so a point exactly on a cell boundary
    /// belongs to the tile whose origin equals that boundary.
    ///
    /// Zone coverage boxes are loose near continental fringes, so the
    /// projected point is also checked against the zone's planar extent;
    /// a point projecting outside it is `OutOfCoverage`, never a tile the
    /// grid cannot address.
    pub fn lonlat_to_tile(&self, lon: f64, lat: f64, level: u8) -> Result<Tile, Equi7Error> {
        let lon = round_coord(lon);
        let lat = round_coord(lat);

        let zone = Zone::for_lonlat(lon, lat)?;
        let cell_size = self.levels.cell_size(level)?;
        let xy = lonlat_to_zone_xy(zone, &(lon, lat))?;

        let extent = zone.extent();
        if xy.x() < extent.min().x
            || xy.x() >= extent.max().x
            || xy.y() < extent.min().y
            || xy.y() >= extent.max().y
        {
            return Err(Equi7Error::OutOfCoverage { lon, lat });
        }

        Ok(Tile::new(
            zone,
            cell_size,
            snap_to_origin(xy.x(), cell_size),
            snap_to_origin(xy.y(), cell_size),
        ))
    }

    /// `lonlat_to_tile`, serialized to the canonical id at the boundary.
    pub fn lonlat_to_tile_id(&self, lon: f64, lat: f64, level: u8) -> Result<String, Equi7Error> {
        Ok(self.lonlat_to_tile(lon, lat, level)?.id())
    }

    /// Maps a tile back to the geographic position of its representative
    /// point (centroid or lower-left corner), rounded to 8 decimal places.
    pub fn tile_to_lonlat(
        &self,
        tile: &Tile,
        representative: Representative,
    ) -> Result<(f64, f64), Equi7Error> {
        self.check_member(tile)?;
        let point = tile.representative_point(representative);
        let lonlat = zone_xy_to_lonlat(tile.zone, &point)?;
        Ok((lonlat.x(), lonlat.y()))
    }

    /// Decodes a tile id against this configuration.
    ///
    /// On top of the grammar checks, the embedded cell size must be a member
    /// of the configured hierarchy.
    pub fn tile_from_id(&self, id: &str) -> Result<Tile, Equi7Error> {
        let tile = Tile::from_id(id)?;
        if self.levels.level_of(tile.cell_size).is_none() {
            return Err(Equi7Error::MalformedTileId(id.to_string()));
        }
        Ok(tile)
    }

    /// `tile_from_id` composed with `tile_to_lonlat`.
    pub fn tile_id_to_lonlat(
        &self,
        id: &str,
        representative: Representative,
    ) -> Result<(f64, f64), Equi7Error> {
        let tile = self.tile_from_id(id)?;
        self.tile_to_lonlat(&tile, representative)
    }

    /// Level index of a tile under this configuration.
    pub fn level_of_tile(&self, tile: &Tile) -> Result<u8, Equi7Error> {
        self.levels
            .level_of(tile.cell_size)
            .ok_or_else(|| Equi7Error::MalformedTileId(tile.id()))
    }

    /// Snaps an arbitrary geographic coordinate to the grid vertex or
    /// centroid of its owning tile at the given level.
    pub fn align_to_grid(
        &self,
        lon: f64,
        lat: f64,
        level: u8,
        representative: Representative,
    ) -> Result<(f64, f64), Equi7Error> {
        let tile = self.lonlat_to_tile(lon, lat, level)?;
        self.tile_to_lonlat(&tile, representative)
    }

    fn check_member(&self, tile: &Tile) -> Result<(), Equi7Error> {
        if self.levels.level_of(tile.cell_size).is_none() {
            return Err(Equi7Error::MalformedTileId(tile.id()));
        }
        Ok(())
    }
}

impl Default for Equi7Grid {
    fn default() -> Self {
        // DEFAULT_MIN_GRID_SIZE is a valid configuration
        Equi7Grid::new(DEFAULT_MIN_GRID_SIZE).unwrap()
    }
}

impl std::fmt::Display for Equi7Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let max_level = self.levels.max_level();
        let level_msg = if max_level > 3 {
            format!("0, 1, ... , {}, {}", max_level - 1, max_level)
        } else {
            (0..=max_level)
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let zones = ZONE_PRIORITY
            .iter()
            .map(|z| z.code())
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(f, "Equi7Grid(min_grid_size={})", self.levels.min_grid_size())?;
        writeln!(f, "----------------")?;
        writeln!(f, "levels: {}", level_msg)?;
        writeln!(f, "zones: {}", zones)?;
        writeln!(f, "min_grid_size: {} meters", self.levels.min_grid_size())?;
        writeln!(
            f,
            "max_grid_size: {} meters",
            self.levels.cell_sizes().last().unwrap()
        )
    }
}
