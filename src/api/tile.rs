use crate::core::geometry::{create_square, footprint_rect};
use crate::core::zone::Zone;
use crate::util::error::Equi7Error;
use crate::util::identifier::{decode_tile_id, generate_tile_id};
use geo_types::{Point, Polygon, Rect};
use serde::{Deserialize, Serialize};

/// Which representative point of a tile to use when mapping back to lon/lat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Representative {
    /// Tile center (`origin + cell_size / 2` on each axis).
    Centroid,
    /// Lower-left corner (the tile origin).
    Corner,
}

/// A single square tile of the Equi7 quad-tree grid.
///
/// A tile is a value: its identity is `(zone, cell_size, origin)` and any two
/// computations producing the same identity are interchangeable. The origin
/// is the planar lower-left corner in meters, always a multiple of
/// `cell_size` from the zone extent origin.
///
/// # Example
///
/// ```no_run
/// use equi7_rs::Tile;
///
/// # fn main() -> Result<(), equi7_rs::Equi7Error> {
/// let tile = Tile::from_id("SA2560_E2009N2525")?;
/// assert_eq!(tile.id(), "SA2560_E2009N2525");
/// let polygon = tile.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Continental zone owning this tile
    pub zone: Zone,
    /// Edge length in meters
    pub cell_size: u32,
    /// Planar x of the lower-left corner, meters
    pub origin_x: i64,
    /// Planar y of the lower-left corner, meters
    pub origin_y: i64,
}

impl Tile {
    pub fn new(zone: Zone, cell_size: u32, origin_x: i64, origin_y: i64) -> Self {
        Self {
            zone,
            cell_size,
            origin_x,
            origin_y,
        }
    }

    /// Canonical string id of this tile.
    pub fn id(&self) -> String {
        generate_tile_id(self.zone, self.cell_size, self.origin_x, self.origin_y)
    }

    /// Parse a tile from its canonical id.
    ///
    /// Checks grammar and zone code only; whether the cell size belongs to a
    /// configured hierarchy is validated by [`crate::Equi7Grid`] methods.
    pub fn from_id(id: &str) -> Result<Self, Equi7Error> {
        let (zone, cell_size, origin_x, origin_y) = decode_tile_id(id)?;
        Ok(Self::new(zone, cell_size, origin_x, origin_y))
    }

    /// Axis-aligned footprint `[origin, origin + cell_size)` in the zone CRS.
    pub fn footprint(&self) -> Rect<f64> {
        footprint_rect(
            self.origin_x as f64,
            self.origin_y as f64,
            self.cell_size as f64,
        )
    }

    /// Footprint as a closed polygon, suitable for export.
    pub fn to_polygon(&self) -> Polygon<f64> {
        create_square(
            self.origin_x as f64,
            self.origin_y as f64,
            self.cell_size as f64,
        )
    }

    /// Tile center in the zone CRS.
    pub fn centroid(&self) -> Point<f64> {
        let half = self.cell_size as f64 / 2.0;
        Point::new(self.origin_x as f64 + half, self.origin_y as f64 + half)
    }

    /// Lower-left corner in the zone CRS.
    pub fn corner(&self) -> Point<f64> {
        Point::new(self.origin_x as f64, self.origin_y as f64)
    }

    /// Representative point used for tile-to-lonlat mapping.
    pub fn representative_point(&self, representative: Representative) -> Point<f64> {
        match representative {
            Representative::Centroid => self.centroid(),
            Representative::Corner => self.corner(),
        }
    }

    /// The 4 children of this tile at the next finer level (quad split).
    ///
    /// Valid only while a finer level exists, i.e. `cell_size` is an even
    /// multiple of the configured minimum; the builder and expander stop
    /// before crossing that bound.
    pub fn children(&self) -> [Tile; 4] {
        let child_size = self.cell_size / 2;
        let step = child_size as i64;
        [
            Tile::new(self.zone, child_size, self.origin_x, self.origin_y),
            Tile::new(self.zone, child_size, self.origin_x + step, self.origin_y),
            Tile::new(self.zone, child_size, self.origin_x, self.origin_y + step),
            Tile::new(
                self.zone,
                child_size,
                self.origin_x + step,
                self.origin_y + step,
            ),
        ]
    }

    /// The tile at the next coarser level containing this tile.
    pub fn parent(&self) -> Tile {
        let parent_size = self.cell_size as i64 * 2;
        Tile::new(
            self.zone,
            self.cell_size * 2,
            self.origin_x.div_euclid(parent_size) * parent_size,
            self.origin_y.div_euclid(parent_size) * parent_size,
        )
    }

    /// True when `other` lies fully inside this tile's footprint.
    pub fn contains(&self, other: &Tile) -> bool {
        self.zone == other.zone
            && other.origin_x >= self.origin_x
            && other.origin_y >= self.origin_y
            && other.origin_x + other.cell_size as i64 <= self.origin_x + self.cell_size as i64
            && other.origin_y + other.cell_size as i64 <= self.origin_y + self.cell_size as i64
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id())
    }
}
