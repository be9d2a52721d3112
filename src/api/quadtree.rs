use crate::api::grid::Equi7Grid;
use crate::api::tile::Tile;
use crate::core::zone::Zone;
use crate::util::error::Equi7Error;
use geo::{BoundingRect, Intersects};
use geo_types::{Polygon, Rect};
use std::collections::VecDeque;

/// A caller-specified area of interest in a zone's planar CRS.
///
/// Supplies the intersection predicate for quad-tree pruning; the geometric
/// test itself is delegated to `geo`.
#[derive(Debug, Clone, PartialEq)]
pub enum Region {
    Bbox(Rect<f64>),
    Polygon(Polygon<f64>),
}

impl Region {
    /// Does a square tile footprint intersect this region?
    pub fn intersects(&self, footprint: &Rect<f64>) -> bool {
        match self {
            Region::Bbox(bbox) => bbox.intersects(footprint),
            Region::Polygon(polygon) => polygon.intersects(footprint),
        }
    }

    /// Bounding box of the region, used to narrow the root tile cover.
    fn bounding_rect(&self) -> Option<Rect<f64>> {
        match self {
            Region::Bbox(bbox) => Some(*bbox),
            Region::Polygon(polygon) => polygon.bounding_rect(),
        }
    }
}

impl Equi7Grid {
    /// Tiles at `target_level` whose footprints intersect `region`.
    ///
    /// Quad-tree walk with spatial pruning: branches whose footprint misses
    /// the region are discarded before subdivision, so the cost scales with
    /// the tiles near the region rather than the full level. The root cover
    /// is narrowed to the coarse tiles overlapping the region's bounding box.
    ///
    /// Output order is unspecified; treat the result as a set.
    pub fn build_grid(
        &self,
        zone: Zone,
        target_level: u8,
        region: &Region,
    ) -> Result<Vec<Tile>, Equi7Error> {
        let clip = region.bounding_rect();
        self.build_grid_pruned(zone, target_level, clip, |footprint| {
            region.intersects(footprint)
        })
    }

    /// `build_grid` with an arbitrary externally supplied intersection
    /// predicate and a full-zone root cover.
    pub fn build_grid_with<F>(
        &self,
        zone: Zone,
        target_level: u8,
        predicate: F,
    ) -> Result<Vec<Tile>, Equi7Error>
    where
        F: Fn(&Rect<f64>) -> bool,
    {
        self.build_grid_pruned(zone, target_level, None, predicate)
    }

    fn build_grid_pruned<F>(
        &self,
        zone: Zone,
        target_level: u8,
        clip: Option<Rect<f64>>,
        predicate: F,
    ) -> Result<Vec<Tile>, Equi7Error>
    where
        F: Fn(&Rect<f64>) -> bool,
    {
        let target_size = self.levels().cell_size(target_level)?;
        let coarsest = self.levels().max_level();
        let coarse_size = self.levels().cell_size(coarsest)?;

        // Work queue over surviving tiles, coarsest level first; explicit
        // queue instead of recursion so fine levels cannot exhaust the stack
        let mut queue: VecDeque<Tile> = root_cover(zone, coarse_size, clip)
            .filter(|tile| predicate(&tile.footprint()))
            .collect();

        let mut survivors = Vec::new();
        while let Some(tile) = queue.pop_front() {
            if tile.cell_size == target_size {
                survivors.push(tile);
                continue;
            }
            for child in tile.children() {
                if predicate(&child.footprint()) {
                    queue.push_back(child);
                }
            }
        }

        if survivors.is_empty() {
            return Err(Equi7Error::EmptyRegion);
        }
        Ok(survivors)
    }
}

/// Coarsest-level tiles covering the zone extent, optionally narrowed to the
/// tiles overlapping `clip`.
fn root_cover(
    zone: Zone,
    coarse_size: u32,
    clip: Option<Rect<f64>>,
) -> impl Iterator<Item = Tile> {
    let extent = zone.extent();
    let size = coarse_size as f64;
    let nx = (extent.max().x / size).ceil() as i64;
    let ny = (extent.max().y / size).ceil() as i64;

    let (ix_range, iy_range) = match clip {
        Some(bbox) => {
            let ix0 = ((bbox.min().x / size).floor() as i64).clamp(0, nx);
            let ix1 = (((bbox.max().x / size).floor() as i64) + 1).clamp(0, nx);
            let iy0 = ((bbox.min().y / size).floor() as i64).clamp(0, ny);
            let iy1 = (((bbox.max().y / size).floor() as i64) + 1).clamp(0, ny);
            (ix0..ix1, iy0..iy1)
        }
        None => (0..nx, 0..ny),
    };

    ix_range.flat_map(move |ix| {
        iy_range.clone().map(move |iy| {
            Tile::new(
                zone,
                coarse_size,
                ix * coarse_size as i64,
                iy * coarse_size as i64,
            )
        })
    })
}
