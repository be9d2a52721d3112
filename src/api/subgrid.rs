use crate::api::grid::Equi7Grid;
use crate::api::tile::Tile;
use crate::util::error::Equi7Error;
use rayon::prelude::*;

impl Equi7Grid {
    /// All descendant tiles of `tile` at `finest_level`, with no spatial
    /// pruning.
    ///
    /// Pure function of `(tile, finest_level)`: the quad subtrees are
    /// expanded as independent rayon tasks and merged by concatenation, so
    /// the result is the same set regardless of the parallel decomposition.
    /// Output order is unspecified.
    ///
    /// Fails with `InvalidLevel` if `finest_level` is coarser than the
    /// tile's own level; expansion only moves to finer levels.
    pub fn expand_to_finest(&self, tile: &Tile, finest_level: u8) -> Result<Vec<Tile>, Equi7Error> {
        let tile_level = self.level_of_tile(tile)?;
        let finest_size = self.levels().cell_size(finest_level)?;
        if finest_level > tile_level {
            return Err(Equi7Error::InvalidLevel {
                level: finest_level,
                max_level: tile_level,
            });
        }

        Ok(expand(*tile, finest_size))
    }

    /// `expand_to_finest` over canonical id strings.
    pub fn expand_to_finest_ids(
        &self,
        tile_id: &str,
        finest_level: u8,
    ) -> Result<Vec<String>, Equi7Error> {
        let tile = self.tile_from_id(tile_id)?;
        let tiles = self.expand_to_finest(&tile, finest_level)?;
        Ok(tiles.iter().map(Tile::id).collect())
    }
}

fn expand(tile: Tile, finest_size: u32) -> Vec<Tile> {
    if tile.cell_size == finest_size {
        return vec![tile];
    }
    tile.children()
        .into_par_iter()
        .flat_map(|child| expand(child, finest_size))
        .collect()
}
