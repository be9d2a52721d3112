pub mod grid;
pub mod quadtree;
pub mod subgrid;
pub mod tile;

pub use grid::Equi7Grid;
pub use quadtree::Region;
pub use tile::{Representative, Tile};
