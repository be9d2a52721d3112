pub mod coord;
pub mod error;
pub mod identifier;

pub use coord::{lonlat_to_zone_xy, round_coord, zone_xy_to_lonlat, Coordinate};
pub use error::Equi7Error;
pub use identifier::{decode_tile_id, generate_tile_id};
