use equi7_rs::{Equi7Error, Equi7Grid, Representative};

fn main() -> Result<(), Equi7Error> {
    let grid = Equi7Grid::new(2560)?;
    println!("{}", grid);

    let lon = -79.5;
    let lat = -5.49;

    let tile = grid.lonlat_to_tile(lon, lat, 0)?;
    println!("Tile ID: {}", tile.id());
    println!("Origin: ({}, {})", tile.origin_x, tile.origin_y);

    let (center_lon, center_lat) = grid.tile_to_lonlat(&tile, Representative::Centroid)?;
    println!("Centroid: ({}, {})", center_lon, center_lat);

    if let Ok(json) = serde_json::to_string(&tile) {
        println!("Tile JSON: {}", json);
    }

    Ok(())
}
