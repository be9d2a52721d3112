use geo_types::{Coord, LineString, Polygon, Rect};

/// Builds the closed square ring for a tile footprint.
pub fn create_square(origin_x: f64, origin_y: f64, size: f64) -> Polygon<f64> {
    let coords = vec![
        Coord { x: origin_x, y: origin_y },
        Coord { x: origin_x + size, y: origin_y },
        Coord { x: origin_x + size, y: origin_y + size },
        Coord { x: origin_x, y: origin_y + size },
        Coord { x: origin_x, y: origin_y },
    ];

    Polygon::new(LineString::from(coords), vec![])
}

/// Axis-aligned footprint `[origin, origin + size)` on both axes.
pub fn footprint_rect(origin_x: f64, origin_y: f64, size: f64) -> Rect<f64> {
    Rect::new(
        Coord { x: origin_x, y: origin_y },
        Coord { x: origin_x + size, y: origin_y + size },
    )
}
