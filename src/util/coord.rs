use crate::core::constants::COORD_DECIMALS;
use crate::core::zone::Zone;
use crate::util::error::Equi7Error;
use geo_types::Point;
use proj::Proj;

pub trait Coordinate {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

/// Rounds a coordinate to the fixed decimal precision (8 places).
///
/// Applied to lon/lat before projection and after unprojection; without it
/// the forward/inverse projection round trip drifts across cell boundaries.
pub fn round_coord(value: f64) -> f64 {
    let scale = 10_f64.powi(COORD_DECIMALS as i32);
    (value * scale).round() / scale
}

/// Projects a lon/lat (EPSG:4326) coordinate into a zone's planar CRS.
pub fn lonlat_to_zone_xy<C: Coordinate>(zone: Zone, coord: &C) -> Result<Point<f64>, Equi7Error> {
    let proj = Proj::new_known_crs("EPSG:4326", zone.proj_definition(), None)
        .map_err(|e| Equi7Error::ProjectionError(e.to_string()))?;

    let (x, y) = proj
        .convert((coord.x(), coord.y()))
        .map_err(|e| Equi7Error::ProjectionError(e.to_string()))?;
    Ok(Point::new(x, y))
}

/// Unprojects a zone planar coordinate back to lon/lat (EPSG:4326).
pub fn zone_xy_to_lonlat<C: Coordinate>(zone: Zone, coord: &C) -> Result<Point<f64>, Equi7Error> {
    let proj = Proj::new_known_crs(zone.proj_definition(), "EPSG:4326", None)
        .map_err(|e| Equi7Error::ProjectionError(e.to_string()))?;

    let (lon, lat) = proj
        .convert((coord.x(), coord.y()))
        .map_err(|e| Equi7Error::ProjectionError(e.to_string()))?;
    Ok(Point::new(round_coord(lon), round_coord(lat)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_coord() {
        assert_eq!(round_coord(-79.5000000049), -79.5);
        assert_eq!(round_coord(-79.507568), -79.507568);
        assert_eq!(round_coord(1.234567894), 1.23456789);
        assert_eq!(round_coord(1.234567896), 1.2345679);
    }

    #[test]
    fn test_round_coord_is_idempotent() {
        let rounded = round_coord(12.3456789012345);
        assert_eq!(round_coord(rounded), rounded);
    }

    #[test]
    fn test_project_into_sa() -> Result<(), Equi7Error> {
        let xy = lonlat_to_zone_xy(Zone::SA, &(-79.5, -5.49))?;

        // Northwest of the SA projection center, still inside the extent
        assert!(xy.x() > 4_000_000.0 && xy.x() < 7_257_179.0);
        assert!(xy.y() > 5_592_024.0 && xy.y() < 8_000_000.0);
        Ok(())
    }

    #[test]
    fn test_roundtrip() -> Result<(), Equi7Error> {
        let lon = -79.5;
        let lat = -5.49;

        let xy = lonlat_to_zone_xy(Zone::SA, &(lon, lat))?;
        let back = zone_xy_to_lonlat(Zone::SA, &xy)?;

        assert!((lon - back.x()).abs() < 1e-6);
        assert!((lat - back.y()).abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn test_tuple_and_point_same_result() -> Result<(), Equi7Error> {
        let from_tuple = lonlat_to_zone_xy(Zone::EU, &(-2.248, 53.481))?;
        let from_point = lonlat_to_zone_xy(Zone::EU, &Point::new(-2.248, 53.481))?;

        assert_eq!(from_tuple.x(), from_point.x());
        assert_eq!(from_tuple.y(), from_point.y());
        Ok(())
    }
}
