use crate::util::error::Equi7Error;
use geo_types::{Coord, Rect};
use serde::{Deserialize, Serialize};

/// One of the seven Equi7 continental zones.
///
/// Each zone carries its own azimuthal equidistant CRS (Equi7 V14
/// parameters), a planar extent anchored at (0, 0), and a geographic
/// coverage test used for point-to-zone assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Antarctica
    AN,
    /// North America
    NA,
    /// Oceania
    OC,
    /// South America
    SA,
    /// Africa
    AF,
    /// Europe
    EU,
    /// Asia
    AS,
}

/// Point-to-zone resolution order. Zone coverages overlap near continental
/// edges; the first matching zone in this order wins, so assignment is
/// deterministic and reproducible across runs.
pub const ZONE_PRIORITY: [Zone; 7] = [
    Zone::AN,
    Zone::NA,
    Zone::OC,
    Zone::SA,
    Zone::AF,
    Zone::EU,
    Zone::AS,
];

impl Zone {
    /// Two-letter zone code used in tile ids.
    pub fn code(&self) -> &'static str {
        match self {
            Zone::AN => "AN",
            Zone::NA => "NA",
            Zone::OC => "OC",
            Zone::SA => "SA",
            Zone::AF => "AF",
            Zone::EU => "EU",
            Zone::AS => "AS",
        }
    }

    /// Parse a zone code.
    pub fn from_code(code: &str) -> Option<Zone> {
        match code {
            "AN" => Some(Zone::AN),
            "NA" => Some(Zone::NA),
            "OC" => Some(Zone::OC),
            "SA" => Some(Zone::SA),
            "AF" => Some(Zone::AF),
            "EU" => Some(Zone::EU),
            "AS" => Some(Zone::AS),
            _ => None,
        }
    }

    /// PROJ definition of the zone CRS (Equi7 V14 azimuthal equidistant
    /// parameters, WGS84 datum, meters).
    pub fn proj_definition(&self) -> &'static str {
        match self {
            Zone::AN => {
                "+proj=aeqd +lat_0=-90 +lon_0=0 +x_0=3714266.97719 \
                 +y_0=3402016.50625 +datum=WGS84 +units=m +no_defs"
            }
            Zone::NA => {
                "+proj=aeqd +lat_0=52 +lon_0=-97.5 +x_0=8264722.17686 \
                 +y_0=4867518.35323 +datum=WGS84 +units=m +no_defs"
            }
            Zone::OC => {
                "+proj=aeqd +lat_0=-19.5 +lon_0=131.5 +x_0=6988408.5356 \
                 +y_0=7654884.53733 +datum=WGS84 +units=m +no_defs"
            }
            Zone::SA => {
                "+proj=aeqd +lat_0=-14 +lon_0=-60.5 +x_0=7257179.23559 \
                 +y_0=5592024.44605 +datum=WGS84 +units=m +no_defs"
            }
            Zone::AF => {
                "+proj=aeqd +lat_0=8.5 +lon_0=21.5 +x_0=5621452.01998 \
                 +y_0=5990638.42298 +datum=WGS84 +units=m +no_defs"
            }
            Zone::EU => {
                "+proj=aeqd +lat_0=53 +lon_0=24 +x_0=5837287.81977 \
                 +y_0=2121415.69617 +datum=WGS84 +units=m +no_defs"
            }
            Zone::AS => {
                "+proj=aeqd +lat_0=47 +lon_0=94 +x_0=4340913.84808 \
                 +y_0=4812712.92347 +datum=WGS84 +units=m +no_defs"
            }
        }
    }

    /// Planar extent of the zone in its own CRS, in meters.
    ///
    /// The lower-left corner is pinned at (0, 0) so tile origins at every
    /// level align to multiples of the cell size from the same fixed origin;
    /// the upper bounds are covering values for the zone geometry, rounded
    /// up to 100 km.
    pub fn extent(&self) -> Rect<f64> {
        let (max_x, max_y) = match self {
            Zone::AN => (7_400_000.0, 6_900_000.0),
            Zone::NA => (13_300_000.0, 9_800_000.0),
            Zone::OC => (14_000_000.0, 11_000_000.0),
            Zone::SA => (11_800_000.0, 9_400_000.0),
            Zone::AF => (11_300_000.0, 12_000_000.0),
            Zone::EU => (10_000_000.0, 6_600_000.0),
            Zone::AS => (11_800_000.0, 9_900_000.0),
        };
        Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: max_x, y: max_y })
    }

    /// Geographic coverage test in lon/lat (EPSG:4326).
    ///
    /// Coverages are continental bounding regions and deliberately overlap
    /// near the edges; `Zone::for_lonlat` resolves overlaps via
    /// `ZONE_PRIORITY`.
    pub fn covers(&self, lon: f64, lat: f64) -> bool {
        match self {
            Zone::AN => lat <= -56.0,
            Zone::NA => (-180.0..=-12.0).contains(&lon) && (7.0..=84.0).contains(&lat),
            // Oceania wraps the antimeridian
            Zone::OC => {
                ((112.0..=180.0).contains(&lon) || (-180.0..=-125.0).contains(&lon))
                    && (-56.0..=24.0).contains(&lat)
            }
            Zone::SA => (-95.0..=-25.0).contains(&lon) && (-56.0..=15.0).contains(&lat),
            Zone::AF => (-26.0..=64.0).contains(&lon) && (-40.0..=38.0).contains(&lat),
            Zone::EU => (-31.0..=70.0).contains(&lon) && (34.0..=84.0).contains(&lat),
            Zone::AS => (25.0..=180.0).contains(&lon) && (-12.0..=84.0).contains(&lat),
        }
    }

    /// Select the zone owning a geographic point.
    ///
    /// Evaluates `ZONE_PRIORITY` in order and returns the first zone whose
    /// coverage contains the point, or `OutOfCoverage` if none does.
    pub fn for_lonlat(lon: f64, lat: f64) -> Result<Zone, Equi7Error> {
        ZONE_PRIORITY
            .into_iter()
            .find(|zone| zone.covers(lon, lat))
            .ok_or(Equi7Error::OutOfCoverage { lon, lat })
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for zone in ZONE_PRIORITY {
            assert_eq!(Zone::from_code(zone.code()), Some(zone));
        }
        assert_eq!(Zone::from_code("XX"), None);
        assert_eq!(Zone::from_code("sa"), None);
    }

    #[test]
    fn test_for_lonlat_continents() -> Result<(), Equi7Error> {
        // Peru
        assert_eq!(Zone::for_lonlat(-79.5, -5.49)?, Zone::SA);
        // Manchester
        assert_eq!(Zone::for_lonlat(-2.248, 53.481)?, Zone::EU);
        // Cairo sits in the EU/AF overlap band; AF has priority
        assert_eq!(Zone::for_lonlat(31.24, 30.04)?, Zone::AF);
        // Denver
        assert_eq!(Zone::for_lonlat(-104.99, 39.74)?, Zone::NA);
        // Sydney
        assert_eq!(Zone::for_lonlat(151.21, -33.87)?, Zone::OC);
        // Beijing
        assert_eq!(Zone::for_lonlat(116.41, 39.9)?, Zone::AS);
        // South Pole
        assert_eq!(Zone::for_lonlat(0.0, -90.0)?, Zone::AN);
        Ok(())
    }

    #[test]
    fn test_for_lonlat_is_priority_ordered() -> Result<(), Equi7Error> {
        // Madrid is north of the AF coverage band, so EU wins
        assert_eq!(Zone::for_lonlat(-3.70, 40.42)?, Zone::EU);
        // Istanbul is inside both EU and AS coverage; EU has priority
        assert_eq!(Zone::for_lonlat(28.98, 41.01)?, Zone::EU);
        Ok(())
    }

    #[test]
    fn test_out_of_coverage() {
        // Mid-Pacific gap between SA and OC coverage
        let result = Zone::for_lonlat(-110.0, -30.0);
        assert!(matches!(result, Err(Equi7Error::OutOfCoverage { .. })));
    }

    #[test]
    fn test_extent_origin_is_zero() {
        for zone in ZONE_PRIORITY {
            let extent = zone.extent();
            assert_eq!(extent.min().x, 0.0);
            assert_eq!(extent.min().y, 0.0);
            assert!(extent.max().x > 0.0 && extent.max().y > 0.0);
        }
    }
}
