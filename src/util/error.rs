/// Error type for equi7-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Equi7Error {
    /// The point falls outside the coverage of every Equi7 zone.
    OutOfCoverage { lon: f64, lat: f64 },
    /// The grid configuration is invalid (e.g., zero or oversized min_grid_size).
    InvalidConfiguration(String),
    /// The level is outside the configured hierarchy, or an expansion
    /// targets a level coarser than its source tile.
    InvalidLevel { level: u8, max_level: u8 },
    /// The tile id does not match the canonical grammar or references an
    /// unknown zone or cell size.
    MalformedTileId(String),
    /// No tile at the target level survived region pruning.
    EmptyRegion,
    /// Coordinate projection failed (lon/lat to zone CRS or back).
    ProjectionError(String),
}

impl std::fmt::Display for Equi7Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Equi7Error::OutOfCoverage { lon, lat } => {
                write!(f, "Point ({}, {}) is outside all Equi7 zones", lon, lat)
            }
            Equi7Error::InvalidConfiguration(msg) => {
                write!(f, "Invalid grid configuration: {}", msg)
            }
            Equi7Error::InvalidLevel { level, max_level } => {
                write!(f, "Invalid level: {} (maximum is {})", level, max_level)
            }
            Equi7Error::MalformedTileId(id) => write!(f, "Malformed tile id: {}", id),
            Equi7Error::EmptyRegion => write!(f, "No tiles intersect the requested region"),
            Equi7Error::ProjectionError(msg) => write!(f, "Projection error: {}", msg),
        }
    }
}

impl std::error::Error for Equi7Error {}
