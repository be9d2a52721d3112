//! Planar cell math: floor-based snapping of zone coordinates to cell
//! origins. Origins are multiples of the cell size from the zone extent
//! origin at (0, 0), so cells at every level nest exactly.

/// Snaps a planar coordinate down to the origin of its cell.
///
/// Floor (not round or truncate-toward-zero) so a point exactly on a cell
/// boundary belongs to the cell whose origin equals that boundary.
pub fn snap_to_origin(value: f64, cell_size: u32) -> i64 {
    cell_index(value, cell_size) * cell_size as i64
}

/// Cell index of a planar coordinate (origin / cell_size).
pub fn cell_index(value: f64, cell_size: u32) -> i64 {
    (value / cell_size as f64).floor() as i64
}
