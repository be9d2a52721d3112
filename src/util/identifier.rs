use crate::core::zone::Zone;
use crate::util::error::Equi7Error;

/// Minimum digit width of the easting/northing indices in a tile id
const INDEX_WIDTH: usize = 4;

/// Encodes a tile identity as `"{ZONE}{cell_size}_E{ix}N{iy}"`.
///
/// `ix` and `iy` are tile indices (origin divided by cell size), zero-padded
/// to at least four digits.
pub fn generate_tile_id(zone: Zone, cell_size: u32, origin_x: i64, origin_y: i64) -> String {
    let ix = origin_x.div_euclid(cell_size as i64);
    let iy = origin_y.div_euclid(cell_size as i64);

    format!(
        "{}{}_E{:0width$}N{:0width$}",
        zone.code(),
        cell_size,
        ix,
        iy,
        width = INDEX_WIDTH
    )
}

/// Decodes a canonical tile id into `(zone, cell_size, origin_x, origin_y)`.
///
/// Strict inverse of `generate_tile_id`: the grammar must match, the zone
/// code must be known, and re-encoding the parsed fields must reproduce the
/// input exactly (non-canonical padding is rejected). Cell-size membership
/// in a hierarchy is the caller's check, since it depends on configuration.
pub fn decode_tile_id(id: &str) -> Result<(Zone, u32, i64, i64), Equi7Error> {
    let malformed = || Equi7Error::MalformedTileId(id.to_string());

    let alpha_len = id.chars().take_while(|c| c.is_ascii_uppercase()).count();
    let zone = Zone::from_code(&id[..alpha_len]).ok_or_else(malformed)?;

    let rest = &id[alpha_len..];
    let (size_part, index_part) = rest.split_once('_').ok_or_else(malformed)?;
    let cell_size: u32 = size_part.parse().map_err(|_| malformed())?;
    if cell_size == 0 {
        return Err(malformed());
    }

    let index_part = index_part.strip_prefix('E').ok_or_else(malformed)?;
    let (ix_part, iy_part) = index_part.split_once('N').ok_or_else(malformed)?;
    if !is_digits(ix_part) || !is_digits(iy_part) {
        return Err(malformed());
    }
    let ix: i64 = ix_part.parse().map_err(|_| malformed())?;
    let iy: i64 = iy_part.parse().map_err(|_| malformed())?;

    let origin_x = ix * cell_size as i64;
    let origin_y = iy * cell_size as i64;

    // Reject non-canonical forms (wrong padding, leading zeros in the size)
    if generate_tile_id(zone, cell_size, origin_x, origin_y) != id {
        return Err(malformed());
    }

    Ok((zone, cell_size, origin_x, origin_y))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_tile_id() {
        let id = generate_tile_id(Zone::SA, 2560, 2009 * 2560, 2525 * 2560);
        assert_eq!(id, "SA2560_E2009N2525");
    }

    #[test]
    fn test_generate_pads_small_indices() {
        let id = generate_tile_id(Zone::EU, 1_310_720, 0, 3 * 1_310_720);
        assert_eq!(id, "EU1310720_E0000N0003");
    }

    #[test]
    fn test_decode_tile_id() -> Result<(), Equi7Error> {
        let (zone, cell_size, origin_x, origin_y) = decode_tile_id("SA2560_E2009N2525")?;

        assert_eq!(zone, Zone::SA);
        assert_eq!(cell_size, 2560);
        assert_eq!(origin_x, 2009 * 2560);
        assert_eq!(origin_y, 2525 * 2560);
        Ok(())
    }

    #[test]
    fn test_round_trip_both_ways() -> Result<(), Equi7Error> {
        let id = generate_tile_id(Zone::AF, 40960, 81920, 163840);
        let (zone, cell_size, origin_x, origin_y) = decode_tile_id(&id)?;
        assert_eq!(
            generate_tile_id(zone, cell_size, origin_x, origin_y),
            id
        );
        Ok(())
    }

    #[test]
    fn test_decode_rejects_malformed() {
        for id in [
            "",
            "SA",
            "SA2560",
            "SA2560_",
            "SA2560_E2009",
            "SA2560_N2525E2009",
            "SA2560_E2009N",
            "SA2560_E-2009N2525",
            "SA2560_E20x9N2525",
            "XX2560_E2009N2525",
            "sa2560_E2009N2525",
            "SA0_E2009N2525",
        ] {
            assert!(
                matches!(decode_tile_id(id), Err(Equi7Error::MalformedTileId(_))),
                "accepted {:?}",
                id
            );
        }
    }

    #[test]
    fn test_decode_rejects_non_canonical_padding() {
        // Parses, but re-encoding yields "SA2560_E2009N2525"
        assert!(decode_tile_id("SA2560_E02009N2525").is_err());
        // Under-padded small index
        assert!(decode_tile_id("SA2560_E12N2525").is_err());
    }

    #[test]
    fn test_wide_indices_round_trip() -> Result<(), Equi7Error> {
        // Indices above 9999 grow past the minimum width
        let id = generate_tile_id(Zone::NA, 100, 1_234_500, 7_654_300);
        assert_eq!(id, "NA100_E12345N76543");
        let decoded = decode_tile_id(&id)?;
        assert_eq!(decoded, (Zone::NA, 100, 1_234_500, 7_654_300));
        Ok(())
    }
}
