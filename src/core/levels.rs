use crate::util::error::Equi7Error;

/// Ordered set of valid cell sizes, derived by doubling from the minimum
/// grid size up to the configured maximum.
///
/// Level 0 is the finest: `cell_size(level) = min_grid_size * 2^level`.
/// Immutable after construction and freely shareable across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelHierarchy {
    min_grid_size: u32,
    max_grid_size: u32,
    cell_sizes: Vec<u32>,
}

impl LevelHierarchy {
    pub fn new(min_grid_size: u32, max_grid_size: u32) -> Result<Self, Equi7Error> {
        if min_grid_size == 0 {
            return Err(Equi7Error::InvalidConfiguration(
                "min_grid_size must be positive".to_string(),
            ));
        }
        if min_grid_size > max_grid_size {
            return Err(Equi7Error::InvalidConfiguration(format!(
                "min_grid_size {} exceeds max_grid_size {}",
                min_grid_size, max_grid_size
            )));
        }

        let mut cell_sizes = Vec::new();
        let mut size = min_grid_size;
        while size <= max_grid_size {
            cell_sizes.push(size);
            size = match size.checked_mul(2) {
                Some(doubled) => doubled,
                None => break,
            };
        }

        Ok(Self {
            min_grid_size,
            max_grid_size,
            cell_sizes,
        })
    }

    pub fn min_grid_size(&self) -> u32 {
        self.min_grid_size
    }

    pub fn max_grid_size(&self) -> u32 {
        self.max_grid_size
    }

    /// Coarsest valid level index.
    pub fn max_level(&self) -> u8 {
        (self.cell_sizes.len() - 1) as u8
    }

    /// Cell size in meters at the given level.
    pub fn cell_size(&self, level: u8) -> Result<u32, Equi7Error> {
        self.cell_sizes
            .get(level as usize)
            .copied()
            .ok_or(Equi7Error::InvalidLevel {
                level,
                max_level: self.max_level(),
            })
    }

    /// Level index of an exact cell size, if it belongs to the hierarchy.
    pub fn level_of(&self, cell_size: u32) -> Option<u8> {
        self.cell_sizes
            .iter()
            .position(|&size| size == cell_size)
            .map(|index| index as u8)
    }

    /// Cell sizes in meters, finest first.
    pub fn cell_sizes(&self) -> &[u32] {
        &self.cell_sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::MAX_GRID_SIZE;

    #[test]
    fn test_doubling_sequence() -> Result<(), Equi7Error> {
        let levels = LevelHierarchy::new(2560, MAX_GRID_SIZE)?;

        assert_eq!(levels.cell_size(0)?, 2560);
        assert_eq!(levels.cell_size(1)?, 5120);
        assert_eq!(levels.cell_size(9)?, 1_310_720);
        assert_eq!(levels.max_level(), 9);
        // 2560 * 2^10 = 2_621_440 > 2_500_000
        assert!(matches!(
            levels.cell_size(10),
            Err(Equi7Error::InvalidLevel {
                level: 10,
                max_level: 9
            })
        ));
        Ok(())
    }

    #[test]
    fn test_strictly_increasing() -> Result<(), Equi7Error> {
        let levels = LevelHierarchy::new(100, MAX_GRID_SIZE)?;
        for pair in levels.cell_sizes().windows(2) {
            assert_eq!(pair[1], pair[0] * 2);
        }
        assert!(*levels.cell_sizes().last().unwrap() <= MAX_GRID_SIZE);
        Ok(())
    }

    #[test]
    fn test_level_of() -> Result<(), Equi7Error> {
        let levels = LevelHierarchy::new(2560, MAX_GRID_SIZE)?;

        assert_eq!(levels.level_of(2560), Some(0));
        assert_eq!(levels.level_of(40960), Some(4));
        assert_eq!(levels.level_of(2561), None);
        assert_eq!(levels.level_of(1280), None);
        Ok(())
    }

    #[test]
    fn test_min_equals_max() -> Result<(), Equi7Error> {
        let levels = LevelHierarchy::new(500, 500)?;
        assert_eq!(levels.max_level(), 0);
        assert_eq!(levels.cell_size(0)?, 500);
        Ok(())
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(matches!(
            LevelHierarchy::new(0, MAX_GRID_SIZE),
            Err(Equi7Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            LevelHierarchy::new(3_000_000, MAX_GRID_SIZE),
            Err(Equi7Error::InvalidConfiguration(_))
        ));
    }
}
