//! World configuration: grid extent and search budgets.

/// Side length of the default square world grid, in world units.
pub const DEFAULT_GRID_SIZE: u32 = 200;

/// Default number of positions the random search samples before giving up.
pub const DEFAULT_RANDOM_ATTEMPTS: u32 = 100;

/// Default half-width of the square random positions are drawn from.
pub const DEFAULT_RANDOM_EXTENT: i32 = 10;

/// Tunables for placement and dragging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldConfig {
    /// Side length of the ground square; drags outside it are ignored.
    pub grid_size: u32,
    /// Attempt budget for the random placement search.
    pub random_attempts: u32,
    /// Random x and z are drawn from `-random_extent..random_extent`.
    pub random_extent: i32,
}

impl WorldConfig {
    /// Exclusive upper bound on the directed slot search offset.
    ///
    /// Scales with the grid: the default 200-unit grid searches offsets 1..50.
    pub fn max_offset(&self) -> u32 {
        (self.grid_size / 4).max(1)
    }

    /// Ground extent as a float, for ray/plane tests.
    pub fn ground_extent(&self) -> f32 {
        self.grid_size as f32
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            random_attempts: DEFAULT_RANDOM_ATTEMPTS,
            random_extent: DEFAULT_RANDOM_EXTENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_offset_bound() {
        assert_eq!(WorldConfig::default().max_offset(), 50);
    }

    #[test]
    fn test_tiny_grid_has_no_search_room() {
        let config = WorldConfig {
            grid_size: 2,
            ..WorldConfig::default()
        };
        assert_eq!(config.max_offset(), 1);
    }
}
