//! Fixed game parameters and the small amount of runtime configuration.
use thiserror::Error;

/// Board size used when none is given.
pub const DEFAULT_BOARD_SIZE: usize = 6;

/// Smallest board the fleet is guaranteed to fit on.
pub const MIN_BOARD_SIZE: usize = 6;

/// Largest supported board.
pub const MAX_BOARD_SIZE: usize = 16;

/// Lengths of the vessels in every player's fleet, in placement order.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Number of vessels in a fleet.
pub const FLEET_SIZE: usize = FLEET.len();

/// Total number of cells occupied by a fleet.
pub const FLEET_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Placement attempts allowed across a whole fleet before the board is discarded.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// Error returned for an invalid game configuration.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ConfigError {
    /// The requested board size is not supported.
    #[error("board size must be between {min} and {max}, got {size}")]
    BoardSize { size: usize, min: usize, max: usize },
}

/// Settings for a single game session.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GameConfig {
    /// Number of rows and columns of each board.
    pub size: usize,
    /// Placement attempts allowed per fleet before starting over on a fresh board.
    pub max_placement_attempts: usize,
    /// Seed for the random number generator. Uses entropy if `None`.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Build the default configuration with the given board size.
    pub fn with_size(size: usize) -> Result<Self, ConfigError> {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            Ok(Self {
                size,
                ..Self::default()
            })
        } else {
            Err(ConfigError::BoardSize {
                size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            })
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            seed: None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fleet_totals() {
        assert_eq!(FLEET.iter().sum::<usize>(), FLEET_CELLS);
        assert_eq!(FLEET_SIZE, 7);
    }

    #[test]
    fn size_bounds() {
        assert_eq!(GameConfig::with_size(6).unwrap().size, 6);
        assert_eq!(GameConfig::with_size(16).unwrap().size, 16);
        assert_eq!(
            GameConfig::with_size(5),
            Err(ConfigError::BoardSize {
                size: 5,
                min: 6,
                max: 16
            })
        );
        assert!(GameConfig::with_size(17).is_err());
    }
}
