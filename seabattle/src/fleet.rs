//! Randomized placement of the standard fleet.
use log::{debug, info, warn};
use rand::{distributions::Uniform, Rng};
use thiserror::Error;

use crate::{
    board::{Board, BoardSetup, Coordinate},
    config::{FLEET, MIN_BOARD_SIZE},
    ships::Vessel,
};

/// Error returned when a placement pass gives up on a board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum FleetError {
    /// Too many placements were rejected before the whole fleet was placed.
    #[error("gave up placing the fleet after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },
    /// The board is too small for the fleet to be guaranteed to fit.
    #[error("a {size}x{size} board is too small for the fleet, need at least {min}x{min}")]
    BoardTooSmall { size: usize, min: usize },
    /// No placement attempts were allowed, so no pass could ever succeed.
    #[error("at least one placement attempt is required")]
    NoAttempts,
}

/// Make one pass at placing the whole [`FLEET`] on a fresh board with `size` rows and
/// columns.
///
/// Each vessel gets a uniformly random bow anywhere on the board and a random
/// orientation. Bodies that run off the edge or touch an earlier vessel are rejected by
/// [`BoardSetup::add_vessel`] and retried. Once `max_attempts` attempts have been made
/// across the whole fleet the partial board is discarded.
///
/// A board with no cells is rejected up front with [`FleetError::BoardTooSmall`].
pub fn place_fleet(
    rng: &mut impl Rng,
    size: usize,
    max_attempts: usize,
) -> Result<Board, FleetError> {
    if size == 0 {
        return Err(FleetError::BoardTooSmall {
            size,
            min: MIN_BOARD_SIZE,
        });
    }
    let coords = Uniform::new(0, size as isize);
    let mut setup = BoardSetup::new(size);
    let mut attempts = 0;
    for &len in FLEET.iter() {
        loop {
            attempts += 1;
            if attempts > max_attempts {
                return Err(FleetError::AttemptsExhausted {
                    attempts: max_attempts,
                });
            }
            let bow = Coordinate::new(rng.sample(&coords), rng.sample(&coords));
            match setup.add_vessel(Vessel::new(bow, len, rng.gen())) {
                Ok(()) => break,
                Err(err) => debug!("attempt {}: {}", attempts, err),
            }
        }
    }
    info!(
        "placed {} vessels on a {}x{} board in {} attempts",
        FLEET.len(),
        size,
        size,
        attempts
    );
    Ok(setup.start())
}

/// Place the whole [`FLEET`], starting over on a fresh board whenever a pass uses up
/// `max_attempts`. The fleet always fits on boards of at least [`MIN_BOARD_SIZE`], so
/// this returns with probability 1 for those. Smaller boards and a zero attempt bound
/// are rejected instead of retried forever.
pub fn random_board(
    rng: &mut impl Rng,
    size: usize,
    max_attempts: usize,
) -> Result<Board, FleetError> {
    if size < MIN_BOARD_SIZE {
        return Err(FleetError::BoardTooSmall {
            size,
            min: MIN_BOARD_SIZE,
        });
    }
    if max_attempts == 0 {
        return Err(FleetError::NoAttempts);
    }
    loop {
        match place_fleet(rng, size, max_attempts) {
            Ok(board) => return Ok(board),
            Err(err) => warn!("{}, starting over on an empty board", err),
        }
    }
}
