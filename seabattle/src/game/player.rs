//! Players and the move protocol they share.
use std::io;

use log::trace;
use rand::{distributions::Uniform, Rng};

use crate::{
    board::{Board, Coordinate, ShotError, ShotOutcome},
    game::{GameError, Side},
};

/// Something that picks the cell to shoot at on the opponent's board.
pub trait Player {
    /// Choose the next target on a board with `board_size` rows and columns. The
    /// target is not required to be in bounds or unshot; bad targets are rejected by
    /// the board and this is called again.
    fn select_target(&mut self, board_size: usize) -> Result<Coordinate, GameError>;
}

impl<P: Player + ?Sized> Player for &mut P {
    fn select_target(&mut self, board_size: usize) -> Result<Coordinate, GameError> {
        (**self).select_target(board_size)
    }
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn select_target(&mut self, board_size: usize) -> Result<Coordinate, GameError> {
        (**self).select_target(board_size)
    }
}

/// Source of coordinates typed by a human.
pub trait CoordinateInput {
    /// Read one `(row, column)` pair, 1-indexed as shown to the player. Implementors
    /// re-prompt on malformed input themselves and only return well-formed pairs, or
    /// an error if no more input is available.
    fn read_coordinate(&mut self) -> io::Result<(isize, isize)>;
}

/// Player driven by external input.
#[derive(Debug)]
pub struct HumanPlayer<I> {
    input: I,
}

impl<I: CoordinateInput> HumanPlayer<I> {
    /// Construct a human player reading from the given input.
    pub fn new(input: I) -> Self {
        Self { input }
    }

    /// Extract the input from this player.
    pub fn into_inner(self) -> I {
        self.input
    }
}

impl<I: CoordinateInput> Player for HumanPlayer<I> {
    fn select_target(&mut self, _board_size: usize) -> Result<Coordinate, GameError> {
        let (row, col) = self.input.read_coordinate()?;
        Ok(Coordinate::new(row - 1, col - 1))
    }
}

/// Player that shoots uniformly at random. It keeps no memory of earlier shots, so it
/// may pick cells that were already shot.
#[derive(Debug)]
pub struct ComputerPlayer<R> {
    rng: R,
}

impl<R: Rng> ComputerPlayer<R> {
    /// Construct a computer player using the given source of randomness.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Player for ComputerPlayer<R> {
    fn select_target(&mut self, board_size: usize) -> Result<Coordinate, GameError> {
        if board_size == 0 {
            return Err(GameError::EmptyBoard);
        }
        let coords = Uniform::new(0, board_size as isize);
        let target = Coordinate::new(self.rng.sample(&coords), self.rng.sample(&coords));
        trace!("computer picked {:?}", target);
        Ok(target)
    }
}

/// Receives what happens during a game so it can be shown to the players. Every method
/// does nothing by default.
pub trait Observer {
    /// Called before every move with the human's board and the computer's board.
    fn show_boards(&mut self, _human: &Board, _computer: &Board) {}

    /// Called when a shot lands.
    fn shot_resolved(&mut self, _side: Side, _target: Coordinate, _outcome: ShotOutcome) {}

    /// Called when a shot is rejected and the player has to pick again.
    fn shot_rejected(&mut self, _side: Side, _err: &ShotError) {}

    /// Called once when the game ends.
    fn game_over(&mut self, _winner: Side) {}
}

impl Observer for () {}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn show_boards(&mut self, human: &Board, computer: &Board) {
        (**self).show_boards(human, computer)
    }

    fn shot_resolved(&mut self, side: Side, target: Coordinate, outcome: ShotOutcome) {
        (**self).shot_resolved(side, target, outcome)
    }

    fn shot_rejected(&mut self, side: Side, err: &ShotError) {
        (**self).shot_rejected(side, err)
    }

    fn game_over(&mut self, winner: Side) {
        (**self).game_over(winner)
    }
}

/// Have `player` fire at `target` until a shot lands. Rejected shots are reported to
/// the observer and do not use up the turn. Returns true if the player gets to fire
/// again.
pub fn take_turn<P, O>(
    side: Side,
    player: &mut P,
    target: &mut Board,
    observer: &mut O,
) -> Result<bool, GameError>
where
    P: Player + ?Sized,
    O: Observer + ?Sized,
{
    loop {
        let coord = player.select_target(target.size())?;
        match target.resolve_shot(coord) {
            Ok(outcome) => {
                observer.shot_resolved(side, coord, outcome);
                return Ok(outcome.grants_extra_turn());
            }
            Err(err) => observer.shot_rejected(side, &err),
        }
    }
}
