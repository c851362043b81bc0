//! Types that make up the game board.

use std::collections::HashSet;

use log::debug;

use crate::ships::Vessel;

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    errors::{CannotPlaceReason, CannotShootReason, PlaceError, ShotError},
    grid::CellState,
    setup::BoardSetup,
};

mod coordinate;
mod errors;
mod grid;
pub mod setup;

/// Result of a shot on a single player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit a vessel, but did not destroy it.
    Hit,
    /// The shot hit a vessel and destroyed it.
    Destroyed,
}

impl ShotOutcome {
    /// Returns true if the shooter gets to fire again after this outcome.
    pub fn grants_extra_turn(self) -> bool {
        match self {
            ShotOutcome::Miss => false,
            ShotOutcome::Hit | ShotOutcome::Destroyed => true,
        }
    }
}

/// Represents a single player's board during play, including their vessels and their
/// side of the ocean. Built by [`BoardSetup::start`].
#[derive(Debug, Clone)]
pub struct Board {
    /// Grid of cell states.
    grid: Grid,

    /// All vessels on this board, including the destroyed ones.
    vessels: Vec<Vessel>,

    /// Coordinates that have been shot.
    shots: HashSet<Coordinate>,

    /// Number of vessels with no remaining hits.
    destroyed: usize,

    /// Whether vessels should be concealed when the board is displayed.
    hidden: bool,
}

impl Board {
    /// Build the play-phase board from a finished setup.
    fn from_setup(grid: Grid, vessels: Vec<Vessel>) -> Self {
        let destroyed = vessels.iter().filter(|v| v.is_destroyed()).count();
        Self {
            grid,
            vessels,
            shots: HashSet::new(),
            destroyed,
            hidden: false,
        }
    }

    /// Get the number of rows (and columns) of this board.
    pub fn size(&self) -> usize {
        self.grid.size
    }

    /// Whether vessels are concealed when this board is displayed.
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    /// Set whether vessels are concealed when this board is displayed.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// All vessels on this board, in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of vessels which have been destroyed.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// Returns true if this board has vessels and all of them have been destroyed.
    pub fn defeated(&self) -> bool {
        !self.vessels.is_empty() && self.destroyed == self.vessels.len()
    }

    /// Returns true if the coordinate is outside the board.
    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        !self.grid.contains(&coord)
    }

    /// Returns true if the coordinate has already been shot.
    pub fn is_shot(&self, coord: Coordinate) -> bool {
        self.shots.contains(&coord)
    }

    /// Get the true state of the cell at the given coordinate, ignoring whether the
    /// board is hidden. Returns `None` if the coordinate is out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        self.grid.get(&coord)
    }

    /// Get the state of the cell as it should be shown. Unhit vessel cells of a hidden
    /// board appear empty.
    pub fn visible_cell(&self, coord: Coordinate) -> Option<CellState> {
        self.cell(coord).map(|state| match state {
            CellState::Vessel if self.hidden => CellState::Empty,
            other => other,
        })
    }

    /// Get an iterator over the visible cells of this board. The iterator's item is
    /// another iterator that iterates over a single row.
    pub fn rows<'a>(&'a self) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = CellState>> {
        self.grid.iter_coordinates().map(move |row| {
            row.map(move |coord| self.visible_cell(coord).unwrap_or_default())
        })
    }

    /// Forget every shot fired at this board. Cell states are left as they are.
    pub fn reset_shot_tracking(&mut self) {
        self.shots.clear();
    }

    /// Fire a shot at this board, returning a result indicating why the shot was
    /// rejected or the outcome of the shot. Rejected shots do not change the board.
    pub fn resolve_shot(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        if self.is_out_of_bounds(coord) {
            return Err(ShotError::new(CannotShootReason::OutOfBounds, coord));
        }
        if !self.shots.insert(coord) {
            return Err(ShotError::new(CannotShootReason::AlreadyTargeted, coord));
        }
        let outcome = match self.vessels.iter().position(|v| v.is_hit_by(coord)) {
            None => {
                self.grid[coord] = CellState::Miss;
                ShotOutcome::Miss
            }
            Some(idx) => {
                self.vessels[idx].take_hit();
                self.grid[coord] = CellState::Hit;
                if self.vessels[idx].is_destroyed() {
                    self.destroyed += 1;
                    self.reveal_contour(idx);
                    ShotOutcome::Destroyed
                } else {
                    ShotOutcome::Hit
                }
            }
        };
        debug!("shot at {:?}: {:?}", coord, outcome);
        Ok(outcome)
    }

    /// Mark the water around a destroyed vessel as known-empty. Cells which were
    /// already shot keep their state, and revealed cells can still be shot.
    fn reveal_contour(&mut self, idx: usize) {
        let contour = self.grid.contour(self.vessels[idx].cells());
        for coord in contour {
            let cell = &mut self.grid[coord];
            if *cell == CellState::Empty {
                *cell = CellState::Buffered;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ships::Orientation;

    fn board_with(vessels: Vec<Vessel>) -> Board {
        let mut setup = BoardSetup::new(6);
        for vessel in vessels {
            setup.add_vessel(vessel).unwrap();
        }
        setup.start()
    }

    #[test]
    fn single_cell_vessel_sequence() {
        let mut board = board_with(vec![Vessel::new(
            Coordinate::new(0, 0),
            1,
            Orientation::Horizontal,
        )]);
        assert_eq!(
            board.resolve_shot(Coordinate::new(0, 0)),
            Ok(ShotOutcome::Destroyed)
        );
        assert_eq!(board.resolve_shot(Coordinate::new(0, 1)), Ok(ShotOutcome::Miss));
        let err = board.resolve_shot(Coordinate::new(0, 0)).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::AlreadyTargeted);
        assert_eq!(err.coord(), Coordinate::new(0, 0));
        assert!(board.defeated());
    }

    #[test]
    fn out_of_bounds_does_not_mutate() {
        let mut board = board_with(vec![Vessel::new(
            Coordinate::new(2, 2),
            2,
            Orientation::Vertical,
        )]);
        let before = board.clone();
        for &(row, col) in &[(-1, 0), (0, -1), (6, 0), (0, 6), (10, 10)] {
            let err = board.resolve_shot(Coordinate::new(row, col)).unwrap_err();
            assert_eq!(err.reason(), CannotShootReason::OutOfBounds);
        }
        assert_eq!(board.shots, before.shots);
        assert_eq!(board.destroyed_count(), before.destroyed_count());
        assert!(board.rows().flatten().eq(before.rows().flatten()));
    }

    #[test]
    fn destroyed_after_exactly_length_hits() {
        let mut board = board_with(vec![Vessel::new(
            Coordinate::new(1, 1),
            3,
            Orientation::Horizontal,
        )]);
        assert_eq!(board.resolve_shot(Coordinate::new(1, 1)), Ok(ShotOutcome::Hit));
        assert_eq!(board.resolve_shot(Coordinate::new(1, 3)), Ok(ShotOutcome::Hit));
        assert_eq!(board.destroyed_count(), 0);
        assert_eq!(board.vessels()[0].remaining_hits(), 1);
        assert_eq!(
            board.resolve_shot(Coordinate::new(1, 2)),
            Ok(ShotOutcome::Destroyed)
        );
        assert_eq!(board.destroyed_count(), 1);
        assert!(board.vessels()[0].is_destroyed());
    }

    #[test]
    fn adjacent_cell_is_a_miss() {
        let mut board = board_with(vec![Vessel::new(
            Coordinate::new(2, 2),
            2,
            Orientation::Horizontal,
        )]);
        assert_eq!(board.resolve_shot(Coordinate::new(3, 3)), Ok(ShotOutcome::Miss));
        assert_eq!(board.cell(Coordinate::new(3, 3)), Some(CellState::Miss));
        assert_eq!(board.resolve_shot(Coordinate::new(2, 4)), Ok(ShotOutcome::Miss));
    }

    #[test]
    fn destruction_reveals_contour() {
        let mut board = board_with(vec![Vessel::new(
            Coordinate::new(0, 4),
            2,
            Orientation::Vertical,
        )]);
        board.resolve_shot(Coordinate::new(0, 3)).unwrap();
        board.resolve_shot(Coordinate::new(0, 4)).unwrap();
        // Nothing revealed while the vessel is still afloat.
        assert_eq!(board.cell(Coordinate::new(2, 4)), Some(CellState::Empty));
        board.resolve_shot(Coordinate::new(1, 4)).unwrap();
        for &(row, col) in &[(0, 5), (1, 3), (1, 5), (2, 3), (2, 4), (2, 5)] {
            assert_eq!(
                board.cell(Coordinate::new(row, col)),
                Some(CellState::Buffered),
                "{} {}",
                row,
                col
            );
        }
        // The earlier miss keeps its state.
        assert_eq!(board.cell(Coordinate::new(0, 3)), Some(CellState::Miss));
        assert_eq!(board.cell(Coordinate::new(1, 4)), Some(CellState::Hit));
        // Revealed water may still be shot.
        assert_eq!(board.resolve_shot(Coordinate::new(2, 4)), Ok(ShotOutcome::Miss));
    }

    #[test]
    fn hidden_board_conceals_vessels() {
        let mut board = board_with(vec![Vessel::new(
            Coordinate::new(3, 0),
            2,
            Orientation::Horizontal,
        )]);
        board.set_hidden(true);
        assert_eq!(board.cell(Coordinate::new(3, 0)), Some(CellState::Vessel));
        assert_eq!(board.visible_cell(Coordinate::new(3, 0)), Some(CellState::Empty));
        board.resolve_shot(Coordinate::new(3, 0)).unwrap();
        assert_eq!(board.visible_cell(Coordinate::new(3, 0)), Some(CellState::Hit));
        assert!(board.rows().flatten().all(|c| c != CellState::Vessel));
    }

    #[test]
    fn reset_allows_reshooting() {
        let mut board = board_with(vec![Vessel::new(
            Coordinate::new(5, 5),
            1,
            Orientation::Horizontal,
        )]);
        board.resolve_shot(Coordinate::new(0, 0)).unwrap();
        assert!(board.is_shot(Coordinate::new(0, 0)));
        board.reset_shot_tracking();
        assert!(!board.is_shot(Coordinate::new(0, 0)));
        assert_eq!(board.resolve_shot(Coordinate::new(0, 0)), Ok(ShotOutcome::Miss));
    }

    #[test]
    fn empty_board_is_not_defeated() {
        let board = BoardSetup::new(6).start();
        assert!(!board.defeated());
    }
}
