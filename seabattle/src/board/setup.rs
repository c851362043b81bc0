//! Implements the setup phase of the board.
use std::collections::HashSet;

use log::debug;

use crate::{
    board::{Board, CannotPlaceReason, CellState, Coordinate, Grid, PlaceError},
    ships::Vessel,
};

/// Setup phase for a [`Board`]. Allows placing vessels and does not allow shooting.
///
/// Each placed vessel reserves its own cells and its contour, so no later vessel can
/// overlap or touch it, even diagonally.
#[derive(Debug, Clone)]
pub struct BoardSetup {
    /// Grid for placement of vessels.
    grid: Grid,

    /// Vessels placed so far, in placement order.
    vessels: Vec<Vessel>,

    /// Cells that are occupied by a vessel or lie in a vessel's contour.
    reserved: HashSet<Coordinate>,
}

impl BoardSetup {
    /// Begin setup by constructing a new empty board with `size` rows and columns.
    pub fn new(size: usize) -> Self {
        Self {
            grid: Grid::new(size),
            vessels: Vec::new(),
            reserved: HashSet::new(),
        }
    }

    /// Get the number of rows (and columns) of this board.
    pub fn size(&self) -> usize {
        self.grid.size
    }

    /// Get the vessels placed so far.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Returns true if the coordinate can no longer hold part of a vessel.
    pub fn is_reserved(&self, coord: Coordinate) -> bool {
        self.reserved.contains(&coord)
    }

    /// Get the state of the cell at the given coordinate, or `None` if out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        self.grid.get(&coord)
    }

    /// Attempts to place the vessel. Every cell must be in bounds and unreserved,
    /// otherwise the vessel is handed back in the error and the board is unchanged.
    pub fn add_vessel(&mut self, vessel: Vessel) -> Result<(), PlaceError> {
        for coord in vessel.cells() {
            if !self.grid.contains(&coord) {
                return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, vessel));
            }
            if self.reserved.contains(&coord) {
                return Err(PlaceError::new(CannotPlaceReason::Reserved, vessel));
            }
        }
        // Already ensured that every position is valid and not reserved.
        for coord in vessel.cells() {
            self.grid[coord] = CellState::Vessel;
        }
        // The contour includes the vessel's own cells.
        let contour = self.grid.contour(vessel.cells());
        debug!(
            "placed {:?} vessel of length {} at {:?}, reserving {} cells",
            vessel.orientation(),
            vessel.len(),
            vessel.bow(),
            contour.len()
        );
        self.reserved.extend(contour);
        self.vessels.push(vessel);
        Ok(())
    }

    /// Finish setup and start play. The setup reservations are dropped and the
    /// returned board starts with no cells shot.
    pub fn start(self) -> Board {
        Board::from_setup(self.grid, self.vessels)
    }
}
