//! Defines the square grid of cells. This is shared between the board's setup and
//! playing versions.

use std::{
    collections::BTreeSet,
    ops::{Index, IndexMut},
};

use crate::board::Coordinate;

/// What is known to be in a single cell of the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellState {
    /// Open water, or nothing known yet.
    Empty,
    /// Water next to a destroyed vessel, known to be empty.
    Buffered,
    /// Part of a vessel that has not been hit.
    Vessel,
    /// Part of a vessel that has been hit.
    Hit,
    /// Water that was shot.
    Miss,
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Empty
    }
}

/// Square grid structure shared between [`BoardSetup`][crate::board::BoardSetup] and
/// [`Board`][crate::board::Board].
#[derive(Debug, Clone)]
pub(super) struct Grid {
    /// Number of rows, which is also the number of columns.
    pub(super) size: usize,
    /// Cells in row-major order.
    cells: Box<[CellState]>,
}

impl Grid {
    /// Construct an empty grid with `size` rows and `size` columns.
    pub(super) fn new(size: usize) -> Self {
        let cells = vec![CellState::Empty; size * size].into_boxed_slice();
        Self { size, cells }
    }

    /// Convert a coordinate to an index into `cells`, or `None` if it is out of bounds.
    fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row as usize * self.size + coord.col as usize)
        } else {
            None
        }
    }

    /// Returns true if the coordinate lies within the grid.
    pub(super) fn contains(&self, coord: &Coordinate) -> bool {
        let size = self.size as isize;
        (0..size).contains(&coord.row) && (0..size).contains(&coord.col)
    }

    /// Get the state of the cell at the given [`Coordinate`].
    pub(super) fn get(&self, coord: &Coordinate) -> Option<CellState> {
        self.try_linearize(coord).map(|i| self.cells[i])
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut(&mut self, coord: &Coordinate) -> Option<&mut CellState> {
        match self.try_linearize(coord) {
            Some(i) => self.cells.get_mut(i),
            None => None,
        }
    }

    /// Compute the contour of a set of cells: every in-bounds cell touching any of them,
    /// including diagonally. The cells themselves are included. Sorted by row then
    /// column.
    pub(super) fn contour(
        &self,
        cells: impl IntoIterator<Item = Coordinate>,
    ) -> BTreeSet<Coordinate> {
        cells
            .into_iter()
            .flat_map(Coordinate::neighborhood)
            .filter(|coord| self.contains(coord))
            .collect()
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the
    /// coordinates of that row.
    pub(super) fn iter_coordinates(
        &self,
    ) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let size = self.size as isize;
        (0..size).map(move |row| (0..size).map(move |col| Coordinate::new(row, col)))
    }
}

impl Index<Coordinate> for Grid {
    type Output = CellState;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        match self.try_linearize(&coord) {
            Some(i) => &self.cells[i],
            None => panic!("{:?} is out of bounds for a {1}x{1} grid", coord, self.size),
        }
    }
}

impl IndexMut<Coordinate> for Grid {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Self::Output {
        let size = self.size;
        match self.get_mut(&coord) {
            Some(cell) => cell,
            None => panic!("{:?} is out of bounds for a {1}x{1} grid", coord, size),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bounds() {
        let grid = Grid::new(6);
        assert!(grid.contains(&Coordinate::new(0, 0)));
        assert!(grid.contains(&Coordinate::new(5, 5)));
        assert!(!grid.contains(&Coordinate::new(6, 0)));
        assert!(!grid.contains(&Coordinate::new(0, -1)));
        assert_eq!(grid.get(&Coordinate::new(-1, 3)), None);
    }

    #[test]
    fn contour_clipped_at_corner() {
        let grid = Grid::new(6);
        let contour = grid.contour(vec![Coordinate::new(0, 0)]);
        let expected: BTreeSet<_> = vec![
            Coordinate::new(0, 0),
            Coordinate::new(0, 1),
            Coordinate::new(1, 0),
            Coordinate::new(1, 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(contour, expected);
    }

    #[test]
    fn contour_of_line() {
        let grid = Grid::new(6);
        let cells = vec![
            Coordinate::new(2, 1),
            Coordinate::new(2, 2),
            Coordinate::new(2, 3),
        ];
        // 3 rows by 5 columns around a 3-long horizontal line.
        assert_eq!(grid.contour(cells).len(), 15);
    }

    #[test]
    fn rows_cover_grid() {
        let grid = Grid::new(3);
        let rows: Vec<Vec<_>> = grid.iter_coordinates().map(|row| row.collect()).collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.len() == 3));
        assert_eq!(rows[1][2], Coordinate::new(1, 2));
    }
}
