//! Row/column coordinates of cells on a board.
use std::fmt;

/// Offsets of the 8 cells surrounding a cell, plus the cell itself.
const NEIGHBORHOOD: [(isize, isize); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The coordinates of a cell in the board. Coordinates are 0-indexed internally.
/// They are signed so that positions off the top or left edge of the board can
/// still be expressed and rejected as out of bounds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Vertical position of the cell.
    pub row: isize,
    /// Horizontal position of the cell.
    pub col: isize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// Get the coordinate offset from this one by the given amounts.
    pub fn offset(self, drow: isize, dcol: isize) -> Self {
        Self::new(self.row + drow, self.col + dcol)
    }

    /// Iterate the 3x3 block of coordinates centered on this one, including this
    /// coordinate itself. Does not account for board bounds.
    pub fn neighborhood(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBORHOOD
            .iter()
            .map(move |&(drow, dcol)| self.offset(drow, dcol))
    }

    /// Return true if the two coordinates are the same or touch, including diagonally.
    pub fn touches(&self, other: &Coordinate) -> bool {
        (self.row - other.row).abs() <= 1 && (self.col - other.col).abs() <= 1
    }
}

impl From<(isize, isize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (isize, isize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (isize, isize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coordinate {
    /// Formats the coordinate 1-indexed, the way players enter it.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn neighborhood_is_centered() {
        let around: Vec<_> = Coordinate::new(2, 3).neighborhood().collect();
        assert_eq!(around.len(), 9);
        assert!(around.contains(&Coordinate::new(2, 3)));
        assert!(around.contains(&Coordinate::new(1, 2)));
        assert!(around.contains(&Coordinate::new(3, 4)));
        assert!(around.iter().all(|c| c.touches(&Coordinate::new(2, 3))));
    }

    #[test]
    fn touching_includes_diagonals() {
        let c = Coordinate::new(0, 0);
        assert!(c.touches(&Coordinate::new(1, 1)));
        assert!(c.touches(&Coordinate::new(-1, 0)));
        assert!(!c.touches(&Coordinate::new(0, 2)));
        assert!(!c.touches(&Coordinate::new(2, 1)));
    }

    #[test]
    fn displays_one_indexed() {
        assert_eq!(Coordinate::new(0, 5).to_string(), "1 6");
    }
}
