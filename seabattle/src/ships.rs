// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Types used for defining vessels and the cells they occupy.
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::Coordinate;

/// Direction a vessel extends from its bow.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// The vessel extends to the right from its bow, along the column axis.
    Horizontal,
    /// The vessel extends downward from its bow, along the row axis.
    Vertical,
}

impl Orientation {
    /// Get the `(row, col)` step taken from one cell of a vessel to the next.
    fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

impl Distribution<Orientation> for Standard {
    /// Picks either orientation with equal probability.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A linear vessel with a bow, a length, and an orientation. Tracks how many more hits
/// it can take before it is destroyed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Vessel {
    /// First cell of the vessel.
    bow: Coordinate,
    /// Number of cells this vessel occupies.
    length: usize,
    /// Direction the vessel extends from the bow.
    orientation: Orientation,
    /// Hits left before the vessel is destroyed.
    remaining_hits: usize,
}

impl Vessel {
    /// Construct an undamaged vessel. Panics if `length` is 0.
    pub fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Self {
        assert!(length > 0);
        Self {
            bow,
            length,
            orientation,
            remaining_hits: length,
        }
    }

    /// Get the bow coordinate of this vessel.
    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    /// Get the length of this vessel.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Get the orientation of this vessel.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of hits left before this vessel is destroyed.
    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }

    /// Check if this vessel has been destroyed.
    pub fn is_destroyed(&self) -> bool {
        self.remaining_hits == 0
    }

    /// Get an iterator over the cells this vessel occupies, starting at the bow. The
    /// cells are not checked against any board, so they may lie out of bounds.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let (drow, dcol) = self.orientation.step();
        let bow = self.bow;
        (0..self.length as isize).map(move |i| bow.offset(drow * i, dcol * i))
    }

    /// Returns true if the given coordinate is one of the cells of this vessel.
    pub fn is_hit_by(&self, coord: Coordinate) -> bool {
        self.cells().any(|cell| cell == coord)
    }

    /// Record a hit on this vessel. Saturates at zero remaining hits.
    pub(crate) fn take_hit(&mut self) {
        self.remaining_hits = self.remaining_hits.saturating_sub(1);
    }
}
