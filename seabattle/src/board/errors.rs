//! Errors used by the `Board` and `BoardSetup`.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{board::Coordinate, ships::Vessel};

/// Reason why a vessel could not be placed at the requested position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// One or more of the vessel's cells lies outside the board.
    #[error("the vessel does not fit on the board")]
    OutOfBounds,
    /// One or more of the vessel's cells is occupied by, or touches, another vessel.
    #[error("the vessel overlaps or touches another vessel")]
    Reserved,
}

/// Error caused when attempting to place a vessel in an invalid position.
#[derive(Error)]
#[error("could not place vessel: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    vessel: Vessel,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    /// Construct a placement error from a reason and the rejected vessel.
    pub(super) fn new(reason: CannotPlaceReason, vessel: Vessel) -> Self {
        Self { reason, vessel }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get a reference to the vessel whose placement was attempted.
    pub fn vessel(&self) -> &Vessel {
        &self.vessel
    }

    /// Extract the vessel from this error.
    pub fn into_vessel(self) -> Vessel {
        self.vessel
    }
}

/// Reason why a particular cell could not be shot.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The cell selected was out of bounds on the board.
    #[error("you're trying to shoot outside the board")]
    OutOfBounds,

    /// A shot has already been fired at that cell.
    #[error("you already shot that cell")]
    AlreadyTargeted,
}

/// Error returned when trying to shoot a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not shoot cell {coord}: {reason}")]
pub struct ShotError {
    /// Reason why the cell could not be shot.
    reason: CannotShootReason,

    /// The coordinates of the cell.
    coord: Coordinate,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified cell.
    pub(super) fn new(reason: CannotShootReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate of the shot cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}
