use std::io;

use thiserror::Error;

/// Error which aborts a game in progress.
#[derive(Debug, Error)]
pub enum GameError {
    /// A player's input could not be read, including reaching the end of input.
    #[error("failed to read player input")]
    Input(#[from] io::Error),

    /// A target was requested on a board with no cells.
    #[error("the target board has no cells")]
    EmptyBoard,
}

impl GameError {
    /// Returns true if the error was caused by the input running out.
    pub fn is_end_of_input(&self) -> bool {
        match self {
            GameError::Input(err) => err.kind() == io::ErrorKind::UnexpectedEof,
            GameError::EmptyBoard => false,
        }
    }
}
