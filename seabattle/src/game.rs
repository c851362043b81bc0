//! The turn-taking game loop between a human and the computer.
//!
//! Each side owns a [`Board`] and fires at the other side's board. The side to move
//! keeps firing for as long as its shots land; the turn passes on a miss. The game ends
//! as soon as every vessel on one board is destroyed.
use std::fmt;

use log::info;
use rand::Rng;

use crate::{
    board::Board,
    config::GameConfig,
    fleet::{self, FleetError},
};

pub use self::{
    errors::GameError,
    player::{take_turn, ComputerPlayer, CoordinateInput, HumanPlayer, Observer, Player},
};

mod errors;
pub mod player;

/// One of the two sides in the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Side::Human => "Human",
            Side::Computer => "Computer",
        })
    }
}

/// Status of the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GameStatus {
    /// Neither side has lost all its vessels yet.
    InProgress,
    /// Every computer vessel was destroyed.
    HumanWins,
    /// Every human vessel was destroyed.
    ComputerWins,
}

impl GameStatus {
    /// Get the winning side, or `None` if the game is in progress.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::HumanWins => Some(Side::Human),
            GameStatus::ComputerWins => Some(Side::Computer),
        }
    }
}

/// Handles gameplay between a human player `H` and a computer player `C`.
pub struct Game<H, C> {
    /// Player for the human side.
    human: H,
    /// Player for the computer side.
    computer: C,

    /// Board defended by the human and attacked by the computer.
    human_board: Board,
    /// Board defended by the computer and attacked by the human. Hidden from display.
    computer_board: Board,

    /// Turn counter. Even is the human's turn, odd the computer's. Does not advance
    /// when a shot lands, so the same side moves again.
    turn: usize,

    /// Current status.
    status: GameStatus,
}

impl<H: Player, C: Player> Game<H, C> {
    /// Construct a game from finished boards. The computer's board is marked hidden.
    /// The human moves first.
    pub fn new(human: H, computer: C, human_board: Board, mut computer_board: Board) -> Self {
        computer_board.set_hidden(true);
        Self {
            human,
            computer,
            human_board,
            computer_board,
            turn: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Construct a game with randomly placed fleets on boards of the configured size.
    pub fn random(
        rng: &mut impl Rng,
        config: &GameConfig,
        human: H,
        computer: C,
    ) -> Result<Self, FleetError> {
        let human_board = fleet::random_board(rng, config.size, config.max_placement_attempts)?;
        let computer_board =
            fleet::random_board(rng, config.size, config.max_placement_attempts)?;
        Ok(Self::new(human, computer, human_board, computer_board))
    }

    /// Get the status of the game.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Get the side whose turn it currently is.
    pub fn current(&self) -> Side {
        if self.turn % 2 == 0 {
            Side::Human
        } else {
            Side::Computer
        }
    }

    /// Get the turn counter. It only advances when the turn passes to the other side.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Get the board defended by the given side.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Human => &self.human_board,
            Side::Computer => &self.computer_board,
        }
    }

    /// Play a single move: show the boards, let the current side fire until a shot
    /// lands, then check whether either side has lost. Returns the resulting status.
    /// Does nothing once the game is over.
    pub fn step<O: Observer + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<GameStatus, GameError> {
        if self.status != GameStatus::InProgress {
            return Ok(self.status);
        }
        observer.show_boards(&self.human_board, &self.computer_board);
        let side = self.current();
        let repeat = match side {
            Side::Human => take_turn(side, &mut self.human, &mut self.computer_board, observer)?,
            Side::Computer => {
                take_turn(side, &mut self.computer, &mut self.human_board, observer)?
            }
        };

        self.status = if self.computer_board.defeated() {
            GameStatus::HumanWins
        } else if self.human_board.defeated() {
            GameStatus::ComputerWins
        } else {
            GameStatus::InProgress
        };

        match self.status.winner() {
            Some(winner) => {
                info!("{} wins on turn {}", winner, self.turn);
                observer.game_over(winner);
            }
            None if !repeat => self.turn += 1,
            None => {}
        }
        Ok(self.status)
    }

    /// Run the game until one side wins, returning the winner.
    pub fn play<O: Observer + ?Sized>(&mut self, observer: &mut O) -> Result<Side, GameError> {
        loop {
            if let Some(winner) = self.step(observer)?.winner() {
                return Ok(winner);
            }
        }
    }

    /// Extract the players from this game.
    pub fn into_players(self) -> (H, C) {
        (self.human, self.computer)
    }
}
