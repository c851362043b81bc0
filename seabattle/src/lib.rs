//! A small game of sea battle between a human and the computer, played on two square
//! boards.
//!
//! Boards are built in two phases. A [`BoardSetup`][board::BoardSetup] accepts vessels
//! and refuses any that would leave the board, overlap another vessel, or touch one,
//! even diagonally. Starting play turns it into a [`Board`][board::Board] that accepts
//! shots. [`fleet`] fills a board with the standard fleet at random, and [`game`] runs
//! the turn loop.

pub mod board;
pub mod config;
pub mod fleet;
pub mod game;
pub mod ships;
