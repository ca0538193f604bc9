//! Tic-Tac-Toe board model

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BoardState, Cell, EmptyCells, GameResult, Mark, TrialMove};
pub use game::{Game, GameOutcome, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
