//! Tic-tac-toe with a three-tier computer opponent
//!
//! This crate provides:
//! - Board model with terminal-state detection and validated parsing
//! - Move-selection engine: Easy (random), Medium (win/block heuristic blended
//!   with minimax), Hard (full minimax)
//! - Series play between agents with observers for progress and logging
//! - CLI commands for single positions, interactive play and simulation
//!
//! ```
//! use tictactoe_engine::{BoardState, Difficulty, MoveSelector};
//!
//! let board: BoardState = "XX..O....".parse()?;
//! let mut selector = MoveSelector::with_seed(1);
//! assert_eq!(selector.select(&board, Difficulty::Medium), Some(2));
//! # Ok::<(), tictactoe_engine::Error>(())
//! ```

pub mod app;
pub mod cli;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod tictactoe;

pub use engine::{Difficulty, MoveSelector, best_move, select_move};
pub use error::{Error, Result};
pub use tictactoe::{BoardState, Cell, GameResult, Mark};
