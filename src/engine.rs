//! Move-selection engine for the computer opponent
//!
//! - [`heuristic`]: win or block in one move
//! - [`minimax`]: exhaustive optimal search
//! - [`selector`]: difficulty dispatch (Easy random, Medium blend, Hard minimax)

pub mod difficulty;
pub mod heuristic;
pub mod minimax;
pub mod selector;

pub use difficulty::Difficulty;
pub use heuristic::{Tactic, find_immediate_move, win_or_block};
pub use minimax::{ENGINE_MARK, Minimax, best_move, best_move_for, evaluate};
pub use selector::{MEDIUM_OPTIMAL_PROBABILITY, MoveSelector, Reason, random_move, select_move};
