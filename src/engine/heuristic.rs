//! Win/block heuristic: complete or deny a line that is one cell short

use serde::Serialize;

use crate::tictactoe::{BoardState, LineAnalyzer, Mark};

/// Why the heuristic picked a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tactic {
    /// Completes a line for the mover
    Win,
    /// Denies the opponent a completed line
    Block,
}

/// Cell completing a line for `mark`: first match in canonical line order.
pub fn find_immediate_move(board: &BoardState, mark: Mark) -> Option<usize> {
    LineAnalyzer::immediate_move(&board.cells, mark)
}

/// Win now if `mark` can, otherwise block the opponent's immediate win.
pub fn win_or_block(board: &BoardState, mark: Mark) -> Option<(usize, Tactic)> {
    find_immediate_move(board, mark)
        .map(|pos| (pos, Tactic::Win))
        .or_else(|| find_immediate_move(board, mark.opponent()).map(|pos| (pos, Tactic::Block)))
}
