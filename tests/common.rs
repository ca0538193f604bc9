//! Common test utilities for the tic-tac-toe test suite.

use std::collections::HashSet;

use tictactoe_engine::tictactoe::BoardState;

/// Every position reachable from the empty board by legal play, terminal ones included.
pub fn reachable_boards() -> Vec<BoardState> {
    let mut seen = HashSet::new();
    let mut stack = vec![BoardState::new()];
    let mut boards = Vec::new();

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);
        if board.is_terminal() {
            continue;
        }
        for pos in board.empty_cells() {
            if let Ok(next) = board.apply_move(pos) {
                stack.push(next);
            }
        }
    }

    boards
}

/// Parse a board literal, panicking on malformed test input
pub fn board(s: &str) -> BoardState {
    BoardState::from_string(s).unwrap_or_else(|e| panic!("bad test board '{s}': {e}"))
}
