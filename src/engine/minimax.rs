//! Exhaustive minimax search
//!
//! The tree below any 3x3 position has at most 9! leaves, so the search runs
//! to full depth without pruning or a transposition table. Scores are from the
//! point of view of the maximizing mark: +1 win, -1 loss, 0 draw.

use tracing::trace;

use crate::tictactoe::{BoardState, Mark};

/// Mark the engine plays when no other is given
pub const ENGINE_MARK: Mark = Mark::O;

/// Full-depth game-tree search for one maximizing mark
#[derive(Debug, Clone)]
pub struct Minimax {
    maximizer: Mark,
    nodes: u64,
}

impl Minimax {
    /// Create a search that maximizes the outcome for `maximizer`
    pub fn new(maximizer: Mark) -> Self {
        Self {
            maximizer,
            nodes: 0,
        }
    }

    /// Positions visited since construction
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Score `board` with `maximizing` telling whose turn it is.
    ///
    /// Every trial placement is undone before this returns, so `board` is
    /// unchanged afterwards.
    pub fn evaluate(&mut self, board: &mut BoardState, maximizing: bool) -> i32 {
        self.nodes += 1;

        if let Some(winner) = board.winner() {
            return if winner == self.maximizer { 1 } else { -1 };
        }
        if board.is_full() {
            return 0;
        }

        let mover = if maximizing {
            self.maximizer
        } else {
            self.maximizer.opponent()
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in 0..9 {
            if !board.is_empty(pos) {
                continue;
            }
            let mut trial = board.trial(pos, mover);
            let score = self.evaluate(&mut trial, !maximizing);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }

    /// Minimax value of every empty cell for the maximizing mark, ascending.
    pub fn score_moves(&mut self, board: &BoardState) -> Vec<(usize, i32)> {
        let mut scratch = *board;
        let mut scores = Vec::new();
        for pos in 0..9 {
            if !scratch.is_empty(pos) {
                continue;
            }
            let mut trial = scratch.trial(pos, self.maximizer);
            scores.push((pos, self.evaluate(&mut trial, false)));
        }
        scores
    }

    /// Best cell for the maximizing mark; lowest index wins ties.
    ///
    /// Returns `None` when no move can be applied: the board is full or
    /// already decided.
    pub fn best_move(&mut self, board: &BoardState) -> Option<usize> {
        if board.is_terminal() {
            return None;
        }

        let mut best: Option<(usize, i32)> = None;
        for (pos, score) in self.score_moves(board) {
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        trace!(
            board = %board.encode(),
            maximizer = %self.maximizer,
            nodes = self.nodes,
            best = ?best,
            "minimax search finished"
        );
        best.map(|(pos, _)| pos)
    }
}

/// Score `board` for the engine mark with `maximizing` set when it is to move
pub fn evaluate(board: &BoardState, maximizing: bool) -> i32 {
    let mut scratch = *board;
    Minimax::new(ENGINE_MARK).evaluate(&mut scratch, maximizing)
}

/// Optimal move for the engine mark
pub fn best_move(board: &BoardState) -> Option<usize> {
    best_move_for(board, ENGINE_MARK)
}

/// Optimal move for `mark`
pub fn best_move_for(board: &BoardState, mark: Mark) -> Option<usize> {
    Minimax::new(mark).best_move(board)
}
