//! Move selection: dispatch to a strategy by difficulty

use std::fmt;

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;
use tracing::debug;

use super::{
    difficulty::Difficulty,
    heuristic::{Tactic, win_or_block},
    minimax::Minimax,
};
use crate::{Error, Result, tictactoe::BoardState};

/// Probability that Medium plays the minimax move when it has nothing to win or block
pub const MEDIUM_OPTIMAL_PROBABILITY: f64 = 0.7;

/// How the selected move was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reason {
    Tactic(Tactic),
    Optimal,
    Random,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Tactic(Tactic::Win) => write!(f, "win"),
            Reason::Tactic(Tactic::Block) => write!(f, "block"),
            Reason::Optimal => write!(f, "optimal"),
            Reason::Random => write!(f, "random"),
        }
    }
}

/// Uniformly random empty cell, `None` on a full board.
pub fn random_move<R: Rng>(board: &BoardState, rng: &mut R) -> Option<usize> {
    let available = board.empty_cells().count();
    if available == 0 {
        return None;
    }
    board.empty_cells().nth(rng.random_range(0..available))
}

/// Select the next move for the mark to move on `board`.
///
/// Returns `None` when there is no move to apply: the board is full or the
/// game is already decided.
pub fn select_move<R: Rng>(
    board: &BoardState,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<usize> {
    select_with_reason(board, difficulty, MEDIUM_OPTIMAL_PROBABILITY, rng).map(|(pos, _)| pos)
}

fn select_with_reason<R: Rng>(
    board: &BoardState,
    difficulty: Difficulty,
    optimal_probability: f64,
    rng: &mut R,
) -> Option<(usize, Reason)> {
    if board.is_terminal() {
        return None;
    }
    let mark = board.to_move();

    let choice = match difficulty {
        Difficulty::Easy => random_move(board, rng).map(|pos| (pos, Reason::Random)),
        Difficulty::Medium => {
            if let Some((pos, tactic)) = win_or_block(board, mark) {
                Some((pos, Reason::Tactic(tactic)))
            } else if rng.random_bool(optimal_probability) {
                Minimax::new(mark)
                    .best_move(board)
                    .map(|pos| (pos, Reason::Optimal))
            } else {
                random_move(board, rng).map(|pos| (pos, Reason::Random))
            }
        }
        Difficulty::Hard => Minimax::new(mark)
            .best_move(board)
            .map(|pos| (pos, Reason::Optimal)),
    };

    if let Some((pos, reason)) = choice {
        debug!(
            board = %board.encode(),
            %mark,
            %difficulty,
            position = pos,
            %reason,
            "selected move"
        );
    }
    choice
}

/// Seeded move selector.
///
/// Owns the random source used by Easy and Medium so that a fixed seed
/// reproduces the same sequence of choices. Difficulty is still passed on
/// every call.
#[derive(Debug, Clone)]
pub struct MoveSelector {
    rng: StdRng,
    optimal_probability: f64,
}

impl MoveSelector {
    /// Selector with a random seed
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_rng(&mut rand::rng()))
    }

    /// Selector with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            optimal_probability: MEDIUM_OPTIMAL_PROBABILITY,
        }
    }

    /// Override the Medium minimax probability.
    ///
    /// # Errors
    ///
    /// Returns error if `probability` is not within `[0, 1]`.
    pub fn with_optimal_probability(mut self, probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(Error::InvalidConfiguration {
                message: format!("optimal probability {probability} must be within [0, 1]"),
            });
        }
        self.optimal_probability = probability;
        Ok(self)
    }

    pub fn optimal_probability(&self) -> f64 {
        self.optimal_probability
    }

    /// Reset the random source to a deterministic seed
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Select the next move, see [`select_move`]
    pub fn select(&mut self, board: &BoardState, difficulty: Difficulty) -> Option<usize> {
        self.select_explained(board, difficulty).map(|(pos, _)| pos)
    }

    /// Select the next move and report which strategy produced it
    pub fn select_explained(
        &mut self,
        board: &BoardState,
        difficulty: Difficulty,
    ) -> Option<(usize, Reason)> {
        select_with_reason(board, difficulty, self.optimal_probability, &mut self.rng)
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Cell, Mark};

    fn board(cells: &str) -> BoardState {
        BoardState::from_string(cells).unwrap()
    }

    #[test]
    fn easy_only_picks_empty_cells() {
        let position = board("XOX.O.X..");
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let pos = select_move(&position, Difficulty::Easy, &mut rng).unwrap();
            assert_eq!(position.get(pos), Cell::Empty);
        }
    }

    #[test]
    fn easy_reaches_every_empty_cell() {
        let position = board("X...O....");
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 9];
        for _ in 0..500 {
            seen[random_move(&position, &mut rng).unwrap()] = true;
        }
        for pos in position.empty_cells() {
            assert!(seen[pos], "cell {pos} never chosen");
        }
        assert!(!seen[0] && !seen[4]);
    }

    #[test]
    fn medium_wins_before_blocking() {
        let mut selector = MoveSelector::with_seed(1);
        let choice = selector.select_explained(&board("XX.OO.X.."), Difficulty::Medium);
        assert_eq!(choice, Some((5, Reason::Tactic(Tactic::Win))));
    }

    #[test]
    fn medium_blocks() {
        let mut selector = MoveSelector::with_seed(1);
        let position = board("XX..O....");
        assert_eq!(position.to_move(), Mark::O);
        assert_eq!(
            selector.select_explained(&position, Difficulty::Medium),
            Some((2, Reason::Tactic(Tactic::Block)))
        );
    }

    #[test]
    fn medium_probability_one_is_always_optimal() {
        let mut selector = MoveSelector::with_seed(5)
            .with_optimal_probability(1.0)
            .unwrap();
        for _ in 0..10 {
            assert_eq!(
                selector.select_explained(&board("X........"), Difficulty::Medium),
                Some((4, Reason::Optimal))
            );
        }
    }

    #[test]
    fn medium_probability_zero_is_always_random() {
        let mut selector = MoveSelector::with_seed(5)
            .with_optimal_probability(0.0)
            .unwrap();
        for _ in 0..10 {
            let (_, reason) = selector
                .select_explained(&board("X........"), Difficulty::Medium)
                .unwrap();
            assert_eq!(reason, Reason::Random);
        }
    }

    #[test]
    fn rejects_out_of_range_probability() {
        assert!(MoveSelector::with_seed(0).with_optimal_probability(1.5).is_err());
        assert!(MoveSelector::with_seed(0).with_optimal_probability(-0.1).is_err());
    }

    #[test]
    fn medium_blend_is_roughly_seventy_thirty() {
        // Nothing to win or block after a corner opening.
        let position = board("X........");
        let mut selector = MoveSelector::with_seed(2024);
        let mut optimal = 0;
        for _ in 0..1000 {
            let choice = selector.select_explained(&position, Difficulty::Medium);
            if let Some((_, Reason::Optimal)) = choice {
                optimal += 1;
            }
        }
        let share = optimal as f64 / 1000.0;
        assert!((0.64..0.76).contains(&share), "optimal share {share}");
    }

    #[test]
    fn hard_matches_minimax() {
        let mut selector = MoveSelector::with_seed(9);
        assert_eq!(selector.select(&board("X........"), Difficulty::Hard), Some(4));
    }

    #[test]
    fn no_move_on_full_or_decided_board() {
        let mut selector = MoveSelector::with_seed(0);
        for difficulty in Difficulty::ALL {
            assert_eq!(selector.select(&board("XOXXOOOXX"), difficulty), None);
            assert_eq!(selector.select(&board("XXXOO...."), difficulty), None);
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let position = board("X...O....");
        let mut first = MoveSelector::with_seed(77);
        let mut second = MoveSelector::with_seed(77);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Easy] {
            for _ in 0..20 {
                assert_eq!(
                    first.select(&position, difficulty),
                    second.select(&position, difficulty)
                );
            }
        }
    }
}
