//! Caller-side game session: board ownership, turn alternation and restart

use serde::{Deserialize, Serialize};

use super::board::{BoardState, GameResult, Mark};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub mark: Mark,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
}

impl GameOutcome {
    /// Terminal outcome for a status, `None` while the game is running
    pub fn from_result(result: GameResult) -> Option<Self> {
        match result {
            GameResult::XWins => Some(GameOutcome::Win(Mark::X)),
            GameResult::OWins => Some(GameOutcome::Win(Mark::O)),
            GameResult::Draw => Some(GameOutcome::Draw),
            GameResult::InProgress => None,
        }
    }
}

/// A game in progress together with its move history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Game {
    state: BoardState,
    moves: Vec<Move>,
}

impl Game {
    /// Start a game on an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Play the next move for whichever mark is to move.
    ///
    /// Returns the status after the move. The status is re-derived from the
    /// board every time rather than cached.
    ///
    /// # Errors
    ///
    /// Returns error if the game is over or the position is out of range or
    /// occupied.
    pub fn play(&mut self, position: usize) -> Result<GameResult, crate::Error> {
        let mark = self.state.to_move();
        self.state = self.state.apply_move(position)?;
        self.moves.push(Move { position, mark });
        Ok(self.state.status())
    }

    /// Clear the board for a new game
    pub fn reset(&mut self) {
        self.state = BoardState::new();
        self.moves.clear();
    }

    /// Current board
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Moves played so far
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The mark whose turn it is
    pub fn to_move(&self) -> Mark {
        self.state.to_move()
    }

    /// Current status derived from the board
    pub fn result(&self) -> GameResult {
        self.state.status()
    }

    /// Final outcome, once the game has ended
    pub fn outcome(&self) -> Option<GameOutcome> {
        GameOutcome::from_result(self.result())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_records_history() {
        let mut game = Game::new();
        assert_eq!(game.play(4).unwrap(), GameResult::InProgress);
        assert_eq!(game.play(0).unwrap(), GameResult::InProgress);

        assert_eq!(
            game.moves(),
            &[
                Move { position: 4, mark: Mark::X },
                Move { position: 0, mark: Mark::O },
            ]
        );
        assert_eq!(game.to_move(), Mark::X);
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = Game::new();
        for pos in [0, 3, 1, 4] {
            game.play(pos).unwrap();
        }
        assert_eq!(game.play(2).unwrap(), GameResult::XWins);
        assert_eq!(game.outcome(), Some(GameOutcome::Win(Mark::X)));
        assert!(matches!(game.play(5), Err(crate::Error::GameOver)));
    }

    #[test]
    fn test_draw_outcome() {
        let mut game = Game::new();
        for pos in [0, 1, 2, 4, 3, 5, 7, 6] {
            assert_eq!(game.play(pos).unwrap(), GameResult::InProgress);
        }
        assert_eq!(game.play(8).unwrap(), GameResult::Draw);
        assert_eq!(game.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_rejected_move_leaves_state_untouched() {
        let mut game = Game::new();
        game.play(4).unwrap();
        assert!(game.play(4).is_err());
        assert_eq!(game.moves().len(), 1);
        assert_eq!(game.to_move(), Mark::O);
    }

    #[test]
    fn test_reset() {
        let mut game = Game::new();
        game.play(0).unwrap();
        game.play(8).unwrap();
        game.reset();
        assert_eq!(game.state(), &BoardState::new());
        assert!(game.moves().is_empty());
        assert_eq!(game.outcome(), None);
    }
}
