//! Observer port - hooks into a running series of games

use crate::{
    Result,
    tictactoe::{BoardState, GameOutcome, Mark},
};

/// Observer trait for monitoring a series
///
/// # Event Sequence
///
/// 1. `on_series_start(total_games)` - once
/// 2. For each game:
///    - `on_game_start(game_num)`
///    - `on_move(...)` - for each move
///    - `on_game_end(game_num, outcome)`
/// 3. `on_series_end()` - once
///
/// Every method defaults to a no-op.
pub trait Observer: Send {
    fn on_series_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        Ok(())
    }

    /// Called after a move is selected and before it is applied.
    ///
    /// `state` is the board the move was chosen on.
    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        _state: &BoardState,
        _mark: Mark,
        _move_pos: usize,
    ) -> Result<()> {
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }

    fn on_series_end(&mut self) -> Result<()> {
        Ok(())
    }
}
