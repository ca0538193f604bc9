//! Observer implementations for series play

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::{
    Result,
    ports::Observer,
    tictactoe::{BoardState, GameOutcome, Mark},
};

/// Progress bar observer - shows series progress with a running tally
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            x_wins: 0,
            o_wins: 0,
            draws: 0,
        }
    }

    fn tally(&self) -> String {
        format!("{} O:{} D:{}", self.x_wins, self.o_wins, self.draws)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_series_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games (X:{msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: GameOutcome) -> Result<()> {
        match outcome {
            GameOutcome::Win(Mark::X) => self.x_wins += 1,
            GameOutcome::Win(Mark::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.tally());
        }
        Ok(())
    }

    fn on_series_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.tally());
        }
        Ok(())
    }
}

/// Emits one `tracing` event per move and per finished game
#[derive(Debug, Default)]
pub struct TracingObserver {
    moves: Vec<usize>,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Observer for TracingObserver {
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        self.moves.clear();
        Ok(())
    }

    fn on_move(
        &mut self,
        game_num: usize,
        step_num: usize,
        state: &BoardState,
        mark: Mark,
        move_pos: usize,
    ) -> Result<()> {
        debug!(game_num, step_num, board = %state.encode(), %mark, move_pos, "move");
        self.moves.push(move_pos);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: GameOutcome) -> Result<()> {
        debug!(game_num, ?outcome, moves = ?self.moves, "game finished");
        Ok(())
    }
}
