//! Series pipeline: play repeated games between two agents

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    Result,
    ports::{Agent, Observer},
    tictactoe::{BoardState, GameOutcome, Mark},
};

/// Series configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Number of games to play
    pub num_games: usize,

    /// Random seed; X's agent gets `seed`, O's agent `seed + 1`
    pub seed: Option<u64>,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            num_games: 100,
            seed: None,
        }
    }
}

/// Aggregate result of a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesResult {
    /// Name of the agent playing X
    pub x_agent: String,

    /// Name of the agent playing O
    pub o_agent: String,

    /// Total games played
    pub total_games: usize,

    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,

    /// Mean number of moves per game
    pub avg_game_length: f64,
}

impl SeriesResult {
    fn rate(&self, count: usize) -> f64 {
        if self.total_games > 0 {
            count as f64 / self.total_games as f64
        } else {
            0.0
        }
    }

    pub fn x_win_rate(&self) -> f64 {
        self.rate(self.x_wins)
    }

    pub fn o_win_rate(&self) -> f64 {
        self.rate(self.o_wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Plays a fixed number of games, X always opening
pub struct SeriesRunner {
    config: SeriesConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl SeriesRunner {
    /// Create a new series runner
    pub fn new(config: SeriesConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the runner
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run the series with `x_agent` opening every game
    pub fn run(&mut self, x_agent: &mut dyn Agent, o_agent: &mut dyn Agent) -> Result<SeriesResult> {
        if let Some(seed) = self.config.seed {
            x_agent.set_rng_seed(seed)?;
            o_agent.set_rng_seed(seed.wrapping_add(1))?;
        }

        info!(
            x = x_agent.name(),
            o = o_agent.name(),
            games = self.config.num_games,
            seed = ?self.config.seed,
            "starting series"
        );

        for observer in &mut self.observers {
            observer.on_series_start(self.config.num_games)?;
        }

        let mut x_wins = 0;
        let mut o_wins = 0;
        let mut draws = 0;
        let mut total_moves = 0;

        for game_num in 0..self.config.num_games {
            let (outcome, moves) = self.play_game(game_num, x_agent, o_agent)?;
            total_moves += moves;

            match outcome {
                GameOutcome::Win(Mark::X) => x_wins += 1,
                GameOutcome::Win(Mark::O) => o_wins += 1,
                GameOutcome::Draw => draws += 1,
            }

            for observer in &mut self.observers {
                observer.on_game_end(game_num, outcome)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_series_end()?;
        }

        let total_games = self.config.num_games;
        let result = SeriesResult {
            x_agent: x_agent.name().to_string(),
            o_agent: o_agent.name().to_string(),
            total_games,
            x_wins,
            o_wins,
            draws,
            avg_game_length: if total_games > 0 {
                total_moves as f64 / total_games as f64
            } else {
                0.0
            },
        };

        info!(x_wins, o_wins, draws, "series finished");
        Ok(result)
    }

    fn play_game(
        &mut self,
        game_num: usize,
        x_agent: &mut dyn Agent,
        o_agent: &mut dyn Agent,
    ) -> Result<(GameOutcome, usize)> {
        for observer in &mut self.observers {
            observer.on_game_start(game_num)?;
        }

        let mut state = BoardState::new();
        let mut step_num = 0;

        while !state.is_terminal() {
            let mark = state.to_move();
            let agent: &mut dyn Agent = match mark {
                Mark::X => &mut *x_agent,
                Mark::O => &mut *o_agent,
            };

            let move_pos = agent.select_move(&state)?;

            for observer in &mut self.observers {
                observer.on_move(game_num, step_num, &state, mark, move_pos)?;
            }

            state = state.apply_move(move_pos)?;
            step_num += 1;
        }

        let outcome = match state.winner() {
            Some(winner) => GameOutcome::Win(winner),
            None => GameOutcome::Draw,
        };
        Ok((outcome, step_num))
    }
}
