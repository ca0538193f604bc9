//! Engine-backed agents for series play

use crate::{
    Error, Result,
    engine::{Difficulty, MoveSelector},
    ports::Agent,
    tictactoe::BoardState,
};

/// Computer opponent playing at a fixed difficulty
#[derive(Debug, Clone)]
pub struct EngineAgent {
    name: String,
    difficulty: Difficulty,
    selector: MoveSelector,
}

impl EngineAgent {
    /// Create an agent with a randomly seeded selector
    pub fn new(name: String, difficulty: Difficulty) -> Self {
        Self::with_selector(name, difficulty, MoveSelector::new())
    }

    /// Create an agent with a deterministic seed
    pub fn with_seed(name: String, difficulty: Difficulty, seed: u64) -> Self {
        Self::with_selector(name, difficulty, MoveSelector::with_seed(seed))
    }

    /// Create an agent around an already configured selector
    pub fn with_selector(name: String, difficulty: Difficulty, selector: MoveSelector) -> Self {
        Self {
            name,
            difficulty,
            selector,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Agent for EngineAgent {
    fn select_move(&mut self, state: &BoardState) -> Result<usize> {
        self.selector
            .select(state, self.difficulty)
            .ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.selector.reseed(seed);
        Ok(())
    }
}
